use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router, middleware};

use amlak_core::{ListResult, PageParams, ServiceError};

use crate::api::AppState;
use crate::api::guard::{RouteGuard, guard_middleware};
use crate::model::{Claims, CreateUserPolicy, Role, UserPolicy};
use crate::service::AuthError;

pub fn routes(svc: &AppState) -> Router<AppState> {
    let admin = |svc: &AppState| {
        middleware::from_fn_with_state((svc.clone(), RouteGuard::role(Role::Admin)), guard_middleware)
    };

    Router::new()
        .route("/create", post(create_policy).route_layer(admin(svc)))
        .route("/update/{id}", put(update_policy).route_layer(admin(svc)))
        .route("/delete/{id}", delete(delete_policy).route_layer(admin(svc)))
        .route("/get/one/{role}", get(get_policy_by_role))
        .route("/get/company", get(get_company_policies))
}

/// The company scope for every policy operation comes from the
/// authenticated claims, never from the payload.
fn company_of(claims: &Claims) -> Result<&str, ServiceError> {
    claims
        .company_id
        .as_deref()
        .ok_or_else(|| ServiceError::Validation("authenticated user has no company".into()))
}

/// POST /user-policy/create — admin only.
async fn create_policy(
    State(svc): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<CreateUserPolicy>,
) -> Result<(StatusCode, Json<UserPolicy>), ServiceError> {
    let company_id = company_of(&claims)?;
    let policy = svc.create_policy(company_id, input).map_err(ServiceError::from)?;
    Ok((StatusCode::CREATED, Json(policy)))
}

/// PUT /user-policy/update/:id — admin only.
async fn update_policy(
    State(svc): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(input): Json<CreateUserPolicy>,
) -> Result<Json<UserPolicy>, ServiceError> {
    let company_id = company_of(&claims)?;
    let policy = svc
        .update_policy(&id, company_id, input)
        .map_err(ServiceError::from)?;
    Ok(Json(policy))
}

/// DELETE /user-policy/delete/:id — admin only. Soft delete.
async fn delete_policy(
    State(svc): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<UserPolicy>, ServiceError> {
    let company_id = company_of(&claims)?;
    let policy = svc.delete_policy(&id, company_id).map_err(ServiceError::from)?;
    Ok(Json(policy))
}

/// GET /user-policy/get/one/:role — any authenticated caller.
async fn get_policy_by_role(
    State(svc): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(role): Path<String>,
) -> Result<Json<UserPolicy>, ServiceError> {
    let company_id = company_of(&claims)?;
    let policy = svc
        .get_policy(&role, company_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::from(AuthError::NotFound("User Policy not found".into())))?;
    Ok(Json(policy))
}

/// GET /user-policy/get/company — the caller's company's policies.
async fn get_company_policies(
    State(svc): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListResult<UserPolicy>>, ServiceError> {
    let company_id = company_of(&claims)?;
    let result = svc
        .list_company_policies(company_id, &params)
        .map_err(ServiceError::from)?;
    Ok(Json(result))
}
