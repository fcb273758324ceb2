use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};

use amlak_core::{ListResult, PageParams, ServiceError};
use auth::api::guard::{RouteGuard, guard_middleware};
use auth::model::{Claims, MenuItem};

use crate::api::AppState;
use crate::model::{CreateDeveloper, Developer};

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/create",
            post(create_developer).route_layer(middleware::from_fn_with_state(
                (state.auth.clone(), RouteGuard::menu_item(MenuItem::Developers)),
                guard_middleware,
            )),
        )
        .route("/all", get(list_developers))
        .route("/one/{id}", get(get_developer))
}

/// POST /developers/create — requires the `developers` menu item.
async fn create_developer(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<CreateDeveloper>,
) -> Result<(StatusCode, Json<Developer>), ServiceError> {
    let developer = state.svc.create_developer(&claims.sub, input)?;
    Ok((StatusCode::CREATED, Json(developer)))
}

/// GET /developers/all — public, paginated (default 5 per page).
async fn list_developers(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListResult<Developer>>, ServiceError> {
    Ok(Json(state.svc.list_developers(&params)?))
}

/// GET /developers/one/:id — public.
async fn get_developer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Developer>, ServiceError> {
    Ok(Json(state.svc.get_developer(&id)?))
}
