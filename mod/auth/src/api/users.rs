use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router, middleware};

use amlak_core::ServiceError;

use crate::api::AppState;
use crate::api::guard::{RouteGuard, guard_middleware};
use crate::model::{CreateUser, Role, User};

pub fn routes(svc: &AppState) -> Router<AppState> {
    Router::new().route(
        "/create",
        post(create_user).route_layer(middleware::from_fn_with_state(
            (svc.clone(), RouteGuard::role(Role::Admin)),
            guard_middleware,
        )),
    )
}

/// POST /users/create — admin only.
async fn create_user(
    State(svc): State<AppState>,
    Json(input): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), ServiceError> {
    let user = svc.create_user(input).map_err(ServiceError::from)?;
    Ok((StatusCode::CREATED, Json(user)))
}
