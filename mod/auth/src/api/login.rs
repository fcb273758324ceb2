use axum::extract::State;
use axum::routing::post;
use axum::{Extension, Json, Router};

use amlak_core::ServiceError;

use crate::api::AppState;
use crate::model::{Claims, LoginInput, LoginResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/validate-token", post(validate_token))
}

/// POST /auth/login — verify credentials and issue a JWT.
async fn login(
    State(svc): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginResponse>, ServiceError> {
    let user = svc
        .verify_credentials(&input.username, &input.password)
        .map_err(ServiceError::from)?;
    let response = svc.issue_token(&user).map_err(ServiceError::from)?;
    Ok(Json(response))
}

/// POST /auth/validate-token — echo the verified claim set's display
/// fields. The token middleware has already rejected anything invalid.
async fn validate_token(Extension(claims): Extension<Claims>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": claims.name,
        "username": claims.username,
    }))
}
