//! Route registration — collects module routes + system endpoints.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;

use auth::service::AuthService;

use crate::auth_middleware;

/// Build the complete router with all routes.
///
/// Module routers already carry their own path prefixes and state; the
/// binary merges them and layers the token authenticator over everything.
pub fn build_router(auth_svc: Arc<AuthService>, module_routes: Vec<Router>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    for router in module_routes {
        app = app.merge(router);
    }

    app.layer(middleware::from_fn_with_state(
        auth_svc,
        auth_middleware::auth_middleware,
    ))
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "amlakd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
