pub mod guard;
mod login;
mod policies;
mod users;

use std::sync::Arc;

use axum::Router;

use crate::service::AuthService;

/// Shared application state.
pub type AppState = Arc<AuthService>;

/// Build the auth module router: `/auth`, `/users`, `/user-policy`.
///
/// The bearer-token middleware is applied by the binary over the whole
/// application; these routes only add their per-route guards.
pub fn build_router(svc: Arc<AuthService>) -> Router {
    Router::new()
        .nest("/auth", login::routes())
        .nest("/users", users::routes(&svc))
        .nest("/user-policy", policies::routes(&svc))
        .with_state(svc)
}
