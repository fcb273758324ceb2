mod bookings;
mod compounds;
mod developers;
mod properties;

use std::sync::Arc;

use axum::Router;

use auth::service::AuthService;

use crate::service::ListingsService;

/// Shared application state: the listings service plus the auth service
/// handle the per-route guards check policies against.
#[derive(Clone)]
pub struct AppState {
    pub svc: Arc<ListingsService>,
    pub auth: Arc<AuthService>,
}

/// Build the listings module router.
pub fn build_router(svc: Arc<ListingsService>, auth: Arc<AuthService>) -> Router {
    let state = AppState { svc, auth };
    Router::new()
        .nest("/developers", developers::routes(&state))
        .nest("/compounds", compounds::routes(&state))
        .nest("/properties", properties::routes(&state))
        .nest("/bookings", bookings::routes(&state))
        .with_state(state)
}
