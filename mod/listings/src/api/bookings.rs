use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Extension, Json, Router, middleware};

use amlak_core::ServiceError;
use auth::api::guard::{RouteGuard, guard_middleware};
use auth::model::{Claims, Role};

use crate::api::AppState;
use crate::model::{Booking, CreateBooking};

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new().route(
        "/create",
        post(create_booking).route_layer(middleware::from_fn_with_state(
            (state.auth.clone(), RouteGuard::role(Role::User)),
            guard_middleware,
        )),
    )
}

/// POST /bookings/create — role `user` only (admins don't book).
async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<CreateBooking>,
) -> Result<(StatusCode, Json<Booking>), ServiceError> {
    let booking = state.svc.create_booking(&claims.sub, input)?;
    Ok((StatusCode::CREATED, Json(booking)))
}
