use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};

use amlak_core::{ListResult, PageParams, ServiceError};
use auth::api::guard::{RouteGuard, guard_middleware};
use auth::model::{Claims, MenuItem};

use crate::api::AppState;
use crate::model::{Compound, CreateCompound};

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/create",
            post(create_compound).route_layer(middleware::from_fn_with_state(
                (state.auth.clone(), RouteGuard::menu_item(MenuItem::Compounds)),
                guard_middleware,
            )),
        )
        .route("/all", get(list_compounds))
        .route("/one/{id}", get(get_compound))
}

/// POST /compounds/create — requires the `compounds` menu item.
async fn create_compound(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<CreateCompound>,
) -> Result<(StatusCode, Json<Compound>), ServiceError> {
    let compound = state.svc.create_compound(&claims.sub, input)?;
    Ok((StatusCode::CREATED, Json(compound)))
}

/// GET /compounds/all — public, paginated (default 10 per page).
async fn list_compounds(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ListResult<Compound>>, ServiceError> {
    Ok(Json(state.svc.list_compounds(&params)?))
}

/// GET /compounds/one/:id — public.
async fn get_compound(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Compound>, ServiceError> {
    Ok(Json(state.svc.get_compound(&id)?))
}
