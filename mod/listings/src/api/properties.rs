use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use serde::Deserialize;

use amlak_core::{ListResult, PageParams, ServiceError};
use auth::api::guard::{RouteGuard, guard_middleware};
use auth::model::{Claims, MenuItem};

use crate::api::AppState;
use crate::model::{CreateProperty, Property, PropertyType};
use crate::service::PropertyFilters;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/create",
            post(create_property).route_layer(middleware::from_fn_with_state(
                (state.auth.clone(), RouteGuard::menu_item(MenuItem::Properties)),
                guard_middleware,
            )),
        )
        .route("/all", get(list_properties))
        .route("/one/{id}", get(get_property))
}

/// Search parameters for GET /properties/all.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyListQuery {
    page: Option<usize>,
    limit: Option<usize>,
    name: Option<String>,
    reference_number: Option<i64>,
    #[serde(rename = "type")]
    property_type: Option<PropertyType>,
    beds: Option<i64>,
    baths: Option<i64>,
    price_min: Option<f64>,
    price_max: Option<f64>,
    developer: Option<String>,
}

/// POST /properties/create — requires the `properties` menu item.
async fn create_property(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(input): Json<CreateProperty>,
) -> Result<(StatusCode, Json<Property>), ServiceError> {
    let property = state.svc.create_property(&claims.sub, input)?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// GET /properties/all — public search with pagination (default 10).
///
/// beds/baths accept 1–5, where 5 stands for "5 or more"; anything else
/// is rejected here, before the filter builder runs.
async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<PropertyListQuery>,
) -> Result<Json<ListResult<Property>>, ServiceError> {
    for (field, value) in [("beds", query.beds), ("baths", query.baths)] {
        if let Some(n) = value {
            if !(1..=5).contains(&n) {
                return Err(ServiceError::Validation(format!(
                    "{} must be between 1 and 5",
                    field
                )));
            }
        }
    }

    let filters = PropertyFilters {
        name: query.name,
        reference_number: query.reference_number,
        property_type: query.property_type,
        beds: query.beds,
        baths: query.baths,
        price_min: query.price_min,
        price_max: query.price_max,
        developer: query.developer,
    };
    let params = PageParams {
        page: query.page.unwrap_or(1),
        limit: query.limit,
    };

    Ok(Json(state.svc.list_properties(&filters, &params)?))
}

/// GET /properties/one/:id — public.
async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, ServiceError> {
    Ok(Json(state.svc.get_property(&id)?))
}
