//! Listings module — developers, compounds, properties, bookings.
//!
//! Every resource is a soft-deleted JSON document with indexed columns
//! for the filterable fields. The interesting part is property search:
//! [`service::PropertyFilters`] turns optional query parameters into a
//! structured [`amlak_sql::Filter`] (range conditions for beds/baths and
//! price, substring match on name, developer name resolved to an id)
//! which the store consumes together with page-based pagination.

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use crate::service::ListingsService;

/// Listings module: holds the service and contributes the `/developers`,
/// `/compounds`, `/properties` and `/bookings` routes.
pub struct ListingsModule {
    service: Arc<ListingsService>,
    auth: Arc<auth::service::AuthService>,
}

impl ListingsModule {
    /// Create a new ListingsModule, initializing the database schema.
    /// The auth service handle feeds the per-route guards.
    pub fn new(
        sql: Arc<dyn amlak_sql::SQLStore>,
        auth: Arc<auth::service::AuthService>,
    ) -> Result<Self, amlak_core::ServiceError> {
        let service = ListingsService::new(sql)?;
        Ok(Self { service, auth })
    }

    /// The underlying ListingsService.
    pub fn service(&self) -> &Arc<ListingsService> {
        &self.service
    }

    /// Build the module's routes.
    pub fn routes(&self) -> Router {
        api::build_router(Arc::clone(&self.service), Arc::clone(&self.auth))
    }
}
