//! Auth module — credentials, JWT sessions, and the two authorizers.
//!
//! # Resources
//!
//! - **User** — platform identity with a hashed credential and a role
//! - **UserPolicy** — per-(role, company) set of permitted menu items
//!
//! # Request flow
//!
//! Every gated request passes the bearer-token middleware first
//! ([`api::middleware`]), which decodes [`model::Claims`] into request
//! extensions. Routes then declare a [`api::RouteGuard`] — a static role
//! requirement, a menu-item requirement, or both — evaluated in that
//! order by the guard middleware.

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use crate::service::{AuthConfig, AuthService};

/// Auth module: holds the service and contributes the `/auth`, `/users`
/// and `/user-policy` routes.
pub struct AuthModule {
    service: Arc<AuthService>,
}

impl AuthModule {
    /// Create a new AuthModule, initializing the database schema.
    pub fn new(
        sql: Arc<dyn amlak_sql::SQLStore>,
        config: AuthConfig,
    ) -> Result<Self, amlak_core::ServiceError> {
        let service = AuthService::new(sql, config).map_err(amlak_core::ServiceError::from)?;
        Ok(Self { service })
    }

    /// The underlying AuthService, shared with other modules' guards.
    pub fn service(&self) -> &Arc<AuthService> {
        &self.service
    }

    /// Build the module's routes.
    pub fn routes(&self) -> Router {
        api::build_router(Arc::clone(&self.service))
    }
}
