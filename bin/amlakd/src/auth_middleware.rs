//! Bearer-token middleware — the token authenticator.
//!
//! Applied over the whole application router. Public paths pass through;
//! everything else needs a valid `Authorization: Bearer <token>` header.
//! On success the decoded claim set is stored in request extensions for
//! the per-route guards and handlers downstream.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use amlak_core::ServiceError;
use auth::service::{AuthError, AuthService};

/// Middleware that extracts and verifies the bearer token.
pub async fn auth_middleware(
    State(svc): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let path = request.uri().path().to_string();

    if is_public_path(&path) {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ServiceError::from(AuthError::MissingToken))?;

    let claims = svc.verify_token(token).map_err(ServiceError::from)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Check if a request path is public (no auth required).
///
/// Login and the browse/search surface are open; every write and every
/// policy endpoint is gated.
pub fn is_public_path(path: &str) -> bool {
    matches!(path, "/health" | "/version" | "/auth/login")
        || path.starts_with("/properties/all")
        || path.starts_with("/properties/one/")
        || path.starts_with("/compounds/all")
        || path.starts_with("/compounds/one/")
        || path.starts_with("/developers/all")
        || path.starts_with("/developers/one/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/health"));
        assert!(is_public_path("/auth/login"));
        assert!(is_public_path("/properties/all"));
        assert!(is_public_path("/properties/one/abc123"));
        assert!(is_public_path("/developers/all"));
    }

    #[test]
    fn test_gated_paths() {
        assert!(!is_public_path("/auth/validate-token"));
        assert!(!is_public_path("/users/create"));
        assert!(!is_public_path("/user-policy/create"));
        assert!(!is_public_path("/properties/create"));
        assert!(!is_public_path("/bookings/create"));
    }
}
