use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Clients match on these —
// never on the human-readable message string.

/// Stable error code constants.
///
/// Clients should match on `code` from `{"code": "NOT_FOUND", "message": "..."}`.
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const MISSING_TOKEN: &str = "MISSING_TOKEN";
    pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
    pub const NO_POLICY_FOR_ROLE: &str = "NO_POLICY_FOR_ROLE";
    pub const MENU_ITEM_NOT_PERMITTED: &str = "MENU_ITEM_NOT_PERMITTED";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified service error type used across all modules.
///
/// Each variant maps to a stable error code (see [`error_code`]) and an
/// HTTP status code. The JSON response always includes both:
///
/// ```json
/// {"code": "NOT_FOUND", "message": "property 'abc' not found"}
/// ```
///
/// The 401 variants cover the whole authentication path: bad login
/// credentials, absent bearer token, failed token verification, and the
/// two policy-authorizer outcomes. The static role guard is the only
/// source of 403.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Resource does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate key / resource already exists. HTTP 409.
    #[error("{0}")]
    Conflict(String),

    /// Input data is invalid. HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Username/password pair did not match a live user. HTTP 401.
    #[error("{0}")]
    InvalidCredentials(String),

    /// No bearer token on a gated request. HTTP 401.
    #[error("{0}")]
    MissingToken(String),

    /// Token failed signature or expiry verification. HTTP 401.
    #[error("{0}")]
    InvalidToken(String),

    /// No policy record exists for the caller's (role, company). HTTP 401.
    #[error("{0}")]
    NoPolicyForRole(String),

    /// The caller's policy does not grant the required menu item. HTTP 401.
    #[error("{0}")]
    MenuItemNotPermitted(String),

    /// Authenticated but the static role requirement failed. HTTP 403.
    #[error("{0}")]
    PermissionDenied(String),

    /// Storage backend failure. HTTP 500.
    #[error("{0}")]
    Storage(String),

    /// Unexpected internal error. HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => error_code::NOT_FOUND,
            Self::Conflict(_) => error_code::ALREADY_EXISTS,
            Self::Validation(_) => error_code::VALIDATION_FAILED,
            Self::InvalidCredentials(_) => error_code::INVALID_CREDENTIALS,
            Self::MissingToken(_) => error_code::MISSING_TOKEN,
            Self::InvalidToken(_) => error_code::INVALID_TOKEN,
            Self::NoPolicyForRole(_) => error_code::NO_POLICY_FOR_ROLE,
            Self::MenuItemNotPermitted(_) => error_code::MENU_ITEM_NOT_PERMITTED,
            Self::PermissionDenied(_) => error_code::PERMISSION_DENIED,
            Self::Storage(_) => error_code::STORAGE_ERROR,
            Self::Internal(_) => error_code::INTERNAL,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials(_)
            | Self::MissingToken(_)
            | Self::InvalidToken(_)
            | Self::NoPolicyForRole(_)
            | Self::MenuItemNotPermitted(_) => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied(_) => StatusCode::FORBIDDEN,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(ServiceError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServiceError::Conflict("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(ServiceError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServiceError::InvalidCredentials("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ServiceError::MissingToken("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ServiceError::InvalidToken("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ServiceError::NoPolicyForRole("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::MenuItemNotPermitted("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::PermissionDenied("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServiceError::Storage("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_code_mapping() {
        assert_eq!(ServiceError::NotFound("x".into()).error_code(), "NOT_FOUND");
        assert_eq!(ServiceError::Conflict("x".into()).error_code(), "ALREADY_EXISTS");
        assert_eq!(ServiceError::Validation("x".into()).error_code(), "VALIDATION_FAILED");
        assert_eq!(
            ServiceError::InvalidCredentials("x".into()).error_code(),
            "INVALID_CREDENTIALS"
        );
        assert_eq!(ServiceError::MissingToken("x".into()).error_code(), "MISSING_TOKEN");
        assert_eq!(ServiceError::InvalidToken("x".into()).error_code(), "INVALID_TOKEN");
        assert_eq!(ServiceError::NoPolicyForRole("x".into()).error_code(), "NO_POLICY_FOR_ROLE");
        assert_eq!(
            ServiceError::MenuItemNotPermitted("x".into()).error_code(),
            "MENU_ITEM_NOT_PERMITTED"
        );
        assert_eq!(ServiceError::PermissionDenied("x".into()).error_code(), "PERMISSION_DENIED");
        assert_eq!(ServiceError::Storage("x".into()).error_code(), "STORAGE_ERROR");
        assert_eq!(ServiceError::Internal("x".into()).error_code(), "INTERNAL");
    }

    #[test]
    fn error_display_is_just_message() {
        assert_eq!(ServiceError::NotFound("user 123".into()).to_string(), "user 123");
        assert_eq!(ServiceError::Conflict("dup key".into()).to_string(), "dup key");
        assert_eq!(
            ServiceError::InvalidCredentials("Invalid credentials".into()).to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn json_response_format() {
        let err = ServiceError::NotFound("property 'abc' not found".into());
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
