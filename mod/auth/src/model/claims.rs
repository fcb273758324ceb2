use serde::{Deserialize, Serialize};

use super::Role;

/// JWT claims payload — the session claim set.
///
/// Derived from a verified token on every request and attached to the
/// request extensions by the token middleware. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id.
    pub sub: String,
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Static role.
    pub role: Role,
    /// Company the user belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}
