use serde::{Deserialize, Serialize};

/// The two static roles. Policies use free-form role strings; the user
/// record itself only ever carries one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform user. Credentials are stored as an argon2 hash; the hash
/// never leaves the service layer — it is skipped on serialization, so
/// it is also absent from the persisted JSON document and re-read from
/// the indexed `password_hash` column instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Login name. Unique among non-deleted users, case-sensitive.
    pub username: String,

    /// Argon2 password hash. Never serialized.
    #[serde(skip)]
    pub password_hash: String,

    /// Static role.
    pub role: Role,

    /// Company this user belongs to. Optional; policy-gated endpoints
    /// require it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,

    /// Soft delete flag.
    #[serde(default)]
    pub is_deleted: bool,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for the admin-only user creation flow.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub company_id: Option<String>,
}

fn default_role() -> Role {
    Role::User
}

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login response body: the signed token plus the display fields the
/// frontend shows without decoding the token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub name: String,
    pub username: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: "u1".into(),
            name: "Ahmed Ayman".into(),
            username: "a.ayman".into(),
            password_hash: "$argon2id$secret".into(),
            role: Role::User,
            company_id: None,
            is_deleted: false,
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: "2025-01-01T00:00:00Z".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("passwordHash"));
    }
}
