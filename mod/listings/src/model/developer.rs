use serde::{Deserialize, Serialize};

/// A real-estate developer. Reference numbers are unique among
/// non-deleted developers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Developer name — the lookup key for the property search's
    /// `developer` query parameter (exact match).
    pub name: String,

    /// Short description.
    pub description: String,

    /// Unique reference number.
    pub reference_number: i64,

    /// Logo URL (hosted externally).
    pub logo: String,

    // Contacts
    pub phone: String,
    pub email: String,
    pub website_url: String,

    /// User who created this record.
    pub user_id: String,

    /// Soft delete flag.
    #[serde(default)]
    pub is_deleted: bool,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for creating a developer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloper {
    pub name: String,
    pub description: String,
    pub reference_number: i64,
    pub logo: String,
    pub phone: String,
    pub email: String,
    pub website_url: String,
}
