use serde::{Deserialize, Serialize};

/// A compound: a named development belonging to a developer. Properties
/// always live inside a compound and inherit its developer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compound {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    pub name: String,
    pub description: String,

    /// Unique reference number.
    pub reference_number: i64,

    /// Owning developer — must reference a live developer at creation.
    pub developer_id: String,

    /// Master plan image URL.
    pub master_plan: String,

    /// Gallery image URLs.
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

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

/// Input for creating a compound.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompound {
    pub name: String,
    pub description: String,
    pub reference_number: i64,
    pub developer_id: String,
    pub master_plan: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}
