use serde::{Deserialize, Serialize};

/// Property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    Villa,
    Duplex,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Duplex => "Duplex",
        }
    }
}

/// Finishing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishingStatus {
    #[serde(rename = "Not Finished")]
    NotFinished,
    #[serde(rename = "In Progress")]
    InProgress,
    Finished,
}

/// Finishing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishingType {
    Core,
    #[serde(rename = "Semi Finished")]
    SemiFinished,
    #[serde(rename = "Fully Finished")]
    FullyFinished,
}

/// A property listing.
///
/// beds/baths are recorded 1–5 where 5 stands for "5 or more" — the
/// search layer turns a 5 into a ≥5 condition. `developer_id` is always
/// the owning compound's developer, copied at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    // Basic info
    pub name: String,
    pub description: String,

    /// Unique reference number.
    pub reference_number: i64,

    /// Owning compound — must reference a live compound at creation.
    pub compound_id: String,

    /// The compound's developer, denormalized for search.
    pub developer_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    // Details
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub floor_number: i64,
    pub total_floors: i64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub area: f64,
    pub beds: i64,
    pub baths: i64,
    pub parking_spaces: i64,
    pub finishing_status: FinishingStatus,
    pub finishing_type: FinishingType,

    /// RFC 3339 delivery date.
    pub delivery_date: String,

    pub price: f64,

    /// Floor plan image URL.
    pub floor_plan: String,

    /// Gallery image URLs.
    pub images: Vec<String>,

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

/// Input for creating a property. The developer is not part of the
/// payload — it is resolved from the compound.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperty {
    pub name: String,
    pub description: String,
    pub reference_number: i64,
    pub compound_id: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub floor_number: i64,
    pub total_floors: i64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub area: f64,
    pub beds: i64,
    pub baths: i64,
    pub parking_spaces: i64,
    pub finishing_status: FinishingStatus,
    pub finishing_type: FinishingType,
    pub delivery_date: String,
    pub price: f64,
    pub floor_plan: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(serde_json::to_string(&PropertyType::Apartment).unwrap(), "\"Apartment\"");
        assert_eq!(
            serde_json::to_string(&FinishingStatus::NotFinished).unwrap(),
            "\"Not Finished\""
        );
        assert_eq!(
            serde_json::from_str::<FinishingType>("\"Semi Finished\"").unwrap(),
            FinishingType::SemiFinished
        );
    }

    #[test]
    fn test_unknown_property_type_rejected() {
        assert!(serde_json::from_str::<PropertyType>("\"Chalet\"").is_err());
    }
}
