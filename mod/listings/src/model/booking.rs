use serde::{Deserialize, Serialize};

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A booking of a property by a user. At most one live booking may
/// exist per property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// The booking user.
    pub user_id: String,

    /// The booked property.
    pub property_id: String,

    /// Offered price — must equal the property's listed price.
    pub price: f64,

    /// Payment reference, set once a payment is recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,

    /// Lifecycle status; new bookings start pending.
    pub booking_status: BookingStatus,

    /// Soft delete flag.
    #[serde(default)]
    pub is_deleted: bool,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for creating a booking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub property_id: String,
    pub price: f64,
}
