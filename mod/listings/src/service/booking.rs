use amlak_core::{ServiceError, new_id, now_rfc3339};
use amlak_sql::{Filter, Value};

use crate::model::{Booking, BookingStatus, CreateBooking};
use crate::service::ListingsService;

impl ListingsService {
    /// Create a booking. The property must be live, the offered price
    /// must equal the listed price, and no other live booking may exist
    /// for the property. New bookings start pending.
    pub fn create_booking(
        &self,
        user_id: &str,
        input: CreateBooking,
    ) -> Result<Booking, ServiceError> {
        let property = self.get_property(&input.property_id)?;

        if property.price != input.price {
            return Err(ServiceError::Validation("Property price does not match".into()));
        }

        let existing: Option<Booking> = self.find_one(
            "bookings",
            &Filter::live().eq("property_id", Value::Text(property.id.clone())),
        )?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(
                "Booking already exists for this property".into(),
            ));
        }

        let now = now_rfc3339();
        let booking = Booking {
            id: new_id(),
            user_id: user_id.to_string(),
            property_id: property.id,
            price: input.price,
            payment_id: None,
            booking_status: BookingStatus::Pending,
            is_deleted: false,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        self.insert_doc(
            "bookings",
            &booking.id,
            &booking,
            &[
                ("user_id", Value::Text(booking.user_id.clone())),
                ("property_id", Value::Text(booking.property_id.clone())),
                ("booking_status", Value::Text("pending".to_string())),
                ("is_deleted", Value::Integer(0)),
                ("created_at", Value::Text(now.clone())),
                ("updated_at", Value::Text(now)),
            ],
        )?;

        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::{sample_compound, sample_developer, sample_property, test_service};

    #[test]
    fn test_booking_rules() {
        let svc = test_service();
        let dev = svc.create_developer("u1", sample_developer("Emaar", 100)).unwrap();
        let compound = svc.create_compound("u1", sample_compound(&dev.id, 200)).unwrap();
        let property = svc.create_property("u1", sample_property(&compound.id, 300)).unwrap();

        // Price must match the listing.
        let err = svc
            .create_booking("buyer", CreateBooking {
                property_id: property.id.clone(),
                price: property.price - 1.0,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let booking = svc
            .create_booking("buyer", CreateBooking {
                property_id: property.id.clone(),
                price: property.price,
            })
            .unwrap();
        assert_eq!(booking.booking_status, BookingStatus::Pending);
        assert!(booking.payment_id.is_none());

        // One live booking per property.
        let err = svc
            .create_booking("other", CreateBooking {
                property_id: property.id.clone(),
                price: property.price,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn test_booking_unknown_property() {
        let svc = test_service();
        let err = svc
            .create_booking("buyer", CreateBooking {
                property_id: "missing".to_string(),
                price: 1.0,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
