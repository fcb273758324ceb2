use amlak_core::{ListResult, PageParams, ServiceError, new_id, now_rfc3339};
use amlak_sql::{Cond, Filter, Value};

use crate::model::{CreateProperty, Property, PropertyType};
use crate::service::ListingsService;

/// Optional search parameters for property listings.
///
/// beds/baths carry the 1–5 domain where 5 means "5 or more"; values
/// outside that range are rejected by the HTTP layer before this struct
/// is built. The developer field is a *name* and costs one lookup.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilters {
    pub name: Option<String>,
    pub reference_number: Option<i64>,
    pub property_type: Option<PropertyType>,
    pub beds: Option<i64>,
    pub baths: Option<i64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub developer: Option<String>,
}

impl ListingsService {
    /// Create a property. The compound must be live; the property
    /// inherits the compound's developer. The reference number must be
    /// unused among non-deleted properties, and both image fields are
    /// required.
    pub fn create_property(
        &self,
        user_id: &str,
        input: CreateProperty,
    ) -> Result<Property, ServiceError> {
        if input.floor_plan.is_empty() {
            return Err(ServiceError::Validation("Floor plan image is required".into()));
        }
        if input.images.is_empty() {
            return Err(ServiceError::Validation("At least one image is required".into()));
        }
        if !(1..=5).contains(&input.beds) || !(1..=5).contains(&input.baths) {
            return Err(ServiceError::Validation("beds and baths must be between 1 and 5".into()));
        }

        let compound = self.get_compound(&input.compound_id)?;

        let existing: Option<Property> = self.find_one(
            "properties",
            &Filter::live().eq("reference_number", Value::Integer(input.reference_number)),
        )?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(format!(
                "property with reference number {} already exists",
                input.reference_number
            )));
        }

        let now = now_rfc3339();
        let property = Property {
            id: new_id(),
            name: input.name,
            description: input.description,
            reference_number: input.reference_number,
            compound_id: compound.id.clone(),
            developer_id: compound.developer_id.clone(),
            latitude: input.latitude,
            longitude: input.longitude,
            property_type: input.property_type,
            floor_number: input.floor_number,
            total_floors: input.total_floors,
            width: input.width,
            length: input.length,
            height: input.height,
            area: input.area,
            beds: input.beds,
            baths: input.baths,
            parking_spaces: input.parking_spaces,
            finishing_status: input.finishing_status,
            finishing_type: input.finishing_type,
            delivery_date: input.delivery_date,
            price: input.price,
            floor_plan: input.floor_plan,
            images: input.images,
            user_id: user_id.to_string(),
            is_deleted: false,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        self.insert_doc(
            "properties",
            &property.id,
            &property,
            &[
                ("name", Value::Text(property.name.clone())),
                ("reference_number", Value::Integer(property.reference_number)),
                ("type", Value::Text(property.property_type.as_str().to_string())),
                ("beds", Value::Integer(property.beds)),
                ("baths", Value::Integer(property.baths)),
                ("price", Value::Real(property.price)),
                ("compound_id", Value::Text(property.compound_id.clone())),
                ("developer_id", Value::Text(property.developer_id.clone())),
                ("is_deleted", Value::Integer(0)),
                ("created_at", Value::Text(now.clone())),
                ("updated_at", Value::Text(now)),
            ],
        )?;

        Ok(property)
    }

    /// Translate search parameters into a storage filter.
    ///
    /// Always starts from the live-records base. beds/baths follow the
    /// "5 means 5 or more" contract: an exact condition below 5, a ≥5
    /// range condition at 5. Price emits only the bounds supplied. The
    /// developer name resolves to an id via one lookup — an unknown name
    /// aborts with NotFound before any filter is produced.
    pub fn build_property_filter(&self, query: &PropertyFilters) -> Result<Filter, ServiceError> {
        let mut filter = Filter::live();

        if let Some(ref name) = query.name {
            filter.push("name", Cond::Contains(name.clone()));
        }
        if let Some(reference) = query.reference_number {
            filter.push("reference_number", Cond::Eq(Value::Integer(reference)));
        }
        if let Some(property_type) = query.property_type {
            filter.push("type", Cond::Eq(Value::Text(property_type.as_str().to_string())));
        }
        if let Some(beds) = query.beds {
            if beds == 5 {
                filter.push("beds", Cond::Gte(Value::Integer(5)));
            } else {
                filter.push("beds", Cond::Eq(Value::Integer(beds)));
            }
        }
        if let Some(baths) = query.baths {
            if baths == 5 {
                filter.push("baths", Cond::Gte(Value::Integer(5)));
            } else {
                filter.push("baths", Cond::Eq(Value::Integer(baths)));
            }
        }
        if let Some(min) = query.price_min {
            filter.push("price", Cond::Gte(Value::Real(min)));
        }
        if let Some(max) = query.price_max {
            filter.push("price", Cond::Lte(Value::Real(max)));
        }
        if let Some(ref developer_name) = query.developer {
            let developer = self.find_developer_by_name(developer_name)?.ok_or_else(|| {
                ServiceError::NotFound(format!("developer '{}' not found", developer_name))
            })?;
            filter.push("developer_id", Cond::Eq(Value::Text(developer.id)));
        }

        Ok(filter)
    }

    /// Search non-deleted properties. Default page size 10.
    pub fn list_properties(
        &self,
        query: &PropertyFilters,
        params: &PageParams,
    ) -> Result<ListResult<Property>, ServiceError> {
        let filter = self.build_property_filter(query)?;
        tracing::debug!(?filter, page = params.page, "property search");
        let limit = params.limit_or(10);
        let (items, total) = self.find_many("properties", &filter, limit, params.offset(limit))?;
        Ok(ListResult { items, total })
    }

    /// Get a non-deleted property by id.
    pub fn get_property(&self, id: &str) -> Result<Property, ServiceError> {
        self.find_one("properties", &Filter::live().eq("id", Value::Text(id.to_string())))?
            .ok_or_else(|| ServiceError::NotFound(format!("property '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::{sample_compound, sample_developer, sample_property, test_service};
    use std::sync::Arc;

    fn seeded(svc: &Arc<ListingsService>) -> (String, String) {
        let dev = svc.create_developer("u1", sample_developer("Emaar", 100)).unwrap();
        let compound = svc.create_compound("u1", sample_compound(&dev.id, 200)).unwrap();
        (dev.id, compound.id)
    }

    #[test]
    fn test_create_inherits_compound_developer() {
        let svc = test_service();
        let (dev_id, compound_id) = seeded(&svc);

        let property = svc.create_property("u1", sample_property(&compound_id, 300)).unwrap();
        assert_eq!(property.developer_id, dev_id);
        assert_eq!(property.compound_id, compound_id);
    }

    #[test]
    fn test_create_requires_images() {
        let svc = test_service();
        let (_, compound_id) = seeded(&svc);

        let mut input = sample_property(&compound_id, 300);
        input.floor_plan = String::new();
        assert!(matches!(
            svc.create_property("u1", input),
            Err(ServiceError::Validation(_))
        ));

        let mut input = sample_property(&compound_id, 300);
        input.images.clear();
        assert!(matches!(
            svc.create_property("u1", input),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn test_create_duplicate_reference_conflicts() {
        let svc = test_service();
        let (_, compound_id) = seeded(&svc);
        svc.create_property("u1", sample_property(&compound_id, 300)).unwrap();

        let err = svc.create_property("u1", sample_property(&compound_id, 300)).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn test_filter_beds_five_means_five_or_more() {
        let svc = test_service();

        let filter = svc
            .build_property_filter(&PropertyFilters { beds: Some(5), ..Default::default() })
            .unwrap();
        assert_eq!(filter.get("beds"), Some(&Cond::Gte(Value::Integer(5))));

        let filter = svc
            .build_property_filter(&PropertyFilters { beds: Some(3), ..Default::default() })
            .unwrap();
        assert_eq!(filter.get("beds"), Some(&Cond::Eq(Value::Integer(3))));
    }

    #[test]
    fn test_filter_price_emits_only_supplied_bounds() {
        let svc = test_service();

        let filter = svc
            .build_property_filter(&PropertyFilters {
                price_min: Some(100.0),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(filter.get("price"), Some(&Cond::Gte(Value::Real(100.0))));
        let (sql, _) = filter.to_where_clause(1);
        assert!(!sql.contains("price <="));

        // Neither bound: no price condition at all.
        let filter = svc.build_property_filter(&PropertyFilters::default()).unwrap();
        assert!(filter.get("price").is_none());
    }

    #[test]
    fn test_filter_base_is_live_records() {
        let svc = test_service();
        let filter = svc.build_property_filter(&PropertyFilters::default()).unwrap();
        assert_eq!(filter.get("is_deleted"), Some(&Cond::Eq(Value::Integer(0))));
    }

    #[test]
    fn test_filter_unknown_developer_aborts() {
        let svc = test_service();
        let err = svc
            .build_property_filter(&PropertyFilters {
                developer: Some("Emaar".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn test_filter_resolves_developer_name() {
        let svc = test_service();
        let (dev_id, _) = seeded(&svc);

        let filter = svc
            .build_property_filter(&PropertyFilters {
                developer: Some("Emaar".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(filter.get("developer_id"), Some(&Cond::Eq(Value::Text(dev_id))));
    }

    #[test]
    fn test_search_end_to_end() {
        let svc = test_service();
        let (_, compound_id) = seeded(&svc);

        let mut cheap = sample_property(&compound_id, 301);
        cheap.price = 100000.0;
        cheap.beds = 2;
        svc.create_property("u1", cheap).unwrap();

        let mut pricey = sample_property(&compound_id, 302);
        pricey.price = 900000.0;
        pricey.beds = 5;
        svc.create_property("u1", pricey).unwrap();

        let result = svc
            .list_properties(
                &PropertyFilters { price_min: Some(500000.0), ..Default::default() },
                &PageParams::default(),
            )
            .unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].reference_number, 302);

        // Name substring is case-insensitive.
        let result = svc
            .list_properties(
                &PropertyFilters { name: Some("agora".to_string()), ..Default::default() },
                &PageParams::default(),
            )
            .unwrap();
        assert_eq!(result.total, 2);

        let result = svc
            .list_properties(
                &PropertyFilters { beds: Some(5), ..Default::default() },
                &PageParams::default(),
            )
            .unwrap();
        assert_eq!(result.total, 1);
    }

    #[test]
    fn test_soft_deleted_property_is_invisible() {
        let svc = test_service();
        let (_, compound_id) = seeded(&svc);
        let property = svc.create_property("u1", sample_property(&compound_id, 300)).unwrap();

        // Flag the row directly; reads must scope to live records.
        svc.sql
            .exec(
                "UPDATE properties SET is_deleted = 1,
                        data = REPLACE(data, '\"isDeleted\":false', '\"isDeleted\":true')
                 WHERE id = ?1",
                &[Value::Text(property.id.clone())],
            )
            .unwrap();

        assert!(matches!(svc.get_property(&property.id), Err(ServiceError::NotFound(_))));
        let result = svc
            .list_properties(&PropertyFilters::default(), &PageParams::default())
            .unwrap();
        assert_eq!(result.total, 0);
    }
}
