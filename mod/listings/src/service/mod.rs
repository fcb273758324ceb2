pub mod booking;
pub mod compound;
pub mod developer;
pub mod property;
pub mod schema;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use amlak_core::ServiceError;
use amlak_sql::{Filter, SQLStore, Value};

pub use property::PropertyFilters;

/// The Listings service. Holds the document store; all four resources
/// share the generic helpers below.
pub struct ListingsService {
    pub(crate) sql: Arc<dyn SQLStore>,
}

impl ListingsService {
    /// Create a new ListingsService, initializing the DB schema.
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Arc<Self>, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Arc::new(Self { sql }))
    }

    // ── Generic document helpers (same pattern as AuthService) ──

    /// Insert a record as JSON into a table with indexed columns.
    pub(crate) fn insert_doc<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), ServiceError> {
        let json =
            serde_json::to_string(record).map_err(|e| ServiceError::Internal(e.to_string()))?;

        let mut cols = vec!["id", "data"];
        let mut placeholders = vec!["?1".to_string(), "?2".to_string()];
        let mut params = vec![Value::Text(id.to_string()), Value::Text(json)];

        for (i, (col, val)) in indexes.iter().enumerate() {
            cols.push(col);
            placeholders.push(format!("?{}", i + 3));
            params.push(val.clone());
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            cols.join(", "),
            placeholders.join(", "),
        );

        self.sql.exec(&sql, &params).map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint") {
                ServiceError::Conflict(msg)
            } else {
                ServiceError::Storage(msg)
            }
        })?;

        Ok(())
    }

    /// Find the first record matching a filter, or None.
    pub(crate) fn find_one<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &Filter,
    ) -> Result<Option<T>, ServiceError> {
        let (where_sql, params) = filter.to_where_clause(1);
        let sql = format!("SELECT data FROM {}{} LIMIT 1", table, where_sql);
        let rows = self
            .sql
            .query(&sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        match rows.first().and_then(|r| r.get_str("data")) {
            Some(data) => serde_json::from_str(data)
                .map(Some)
                .map_err(|e| ServiceError::Internal(e.to_string())),
            None => Ok(None),
        }
    }

    /// List records matching a filter, newest first, with a total count.
    pub(crate) fn find_many<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &Filter,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<T>, usize), ServiceError> {
        let (where_sql, mut params) = filter.to_where_clause(1);

        let count_sql = format!("SELECT COUNT(*) AS cnt FROM {}{}", table, where_sql);
        let count_rows = self
            .sql
            .query(&count_sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let total = count_rows.first().and_then(|r| r.get_i64("cnt")).unwrap_or(0) as usize;

        let limit_idx = params.len() + 1;
        let offset_idx = params.len() + 2;
        params.push(Value::Integer(limit as i64));
        params.push(Value::Integer(offset as i64));

        let sql = format!(
            "SELECT data FROM {}{} ORDER BY created_at DESC LIMIT ?{} OFFSET ?{}",
            table, where_sql, limit_idx, offset_idx,
        );
        let rows = self
            .sql
            .query(&sql, &params)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            let data = row
                .get_str("data")
                .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
            items.push(
                serde_json::from_str(data).map_err(|e| ServiceError::Internal(e.to_string()))?,
            );
        }

        Ok((items, total))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use amlak_sql::SqliteStore;

    use super::ListingsService;
    use crate::model::{
        CreateCompound, CreateDeveloper, CreateProperty, FinishingStatus, FinishingType,
        PropertyType,
    };

    pub(crate) fn test_service() -> Arc<ListingsService> {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        ListingsService::new(sql).unwrap()
    }

    pub(crate) fn sample_developer(name: &str, reference: i64) -> CreateDeveloper {
        CreateDeveloper {
            name: name.to_string(),
            description: "A leading residential developer".to_string(),
            reference_number: reference,
            logo: "https://img.example.com/logo.png".to_string(),
            phone: "+201000000000".to_string(),
            email: "contact@example.com".to_string(),
            website_url: "https://example.com".to_string(),
        }
    }

    pub(crate) fn sample_compound(developer_id: &str, reference: i64) -> CreateCompound {
        CreateCompound {
            name: "Agora Sidi Abdelrahman".to_string(),
            description: "North Coast compound".to_string(),
            reference_number: reference,
            developer_id: developer_id.to_string(),
            master_plan: "https://img.example.com/plan.png".to_string(),
            images: vec!["https://img.example.com/1.png".to_string()],
            latitude: None,
            longitude: None,
        }
    }

    pub(crate) fn sample_property(compound_id: &str, reference: i64) -> CreateProperty {
        CreateProperty {
            name: "Agora Sidi Abdelrahman in North Coast".to_string(),
            description: "Sea-view unit".to_string(),
            reference_number: reference,
            compound_id: compound_id.to_string(),
            latitude: None,
            longitude: None,
            property_type: PropertyType::Apartment,
            floor_number: 2,
            total_floors: 5,
            width: 10.0,
            length: 12.0,
            height: 3.0,
            area: 120.0,
            beds: 3,
            baths: 2,
            parking_spaces: 1,
            finishing_status: FinishingStatus::Finished,
            finishing_type: FinishingType::FullyFinished,
            delivery_date: "2026-06-01T00:00:00Z".to_string(),
            price: 250000.0,
            floor_plan: "https://img.example.com/floor.png".to_string(),
            images: vec!["https://img.example.com/p1.png".to_string()],
        }
    }
}
