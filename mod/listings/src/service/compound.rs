use amlak_core::{ListResult, PageParams, ServiceError, new_id, now_rfc3339};
use amlak_sql::{Filter, Value};

use crate::model::{Compound, CreateCompound};
use crate::service::ListingsService;

impl ListingsService {
    /// Create a compound. The referenced developer must be live; the
    /// reference number must be unused among non-deleted compounds.
    pub fn create_compound(
        &self,
        user_id: &str,
        input: CreateCompound,
    ) -> Result<Compound, ServiceError> {
        // Existence check first: a dangling developer id is the caller's
        // mistake regardless of the reference number.
        let _developer = self.get_developer(&input.developer_id)?;

        let existing: Option<Compound> = self.find_one(
            "compounds",
            &Filter::live().eq("reference_number", Value::Integer(input.reference_number)),
        )?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(format!(
                "compound with reference number {} already exists",
                input.reference_number
            )));
        }

        let now = now_rfc3339();
        let compound = Compound {
            id: new_id(),
            name: input.name,
            description: input.description,
            reference_number: input.reference_number,
            developer_id: input.developer_id,
            master_plan: input.master_plan,
            images: input.images,
            latitude: input.latitude,
            longitude: input.longitude,
            user_id: user_id.to_string(),
            is_deleted: false,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        self.insert_doc(
            "compounds",
            &compound.id,
            &compound,
            &[
                ("name", Value::Text(compound.name.clone())),
                ("reference_number", Value::Integer(compound.reference_number)),
                ("developer_id", Value::Text(compound.developer_id.clone())),
                ("is_deleted", Value::Integer(0)),
                ("created_at", Value::Text(now.clone())),
                ("updated_at", Value::Text(now)),
            ],
        )?;

        Ok(compound)
    }

    /// Get a non-deleted compound by id.
    pub fn get_compound(&self, id: &str) -> Result<Compound, ServiceError> {
        self.find_one("compounds", &Filter::live().eq("id", Value::Text(id.to_string())))?
            .ok_or_else(|| ServiceError::NotFound(format!("compound '{}' not found", id)))
    }

    /// List non-deleted compounds with pagination.
    pub fn list_compounds(&self, params: &PageParams) -> Result<ListResult<Compound>, ServiceError> {
        let limit = params.limit_or(10);
        let (items, total) =
            self.find_many("compounds", &Filter::live(), limit, params.offset(limit))?;
        Ok(ListResult { items, total })
    }
}
