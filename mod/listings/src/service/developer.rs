use amlak_core::{ListResult, PageParams, ServiceError, new_id, now_rfc3339};
use amlak_sql::{Filter, Value};

use crate::model::{CreateDeveloper, Developer};
use crate::service::ListingsService;

impl ListingsService {
    /// Create a developer. Reference numbers must be unused among
    /// non-deleted developers.
    pub fn create_developer(
        &self,
        user_id: &str,
        input: CreateDeveloper,
    ) -> Result<Developer, ServiceError> {
        if input.name.is_empty() {
            return Err(ServiceError::Validation("developer name cannot be empty".into()));
        }

        let existing: Option<Developer> = self.find_one(
            "developers",
            &Filter::live().eq("reference_number", Value::Integer(input.reference_number)),
        )?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(format!(
                "developer with reference number {} already exists",
                input.reference_number
            )));
        }

        let now = now_rfc3339();
        let developer = Developer {
            id: new_id(),
            name: input.name,
            description: input.description,
            reference_number: input.reference_number,
            logo: input.logo,
            phone: input.phone,
            email: input.email,
            website_url: input.website_url,
            user_id: user_id.to_string(),
            is_deleted: false,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        self.insert_doc(
            "developers",
            &developer.id,
            &developer,
            &[
                ("name", Value::Text(developer.name.clone())),
                ("reference_number", Value::Integer(developer.reference_number)),
                ("is_deleted", Value::Integer(0)),
                ("created_at", Value::Text(now.clone())),
                ("updated_at", Value::Text(now)),
            ],
        )?;

        Ok(developer)
    }

    /// Get a non-deleted developer by id.
    pub fn get_developer(&self, id: &str) -> Result<Developer, ServiceError> {
        self.find_one("developers", &Filter::live().eq("id", Value::Text(id.to_string())))?
            .ok_or_else(|| ServiceError::NotFound(format!("developer '{}' not found", id)))
    }

    /// Exact-name lookup among non-deleted developers. Feeds the property
    /// search's developer-name resolution.
    pub fn find_developer_by_name(&self, name: &str) -> Result<Option<Developer>, ServiceError> {
        self.find_one("developers", &Filter::live().eq("name", Value::Text(name.to_string())))
    }

    /// List non-deleted developers with pagination.
    pub fn list_developers(
        &self,
        params: &PageParams,
    ) -> Result<ListResult<Developer>, ServiceError> {
        let limit = params.limit_or(5);
        let (items, total) =
            self.find_many("developers", &Filter::live(), limit, params.offset(limit))?;
        Ok(ListResult { items, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::{sample_developer, test_service};

    #[test]
    fn test_create_and_get() {
        let svc = test_service();
        let dev = svc.create_developer("u1", sample_developer("Emaar", 100)).unwrap();
        assert_eq!(dev.user_id, "u1");

        let fetched = svc.get_developer(&dev.id).unwrap();
        assert_eq!(fetched.name, "Emaar");
    }

    #[test]
    fn test_duplicate_reference_number_conflicts() {
        let svc = test_service();
        svc.create_developer("u1", sample_developer("Emaar", 100)).unwrap();
        let err = svc.create_developer("u1", sample_developer("Sodic", 100)).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn test_name_lookup_is_exact() {
        let svc = test_service();
        svc.create_developer("u1", sample_developer("Emaar", 100)).unwrap();

        assert!(svc.find_developer_by_name("Emaar").unwrap().is_some());
        assert!(svc.find_developer_by_name("Emaar Misr").unwrap().is_none());
    }

    #[test]
    fn test_list_defaults_to_five_per_page() {
        let svc = test_service();
        for i in 0..7 {
            svc.create_developer("u1", sample_developer(&format!("Dev {}", i), 100 + i))
                .unwrap();
        }
        let list = svc.list_developers(&PageParams::default()).unwrap();
        assert_eq!(list.items.len(), 5);
        assert_eq!(list.total, 7);

        let page2 = svc
            .list_developers(&PageParams { page: 2, limit: None })
            .unwrap();
        assert_eq!(page2.items.len(), 2);
    }
}
