use amlak_core::{ListResult, PageParams, new_id, now_rfc3339};
use amlak_sql::{Filter, Value};

use crate::model::{Claims, CreateUserPolicy, MenuItem, UserPolicy};
use crate::service::{AuthError, AuthService};

impl AuthService {
    /// Create a policy for (role, company).
    ///
    /// At most one non-deleted policy may exist per pair; a duplicate
    /// create is rejected, never upserted.
    pub fn create_policy(
        &self,
        company_id: &str,
        input: CreateUserPolicy,
    ) -> Result<UserPolicy, AuthError> {
        if input.role.is_empty() {
            return Err(AuthError::Validation("policy role cannot be empty".into()));
        }
        if input.menu_items.is_empty() {
            return Err(AuthError::Validation("policy menu items cannot be empty".into()));
        }

        if self.get_policy(&input.role, company_id)?.is_some() {
            return Err(AuthError::Conflict(format!(
                "policy for role '{}' already exists in this company",
                input.role
            )));
        }

        let now = now_rfc3339();
        let policy = UserPolicy {
            id: new_id(),
            role: input.role,
            company_id: company_id.to_string(),
            menu_items: input.menu_items,
            is_deleted: false,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        self.insert_doc(
            "user_policies",
            &policy.id,
            &policy,
            &[
                ("role", Value::Text(policy.role.clone())),
                ("company_id", Value::Text(policy.company_id.clone())),
                ("is_deleted", Value::Integer(0)),
                ("created_at", Value::Text(now.clone())),
                ("updated_at", Value::Text(now)),
            ],
        )?;

        Ok(policy)
    }

    /// Replace a policy's role and menu items. Scoped to the caller's
    /// company — updating another company's policy reports NotFound.
    pub fn update_policy(
        &self,
        id: &str,
        company_id: &str,
        input: CreateUserPolicy,
    ) -> Result<UserPolicy, AuthError> {
        let mut policy = self.get_policy_by_id(id, company_id)?;

        policy.role = input.role;
        policy.menu_items = input.menu_items;
        policy.updated_at = now_rfc3339();

        self.update_doc(
            "user_policies",
            id,
            &policy,
            &[
                ("role", Value::Text(policy.role.clone())),
                ("updated_at", Value::Text(policy.updated_at.clone())),
            ],
        )?;

        Ok(policy)
    }

    /// Soft-delete a policy, scoped to the caller's company.
    pub fn delete_policy(&self, id: &str, company_id: &str) -> Result<UserPolicy, AuthError> {
        let mut policy = self.get_policy_by_id(id, company_id)?;

        policy.is_deleted = true;
        policy.updated_at = now_rfc3339();

        self.update_doc(
            "user_policies",
            id,
            &policy,
            &[
                ("is_deleted", Value::Integer(1)),
                ("updated_at", Value::Text(policy.updated_at.clone())),
            ],
        )?;

        Ok(policy)
    }

    /// Look up the live policy for (role, company), if any.
    pub fn get_policy(&self, role: &str, company_id: &str) -> Result<Option<UserPolicy>, AuthError> {
        self.find_one(
            "user_policies",
            &Filter::live()
                .eq("role", Value::Text(role.to_string()))
                .eq("company_id", Value::Text(company_id.to_string())),
        )
    }

    /// List a company's live policies with pagination.
    pub fn list_company_policies(
        &self,
        company_id: &str,
        params: &PageParams,
    ) -> Result<ListResult<UserPolicy>, AuthError> {
        let limit = params.limit_or(50);
        let (items, total) = self.find_many(
            "user_policies",
            &Filter::live().eq("company_id", Value::Text(company_id.to_string())),
            limit,
            params.offset(limit),
        )?;
        Ok(ListResult { items, total })
    }

    /// The policy authorizer: does the caller's (role, company) policy
    /// permit the required menu item?
    ///
    /// Decision order: a claim set without a company can match no policy;
    /// a missing policy fails before a missing menu item.
    pub fn check_menu_access(&self, claims: &Claims, required: MenuItem) -> Result<(), AuthError> {
        let role = claims.role.as_str();
        let company_id = claims
            .company_id
            .as_deref()
            .ok_or_else(|| AuthError::NoPolicyForRole(role.to_string()))?;

        let policy = self
            .get_policy(role, company_id)?
            .ok_or_else(|| AuthError::NoPolicyForRole(role.to_string()))?;

        if !policy.menu_items.contains(&required) {
            return Err(AuthError::MenuItemNotPermitted(required.to_string()));
        }

        Ok(())
    }

    fn get_policy_by_id(&self, id: &str, company_id: &str) -> Result<UserPolicy, AuthError> {
        self.find_one(
            "user_policies",
            &Filter::live()
                .eq("id", Value::Text(id.to_string()))
                .eq("company_id", Value::Text(company_id.to_string())),
        )?
        .ok_or_else(|| AuthError::NotFound("User Policy not found".into()))
    }
}
