use serde::{Deserialize, Serialize};

/// An application area used as the unit of access-control granularity.
/// A role's policy lists the items its members may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItem {
    Dashboard,
    Users,
    Properties,
    Compounds,
    Developers,
    Bookings,
    Settings,
}

impl MenuItem {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuItem::Dashboard => "dashboard",
            MenuItem::Users => "users",
            MenuItem::Properties => "properties",
            MenuItem::Compounds => "compounds",
            MenuItem::Developers => "developers",
            MenuItem::Bookings => "bookings",
            MenuItem::Settings => "settings",
        }
    }
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-(role, company) access policy.
///
/// Invariant: at most one non-deleted policy exists per (role, companyId)
/// pair — creation rejects duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPolicy {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Role name this policy applies to. Free-form — matched against the
    /// claim set's role string.
    pub role: String,

    /// Company the policy belongs to.
    pub company_id: String,

    /// Menu items members of the role may access.
    pub menu_items: Vec<MenuItem>,

    /// Soft delete flag.
    #[serde(default)]
    pub is_deleted: bool,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for creating or updating a policy. The company is never part of
/// the payload — it comes from the authenticated claims.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPolicy {
    pub role: String,
    pub menu_items: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_wire_format() {
        assert_eq!(serde_json::to_string(&MenuItem::Properties).unwrap(), "\"properties\"");
        let items: Vec<MenuItem> =
            serde_json::from_str("[\"dashboard\", \"users\", \"properties\"]").unwrap();
        assert_eq!(items, vec![MenuItem::Dashboard, MenuItem::Users, MenuItem::Properties]);
    }

    #[test]
    fn test_unknown_menu_item_rejected() {
        assert!(serde_json::from_str::<MenuItem>("\"payroll\"").is_err());
    }
}
