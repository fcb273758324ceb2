//! Per-route authorization: the static role guard and the menu-item
//! policy guard.
//!
//! Routes declare a [`RouteGuard`] value — no reflection, just ordered
//! middleware with declarative config. The token middleware has already
//! decoded [`Claims`] into request extensions by the time a guard runs;
//! the guard checks the static role first, then the policy.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use amlak_core::ServiceError;

use crate::model::{Claims, MenuItem, Role};
use crate::service::{AuthError, AuthService};

/// Declarative per-route authorization requirements.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard {
    /// Exact role required, if any. No hierarchy: admin does not imply user.
    pub required_role: Option<Role>,
    /// Menu item the caller's (role, company) policy must grant, if any.
    pub required_menu_item: Option<MenuItem>,
}

impl RouteGuard {
    /// Require an exact role.
    pub fn role(role: Role) -> Self {
        Self {
            required_role: Some(role),
            ..Self::default()
        }
    }

    /// Require a menu item from the caller's policy.
    pub fn menu_item(item: MenuItem) -> Self {
        Self {
            required_menu_item: Some(item),
            ..Self::default()
        }
    }

    /// Require both an exact role and a menu item.
    pub fn role_and_menu_item(role: Role, item: MenuItem) -> Self {
        Self {
            required_role: Some(role),
            required_menu_item: Some(item),
        }
    }
}

/// The static role authorizer. Pure: the claim role must equal the
/// required role exactly.
pub fn authorize_role(claims: &Claims, required: Role) -> Result<(), AuthError> {
    if claims.role == required {
        Ok(())
    } else {
        Err(AuthError::Forbidden(format!(
            "role '{}' required",
            required
        )))
    }
}

/// Evaluate a guard against the claim set: role check, then policy check.
/// Both checks are skipped when the guard does not declare them.
pub fn check_guard(
    svc: &AuthService,
    guard: &RouteGuard,
    claims: &Claims,
) -> Result<(), AuthError> {
    if let Some(required) = guard.required_role {
        authorize_role(claims, required)?;
    }
    if let Some(item) = guard.required_menu_item {
        svc.check_menu_access(claims, item)?;
    }
    Ok(())
}

/// Axum middleware wrapping [`check_guard`]. Attach per route with
/// `middleware::from_fn_with_state((svc, guard), guard_middleware)`.
pub async fn guard_middleware(
    State((svc, guard)): State<(Arc<AuthService>, RouteGuard)>,
    request: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| ServiceError::from(AuthError::MissingToken))?;

    check_guard(&svc, &guard, claims).map_err(ServiceError::from)?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CreateUserPolicy;
    use crate::service::AuthConfig;
    use amlak_sql::SqliteStore;

    fn test_service() -> Arc<AuthService> {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        AuthService::new(sql, AuthConfig::default()).unwrap()
    }

    fn claims(role: Role, company_id: Option<&str>) -> Claims {
        Claims {
            sub: "u1".to_string(),
            name: "Test".to_string(),
            username: "test".to_string(),
            role,
            company_id: company_id.map(String::from),
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[test]
    fn test_role_exact_match() {
        assert!(authorize_role(&claims(Role::Admin, None), Role::Admin).is_ok());

        let err = authorize_role(&claims(Role::User, None), Role::Admin).unwrap_err();
        assert!(matches!(err, AuthError::Forbidden(_)));

        // No hierarchy: admin does not satisfy a 'user' requirement.
        let err = authorize_role(&claims(Role::Admin, None), Role::User).unwrap_err();
        assert!(matches!(err, AuthError::Forbidden(_)));
    }

    #[test]
    fn test_empty_guard_allows_unconditionally() {
        let svc = test_service();
        assert!(check_guard(&svc, &RouteGuard::default(), &claims(Role::User, None)).is_ok());
    }

    #[test]
    fn test_guard_composes_role_then_policy() {
        let svc = test_service();
        svc.create_policy(
            "comp-1",
            CreateUserPolicy {
                role: "admin".to_string(),
                menu_items: vec![MenuItem::Users],
            },
        )
        .unwrap();

        let guard = RouteGuard::role_and_menu_item(Role::Admin, MenuItem::Users);
        assert!(check_guard(&svc, &guard, &claims(Role::Admin, Some("comp-1"))).is_ok());

        // Role check fires first: a non-admin fails with Forbidden even
        // though no policy exists for their role either.
        let err = check_guard(&svc, &guard, &claims(Role::User, Some("comp-1"))).unwrap_err();
        assert!(matches!(err, AuthError::Forbidden(_)));

        // Right role, policy lacking the item.
        let guard = RouteGuard::role_and_menu_item(Role::Admin, MenuItem::Settings);
        let err = check_guard(&svc, &guard, &claims(Role::Admin, Some("comp-1"))).unwrap_err();
        assert!(matches!(err, AuthError::MenuItemNotPermitted(_)));
    }

    #[test]
    fn test_menu_guard_without_policy() {
        let svc = test_service();
        let guard = RouteGuard::menu_item(MenuItem::Properties);
        let err = check_guard(&svc, &guard, &claims(Role::User, Some("comp-9"))).unwrap_err();
        assert!(matches!(err, AuthError::NoPolicyForRole(_)));
    }
}
