use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::model::{Claims, LoginResponse, User};
use crate::service::{AuthError, AuthService};

impl AuthService {
    /// Issue a signed JWT for a verified user.
    ///
    /// Claims carry the session claim set {sub, name, username, role,
    /// companyId?}; expiry is the configured TTL from now.
    pub fn issue_token(&self, user: &User) -> Result<LoginResponse, AuthError> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::seconds(self.config.token_ttl_secs);

        let claims = Claims {
            sub: user.id.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            role: user.role,
            company_id: user.company_id.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("JWT encode failed: {}", e)))?;

        Ok(LoginResponse {
            access_token: token,
            name: user.name.clone(),
            username: user.username.clone(),
            role: user.role,
        })
    }

    /// Verify and decode a bearer token into the session claim set.
    ///
    /// Signature and expiry failures both collapse into `InvalidToken` —
    /// the caller only learns that the token did not verify.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{CreateUser, Role};
    use crate::service::{AuthConfig, AuthError, AuthService};
    use amlak_sql::SqliteStore;
    use std::sync::Arc;

    fn test_service() -> Arc<AuthService> {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        AuthService::new(sql, AuthConfig::default()).unwrap()
    }

    fn seeded_user(svc: &AuthService) -> crate::model::User {
        svc.create_user(CreateUser {
            name: "Ahmed Ayman".to_string(),
            username: "a.ayman".to_string(),
            password: "s3cret".to_string(),
            role: Role::Admin,
            company_id: Some("comp-1".to_string()),
        })
        .unwrap()
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let svc = test_service();
        let user = seeded_user(&svc);

        let resp = svc.issue_token(&user).unwrap();
        assert!(!resp.access_token.is_empty());
        assert_eq!(resp.role, Role::Admin);
        assert_eq!(resp.username, "a.ayman");

        let claims = svc.verify_token(&resp.access_token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.name, "Ahmed Ayman");
        assert_eq!(claims.username, "a.ayman");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.company_id, Some("comp-1".to_string()));
        assert_eq!(claims.exp - claims.iat, 86400);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = test_service();
        let err = svc.verify_token("this.is.not.a.valid.jwt").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let svc = test_service();
        let user = seeded_user(&svc);
        let token = svc.issue_token(&user).unwrap().access_token;

        let other = AuthService::new(
            Arc::new(SqliteStore::open_in_memory().unwrap()),
            AuthConfig {
                jwt_secret: "a-different-secret".to_string(),
                ..AuthConfig::default()
            },
        )
        .unwrap();

        assert!(matches!(other.verify_token(&token), Err(AuthError::InvalidToken(_))));
    }
}
