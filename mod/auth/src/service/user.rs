use argon2::Argon2;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use amlak_core::{ListResult, PageParams, new_id, now_rfc3339};
use amlak_sql::{Filter, Value};

use crate::model::{CreateUser, User};
use crate::service::{AuthError, AuthService};

impl AuthService {
    /// Create a new user. Admin-gated at the route level.
    ///
    /// The username must be unused among non-deleted users; the password
    /// is hashed before anything is written.
    pub fn create_user(&self, input: CreateUser) -> Result<User, AuthError> {
        if input.username.is_empty() {
            return Err(AuthError::Validation("username cannot be empty".into()));
        }
        if input.password.is_empty() {
            return Err(AuthError::Validation("password cannot be empty".into()));
        }

        let existing: Option<User> = self.find_one(
            "users",
            &Filter::live().eq("username", Value::Text(input.username.clone())),
        )?;
        if existing.is_some() {
            return Err(AuthError::Conflict(format!(
                "username '{}' already exists",
                input.username
            )));
        }

        let password_hash = hash_password(&input.password)?;
        let now = now_rfc3339();
        let user = User {
            id: new_id(),
            name: input.name,
            username: input.username,
            password_hash,
            role: input.role,
            company_id: input.company_id,
            is_deleted: false,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        let mut indexes: Vec<(&str, Value)> = vec![
            ("name", Value::Text(user.name.clone())),
            ("username", Value::Text(user.username.clone())),
            ("password_hash", Value::Text(user.password_hash.clone())),
            ("role", Value::Text(user.role.as_str().to_string())),
            ("is_deleted", Value::Integer(0)),
            ("created_at", Value::Text(now.clone())),
            ("updated_at", Value::Text(now)),
        ];
        if let Some(ref company) = user.company_id {
            indexes.push(("company_id", Value::Text(company.clone())));
        }

        self.insert_doc("users", &user.id, &user, &indexes)?;
        Ok(user)
    }

    /// Verify a username/password pair against the stored credential.
    ///
    /// Every failure mode (unknown username, soft-deleted user, wrong
    /// password) collapses into `InvalidCredentials`. Read-only; there
    /// is no attempt counter and no lockout.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<User, AuthError> {
        // The hash is skipped by serde, so it is read back from its
        // indexed column rather than the JSON document.
        let rows = self
            .sql
            .query(
                "SELECT data, password_hash FROM users
                 WHERE username = ?1 AND is_deleted = 0 LIMIT 1",
                &[Value::Text(username.to_string())],
            )
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let Some(row) = rows.first() else {
            tracing::debug!(username, "login attempt for unknown username");
            return Err(AuthError::InvalidCredentials);
        };
        let data = row
            .get_str("data")
            .ok_or_else(|| AuthError::Internal("missing data column".into()))?;
        let mut user: User =
            serde_json::from_str(data).map_err(|e| AuthError::Internal(e.to_string()))?;
        user.password_hash = row
            .get_str("password_hash")
            .ok_or_else(|| AuthError::Internal("missing password_hash column".into()))?
            .to_string();

        verify_password(password, &user.password_hash)?;
        Ok(user)
    }

    /// Ensure a bootstrap admin exists. Called once at startup with the
    /// configured username and pre-computed hash; a no-op when a live
    /// user already holds the username.
    pub fn ensure_admin(
        &self,
        username: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<Option<User>, AuthError> {
        let existing: Option<User> = self.find_one(
            "users",
            &Filter::live().eq("username", Value::Text(username.to_string())),
        )?;
        if existing.is_some() {
            return Ok(None);
        }

        let now = now_rfc3339();
        let user = User {
            id: new_id(),
            name: name.to_string(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role: crate::model::Role::Admin,
            company_id: None,
            is_deleted: false,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        self.insert_doc(
            "users",
            &user.id,
            &user,
            &[
                ("name", Value::Text(user.name.clone())),
                ("username", Value::Text(user.username.clone())),
                ("password_hash", Value::Text(user.password_hash.clone())),
                ("role", Value::Text(user.role.as_str().to_string())),
                ("is_deleted", Value::Integer(0)),
                ("created_at", Value::Text(now.clone())),
                ("updated_at", Value::Text(now)),
            ],
        )?;

        Ok(Some(user))
    }

    /// Get a non-deleted user by id.
    pub fn get_user(&self, id: &str) -> Result<User, AuthError> {
        self.find_one("users", &Filter::live().eq("id", Value::Text(id.to_string())))?
            .ok_or_else(|| AuthError::NotFound(format!("user '{}' not found", id)))
    }

    /// List non-deleted users with pagination.
    pub fn list_users(&self, params: &PageParams) -> Result<ListResult<User>, AuthError> {
        let limit = params.limit_or(10);
        let (items, total) = self.find_many("users", &Filter::live(), limit, params.offset(limit))?;
        Ok(ListResult { items, total })
    }
}

/// Hash a password with argon2id and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::Internal(format!("password hash failed: {}", e)))
}

/// Verify a password against a stored argon2 hash (constant-time inside
/// the verifier).
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
