pub mod policy;
pub mod schema;
pub mod token;
pub mod user;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use amlak_core::ServiceError;
use amlak_sql::{Filter, SQLStore, Value};

/// Auth service error type.
///
/// Mirrors the wire taxonomy: every variant converts 1:1 into a
/// [`ServiceError`] with its own stable code.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing authorization token")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("no policy found for role '{0}'")]
    NoPolicyForRole(String),

    #[error("access denied: no access to '{0}'")]
    MenuItemNotPermitted(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("storage: {0}")]
    Storage(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl From<AuthError> for ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::NotFound(m) => ServiceError::NotFound(m),
            AuthError::Conflict(m) => ServiceError::Conflict(m),
            AuthError::Validation(m) => ServiceError::Validation(m),
            AuthError::InvalidCredentials => {
                ServiceError::InvalidCredentials("Invalid credentials".into())
            }
            AuthError::MissingToken => {
                ServiceError::MissingToken("missing authorization token".into())
            }
            AuthError::InvalidToken(m) => ServiceError::InvalidToken(format!("invalid token: {}", m)),
            AuthError::NoPolicyForRole(role) => ServiceError::NoPolicyForRole(format!(
                "Access denied: No policy found for role '{}'",
                role
            )),
            AuthError::MenuItemNotPermitted(item) => ServiceError::MenuItemNotPermitted(format!(
                "Access denied: You don't have access to {}",
                item
            )),
            AuthError::Forbidden(m) => ServiceError::PermissionDenied(m),
            AuthError::Storage(m) => ServiceError::Storage(m),
            AuthError::Internal(m) => ServiceError::Internal(m),
        }
    }
}

/// Configuration for the auth service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing secret. Process-wide, set once at startup.
    pub jwt_secret: String,
    /// Access token lifetime in seconds (default: 1 day).
    pub token_ttl_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "amlak-dev-secret-change-me".to_string(),
            token_ttl_secs: 86400, // 1 day
        }
    }
}

/// The Auth service. Holds the document store and configuration.
pub struct AuthService {
    pub(crate) sql: Arc<dyn SQLStore>,
    pub(crate) config: AuthConfig,
}

impl AuthService {
    /// Create a new AuthService, initializing the DB schema.
    pub fn new(sql: Arc<dyn SQLStore>, config: AuthConfig) -> Result<Arc<Self>, AuthError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Arc::new(Self { sql, config }))
    }

    // ── Generic document helpers ──
    //
    // Records are JSON documents in a `data` column, with filterable
    // fields mirrored into indexed columns. Filters only ever touch the
    // indexed columns.

    /// Insert a record as JSON into a table with indexed columns.
    pub(crate) fn insert_doc<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), AuthError> {
        let json = serde_json::to_string(record).map_err(|e| AuthError::Internal(e.to_string()))?;

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
                AuthError::Conflict(msg)
            } else {
                AuthError::Storage(msg)
            }
        })?;

        Ok(())
    }

    /// Find the first record matching a filter, or None.
    pub(crate) fn find_one<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &Filter,
    ) -> Result<Option<T>, AuthError> {
        let (where_sql, params) = filter.to_where_clause(1);
        let sql = format!("SELECT data FROM {}{} LIMIT 1", table, where_sql);
        let rows = self
            .sql
            .query(&sql, &params)
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        match rows.first().and_then(|r| r.get_str("data")) {
            Some(data) => serde_json::from_str(data)
                .map(Some)
                .map_err(|e| AuthError::Internal(e.to_string())),
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
    ) -> Result<(Vec<T>, usize), AuthError> {
        let (where_sql, mut params) = filter.to_where_clause(1);

        let count_sql = format!("SELECT COUNT(*) AS cnt FROM {}{}", table, where_sql);
        let count_rows = self
            .sql
            .query(&count_sql, &params)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
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
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            let data = row
                .get_str("data")
                .ok_or_else(|| AuthError::Internal("missing data column".into()))?;
            items.push(serde_json::from_str(data).map_err(|e| AuthError::Internal(e.to_string()))?);
        }

        Ok((items, total))
    }

    /// Rewrite a record's JSON data and indexed columns by id.
    pub(crate) fn update_doc<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), AuthError> {
        let json = serde_json::to_string(record).map_err(|e| AuthError::Internal(e.to_string()))?;

        let mut sets = vec!["data = ?1".to_string()];
        let mut params: Vec<Value> = vec![Value::Text(json)];

        for (i, (col, val)) in indexes.iter().enumerate() {
            sets.push(format!("{} = ?{}", col, i + 2));
            params.push(val.clone());
        }

        let id_idx = params.len() + 1;
        params.push(Value::Text(id.to_string()));

        let sql = format!("UPDATE {} SET {} WHERE id = ?{}", table, sets.join(", "), id_idx);
        let affected = self
            .sql
            .exec(&sql, &params)
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(AuthError::NotFound(format!("{}/{}", table, id)));
        }

        Ok(())
    }
}
