use amlak_sql::SQLStore;

use crate::service::AuthError;

/// Initialize the SQLite schema for the auth resources.
pub fn init_schema(sql: &dyn SQLStore) -> Result<(), AuthError> {
    let statements = [
        // Users: identity + credential. The password hash lives only in
        // its indexed column, never inside the JSON document.
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            username TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL,
            company_id TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_users_username ON users(username)",
        // Policies: one non-deleted row per (role, company_id) — enforced
        // at create time, not by a DB constraint, because soft-deleted
        // rows with the same pair may pile up.
        "CREATE TABLE IF NOT EXISTS user_policies (
            id TEXT PRIMARY KEY,
            role TEXT NOT NULL,
            company_id TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_user_policies_role_company
            ON user_policies(role, company_id)",
    ];

    for stmt in &statements {
        sql.exec(stmt, &[])
            .map_err(|e| AuthError::Storage(e.to_string()))?;
    }

    Ok(())
}
