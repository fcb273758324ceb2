use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use rusqlite::types::{ToSqlOutput, ValueRef};

use crate::error::SQLError;
use crate::traits::{Row, SQLStore, Value};

/// SqliteStore is a SQLStore implementation backed by rusqlite (bundled SQLite).
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a SQLite database at the given path.
    pub fn open(path: &Path) -> Result<Self, SQLError> {
        let conn = Connection::open(path)
            .map_err(|e| SQLError::Connection(e.to_string()))?;

        // WAL for concurrent reads; busy timeout instead of immediate
        // SQLITE_BUSY under writer contention.
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")
            .map_err(|e| SQLError::Connection(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite database (useful for tests).
    pub fn open_in_memory() -> Result<Self, SQLError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| SQLError::Connection(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl rusqlite::types::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(i) => ToSqlOutput::Owned((*i).into()),
            Value::Real(f) => ToSqlOutput::Owned((*f).into()),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

impl SQLStore for SqliteStore {
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let column_names: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rows = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), |row| {
                let mut columns = Vec::with_capacity(column_names.len());
                for (i, name) in column_names.iter().enumerate() {
                    columns.push((name.clone(), row_value_at(row, i)));
                }
                Ok(Row { columns })
            })
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row.map_err(|e| SQLError::Query(e.to_string()))?);
        }
        Ok(result)
    }

    fn exec(&self, sql: &str, params: &[Value]) -> Result<u64, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        let affected = conn
            .execute(sql, rusqlite::params_from_iter(params.iter()))
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        Ok(affected as u64)
    }
}

/// Extract a Value from a rusqlite row at a given column index.
fn row_value_at(row: &rusqlite::Row, idx: usize) -> Value {
    match row.get_ref(idx) {
        Ok(ValueRef::Integer(i)) => Value::Integer(i),
        Ok(ValueRef::Real(f)) => Value::Real(f),
        Ok(ValueRef::Text(t)) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        Ok(ValueRef::Blob(b)) => Value::Blob(b.to_vec()),
        Ok(ValueRef::Null) | Err(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Cond, Filter};

    fn store_with_table() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .exec(
                "CREATE TABLE listings (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    price REAL NOT NULL,
                    is_deleted INTEGER NOT NULL DEFAULT 0
                )",
                &[],
            )
            .unwrap();
        for (id, name, price, deleted) in [
            ("a", "Agora North Coast", 250000.0, 0),
            ("b", "Palm Hills October", 480000.0, 0),
            ("c", "Old Stock", 100000.0, 1),
        ] {
            store
                .exec(
                    "INSERT INTO listings (id, name, price, is_deleted) VALUES (?1, ?2, ?3, ?4)",
                    &[
                        Value::Text(id.into()),
                        Value::Text(name.into()),
                        Value::Real(price),
                        Value::Integer(deleted),
                    ],
                )
                .unwrap();
        }
        store
    }

    #[test]
    fn test_query_and_exec_roundtrip() {
        let store = store_with_table();
        let rows = store
            .query("SELECT id, price FROM listings WHERE id = ?1", &[Value::Text("a".into())])
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_str("id"), Some("a"));
        assert_eq!(rows[0].get_f64("price"), Some(250000.0));
    }

    #[test]
    fn test_filter_drives_query() {
        let store = store_with_table();
        let filter = Filter::live()
            .with("price", Cond::Gte(Value::Real(200000.0)))
            .with("name", Cond::Contains("north".into()));
        let (where_sql, params) = filter.to_where_clause(1);
        let rows = store
            .query(&format!("SELECT id FROM listings{}", where_sql), &params)
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_str("id"), Some("a"));
    }

    #[test]
    fn test_soft_deleted_rows_are_filtered() {
        let store = store_with_table();
        let (where_sql, params) = Filter::live().to_where_clause(1);
        let rows = store
            .query(&format!("SELECT id FROM listings{}", where_sql), &params)
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_exec_returns_affected_count() {
        let store = store_with_table();
        let affected = store
            .exec("UPDATE listings SET is_deleted = 1 WHERE is_deleted = 0", &[])
            .unwrap();
        assert_eq!(affected, 2);
    }

    #[test]
    fn test_null_column_reads_as_null() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.exec("CREATE TABLE t (id TEXT PRIMARY KEY, note TEXT)", &[]).unwrap();
        store
            .exec(
                "INSERT INTO t (id, note) VALUES (?1, ?2)",
                &[Value::Text("x".into()), Value::Null],
            )
            .unwrap();
        let rows = store.query("SELECT note FROM t", &[]).unwrap();
        assert_eq!(rows[0].get("note"), Some(&Value::Null));
    }
}
