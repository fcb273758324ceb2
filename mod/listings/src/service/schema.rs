use amlak_sql::SQLStore;

use amlak_core::ServiceError;

/// Initialize the SQLite schema for the listings resources.
///
/// Every filterable field has its own indexed column next to the JSON
/// `data` document; the property columns cover exactly what the search
/// filter can touch.
pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS developers (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            reference_number INTEGER NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_developers_name ON developers(name)",
        "CREATE INDEX IF NOT EXISTS idx_developers_reference ON developers(reference_number)",

        "CREATE TABLE IF NOT EXISTS compounds (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            reference_number INTEGER NOT NULL,
            developer_id TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_compounds_developer ON compounds(developer_id)",
        "CREATE INDEX IF NOT EXISTS idx_compounds_reference ON compounds(reference_number)",

        "CREATE TABLE IF NOT EXISTS properties (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            reference_number INTEGER NOT NULL,
            type TEXT NOT NULL,
            beds INTEGER NOT NULL,
            baths INTEGER NOT NULL,
            price REAL NOT NULL,
            compound_id TEXT NOT NULL,
            developer_id TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_properties_name ON properties(name)",
        "CREATE INDEX IF NOT EXISTS idx_properties_reference ON properties(reference_number)",
        "CREATE INDEX IF NOT EXISTS idx_properties_developer ON properties(developer_id)",
        "CREATE INDEX IF NOT EXISTS idx_properties_price ON properties(price)",

        "CREATE TABLE IF NOT EXISTS bookings (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            property_id TEXT NOT NULL,
            booking_status TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            data TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_bookings_property ON bookings(property_id)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_user ON bookings(user_id)",
    ];

    for stmt in &statements {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
    }

    Ok(())
}
