use crate::db::connection::{init_db_from_sql, Database};

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Initialize a fresh in-memory test DB using the production schema.
/// Connections are thread-local and each test runs on its own thread, so
/// tests never see each other's rows.
pub fn init_test_db() -> Database {
    let db = Database::new(":memory:");

    init_db_from_sql(&db, SCHEMA_SQL)
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}
