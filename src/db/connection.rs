use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;

use crate::errors::CatalogError;

// Thread-local connection slot.
thread_local! {
    static DB_CONN: RefCell<Option<Connection>> = RefCell::new(None);
}

#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Provides a mutable connection to the closure, opening it lazily on
    /// first use for the current thread.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, CatalogError>
    where
        F: FnOnce(&mut Connection) -> Result<T, CatalogError>,
    {
        let inner_result = DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                if slot.is_none() {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| CatalogError::DbError(format!("Open DB failed: {e}")))?;
                    *slot = Some(conn);
                }
                let conn = slot.as_mut().unwrap();
                f(conn)
            })
            .map_err(|_| CatalogError::InternalError)?;
        inner_result
    }
}

/// Initialize the database from a SQL schema file.
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), CatalogError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| CatalogError::DbError(format!("Failed to read schema file: {e}")))?;

    init_db_from_sql(db, &schema_sql)?;

    println!("✅ Database initialized successfully from {}", schema_path);
    Ok(())
}

/// Initialize the database from schema SQL already in memory.
/// Used by tests running against in-memory databases.
pub fn init_db_from_sql(db: &Database, schema_sql: &str) -> Result<(), CatalogError> {
    db.with_conn(|conn| {
        conn.execute_batch(schema_sql)
            .map_err(|e| CatalogError::DbError(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })
}
