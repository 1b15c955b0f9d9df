// errors.rs
use std::fmt;

/// Errors originating from either the catalog logic
/// (lookups, bad input, etc.) or downstream layers (DB).
#[derive(Debug)]
pub enum CatalogError {
    NotFound,
    BadRequest(String),
    DbError(String),
    InternalError,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound => write!(f, "Not Found"),
            CatalogError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            CatalogError::DbError(msg) => write!(f, "Database Error: {msg}"),
            CatalogError::InternalError => write!(f, "Internal Error"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<rusqlite::Error> for CatalogError {
    fn from(err: rusqlite::Error) -> Self {
        CatalogError::DbError(err.to_string())
    }
}
