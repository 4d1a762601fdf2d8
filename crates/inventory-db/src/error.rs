//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds categorization                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session (inventory-cli) ← Prints "Error ...: {err}", back to menu      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing product is NOT an error in this crate: lookups return
//! `Ok(None)` / `Ok(false)` and writes return `Ok(0)` rows affected.

use thiserror::Error;

/// Database operation errors.
///
/// These wrap sqlx errors and keep the underlying description so it can be
/// shown to the operator.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created (missing directory, permissions)
    /// - File exists but is not a SQLite database
    /// - Database is locked past the busy timeout
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema initialization failed.
    ///
    /// ## When This Occurs
    /// - A table named `productos` exists but is not a table
    /// - Disk full or read-only file during CREATE TABLE
    #[error("Schema initialization failed: {0}")]
    SchemaFailed(String),

    /// A constraint rejected the statement.
    ///
    /// ## When This Occurs
    /// - NOT NULL column written as NULL
    /// - Any CHECK / UNIQUE violation added to the table externally
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - Table dropped underneath the application
    /// - Runtime SQL error
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database  → "constraint failed" in message → ConstraintViolation
///                        → anything else                  → QueryFailed
/// sqlx::Error::Io        → ConnectionFailed
/// sqlx::Error::Configuration → ConnectionFailed
/// Other                  → Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages look like:
                // "NOT NULL constraint failed: productos.nombre"
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation(msg.to_string())
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            sqlx::Error::Configuration(cfg_err) => DbError::ConnectionFailed(cfg_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::QueryFailed("no such table: productos".to_string());
        assert_eq!(err.to_string(), "Query failed: no such table: productos");

        let err = DbError::ConstraintViolation("NOT NULL constraint failed: productos.nombre".into());
        assert!(err.to_string().starts_with("Constraint violation"));
    }

    #[test]
    fn test_row_not_found_maps_to_internal() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Internal(_)));
    }
}
