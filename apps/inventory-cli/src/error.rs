//! # CLI Error Type
//!
//! Errors that stop the console application.
//!
//! ## What Is (and Isn't) Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Bad operator input   → ValidationError → re-prompt      (not here)     │
//! │  Store failure in a   → DbError         → message, menu  (not here)     │
//! │  menu action                                                            │
//! │                                                                         │
//! │  Console read/write   → CliError::Io       → app stops                  │
//! │  Store fails at start → CliError::Database → app stops, exit code 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use inventory_db::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The database could not be opened or initialized.
    #[error("Database unavailable: {0}")]
    Database(#[from] DbError),
}

impl CliError {
    /// True when the operator closed standard input (Ctrl-D, end of a pipe).
    pub fn is_input_closed(&self) -> bool {
        matches!(self, CliError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_closed_detection() {
        let closed: CliError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(closed.is_input_closed());

        let broken: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(!broken.is_input_closed());
    }

    #[test]
    fn test_database_error_message() {
        let err: CliError = DbError::SchemaFailed("disk I/O error".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Database unavailable: Schema initialization failed: disk I/O error"
        );
    }
}
