//! # Error Types
//!
//! Input validation errors for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core (this file)                                             │
//! │  └── ValidationError  - Input validation failures (re-prompted)         │
//! │                                                                         │
//! │  inventory-db (separate crate)                                          │
//! │  └── DbError          - Store failures (reported, never fatal)          │
//! │                                                                         │
//! │  inventory-cli (app)                                                    │
//! │  └── CliError         - Console I/O and startup failures                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `ValidationError` never reaches the database: the prompter shows its
//! message and asks again.

use thiserror::Error;

/// Input validation errors.
///
/// Each variant carries the name of the field that was rejected so the
/// message reads naturally when shown next to the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or only whitespace.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Input is not a plain non-negative whole number.
    ///
    /// ## When This Occurs
    /// - Letters or symbols: `"abc"`, `"5x"`
    /// - Sign or decimal point: `"-3"`, `"+3"`, `"2.5"`
    /// - Empty input
    /// - Digits that overflow a 64-bit integer
    #[error("{field} must be a non-negative whole number")]
    InvalidInteger { field: String },

    /// Input cannot be read as a finite decimal number.
    #[error("{field} must be a valid decimal number")]
    InvalidDecimal { field: String },

    /// Numeric value is below zero.
    #[error("{field} must be positive")]
    Negative { field: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn invalid_integer(field: impl Into<String>) -> Self {
        ValidationError::InvalidInteger {
            field: field.into(),
        }
    }

    pub fn invalid_decimal(field: impl Into<String>) -> Self {
        ValidationError::InvalidDecimal {
            field: field.into(),
        }
    }

    pub fn negative(field: impl Into<String>) -> Self {
        ValidationError::Negative {
            field: field.into(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::required("name").to_string(),
            "name cannot be empty"
        );
        assert_eq!(
            ValidationError::invalid_integer("quantity").to_string(),
            "quantity must be a non-negative whole number"
        );
        assert_eq!(
            ValidationError::invalid_decimal("price").to_string(),
            "price must be a valid decimal number"
        );
        assert_eq!(
            ValidationError::negative("price").to_string(),
            "price must be positive"
        );
    }
}
