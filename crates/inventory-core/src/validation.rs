//! # Validation Module
//!
//! Parsing of raw console input into typed, constrained values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompter (inventory-cli)                                      │
//! │  ├── Reads one line, hands it to THIS MODULE                            │
//! │  └── On Err: shows the message and asks again (forever)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (pure functions)                                  │
//! │  ├── Trim + lowercase text                                              │
//! │  └── Non-empty, non-negative integer, non-negative real                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  └── NOT NULL constraints                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventory_core::validation::{parse_non_negative_integer, parse_text};
//!
//! assert_eq!(parse_text("name", "  Widget ", false).unwrap(), "widget");
//! assert_eq!(parse_non_negative_integer("quantity", "42").unwrap(), 42);
//! assert!(parse_non_negative_integer("quantity", "-1").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Text
// =============================================================================

/// Trims surrounding whitespace and lowercases the text.
///
/// Every stored text field goes through this, so searches and listings never
/// depend on how the operator happened to type a value.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalizes text input, rejecting empty values unless `optional` is set.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::parse_text;
///
/// assert_eq!(parse_text("name", "Widget\n", false).unwrap(), "widget");
/// assert!(parse_text("name", "   ", false).is_err());
/// assert_eq!(parse_text("description", "   ", true).unwrap(), "");
/// ```
pub fn parse_text(field: &str, raw: &str, optional: bool) -> ValidationResult<String> {
    let text = normalize_text(raw);

    if text.is_empty() && !optional {
        return Err(ValidationError::required(field));
    }

    Ok(text)
}

// =============================================================================
// Numbers
// =============================================================================

/// Parses a non-negative whole number.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Every remaining character must be an ASCII digit
/// - No sign, no decimal point, no exponent
/// - Must fit in an `i64` (the SQLite INTEGER range)
pub fn parse_non_negative_integer(field: &str, raw: &str) -> ValidationResult<i64> {
    let digits = raw.trim();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid_integer(field));
    }

    digits
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_integer(field))
}

/// Parses a non-negative decimal number.
///
/// ## Rules
/// ```text
/// "9.99"   → Ok(9.99)
/// "3"      → Ok(3.0)
/// "1e2"    → Ok(100.0)
/// "-0"     → Ok(0.0)
/// "-1.5"   → Err(Negative)
/// "abc"    → Err(InvalidDecimal)
/// "inf"    → Err(InvalidDecimal)
/// ```
pub fn parse_non_negative_real(field: &str, raw: &str) -> ValidationResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::invalid_decimal(field))?;

    if !value.is_finite() {
        return Err(ValidationError::invalid_decimal(field));
    }

    validate_non_negative_real(field, value)
}

/// Checks that an already-typed integer is not negative.
pub fn validate_non_negative_integer(field: &str, value: i64) -> ValidationResult<i64> {
    if value < 0 {
        return Err(ValidationError::negative(field));
    }

    Ok(value)
}

/// Checks that an already-typed real is finite and not negative.
///
/// Negative zero is folded into `0.0`.
pub fn validate_non_negative_real(field: &str, value: f64) -> ValidationResult<f64> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::invalid_decimal(field));
    }

    if value < 0.0 {
        return Err(ValidationError::negative(field));
    }

    Ok(if value == 0.0 { 0.0 } else { value })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Widget Pro \n"), "widget pro");
        assert_eq!(normalize_text("\t"), "");
        assert_eq!(normalize_text("ÑANDÚ"), "ñandú");
    }

    #[test]
    fn test_parse_text_required() {
        assert_eq!(parse_text("name", "Widget", false).unwrap(), "widget");
        assert_eq!(
            parse_text("name", "", false),
            Err(ValidationError::required("name"))
        );
        assert!(parse_text("name", " \t \n", false).is_err());
    }

    #[test]
    fn test_parse_text_optional() {
        assert_eq!(parse_text("category", "", true).unwrap(), "");
        assert_eq!(parse_text("category", "  ", true).unwrap(), "");
        assert_eq!(parse_text("category", " Tools ", true).unwrap(), "tools");
    }

    #[test]
    fn test_parse_non_negative_integer() {
        assert_eq!(parse_non_negative_integer("quantity", "0").unwrap(), 0);
        assert_eq!(parse_non_negative_integer("quantity", " 17\n").unwrap(), 17);
        assert_eq!(parse_non_negative_integer("quantity", "007").unwrap(), 7);

        for bad in ["", "  ", "-1", "+1", "2.5", "abc", "5x", "1 000", "99999999999999999999"] {
            assert_eq!(
                parse_non_negative_integer("quantity", bad),
                Err(ValidationError::invalid_integer("quantity")),
                "input {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_non_negative_real() {
        assert_eq!(parse_non_negative_real("price", "9.99").unwrap(), 9.99);
        assert_eq!(parse_non_negative_real("price", " 3 ").unwrap(), 3.0);
        assert_eq!(parse_non_negative_real("price", "0").unwrap(), 0.0);
        assert_eq!(parse_non_negative_real("price", "1e2").unwrap(), 100.0);

        let zero = parse_non_negative_real("price", "-0").unwrap();
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn test_parse_non_negative_real_rejections() {
        assert_eq!(
            parse_non_negative_real("price", "-1.5"),
            Err(ValidationError::negative("price"))
        );

        for bad in ["", "abc", "1,5", "inf", "NaN", "--1"] {
            assert_eq!(
                parse_non_negative_real("price", bad),
                Err(ValidationError::invalid_decimal("price")),
                "input {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_typed_values() {
        assert_eq!(validate_non_negative_integer("quantity", 0).unwrap(), 0);
        assert!(validate_non_negative_integer("quantity", -1).is_err());
        assert!(validate_non_negative_real("price", f64::NAN).is_err());
        assert!(validate_non_negative_real("price", -0.01).is_err());
    }
}
