//! # Domain Types
//!
//! The product model used throughout the inventory manager.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                 │
//! │  │      Product        │        │   ProductFields     │                 │
//! │  │  ─────────────────  │        │  ─────────────────  │                 │
//! │  │  id (store-assigned)│        │  name  (required)   │                 │
//! │  │  name               │ ◄───── │  description        │                 │
//! │  │  description        │ insert │  quantity  (>= 0)   │                 │
//! │  │  quantity           │ update │  price     (>= 0)   │                 │
//! │  │  price              │        │  category           │                 │
//! │  │  category           │        │                     │                 │
//! │  └─────────────────────┘        └─────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Product` is what the store hands back. `ProductFields` is what the
//! operator hands in: it can only be built through [`ProductFields::new`], so
//! a value of this type always satisfies the product invariants.

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::validation::{
    normalize_text, parse_text, validate_non_negative_integer, validate_non_negative_real,
};

// =============================================================================
// Product
// =============================================================================

/// A persisted inventory line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Surrogate key assigned by the store on insert.
    pub id: i64,

    /// Lowercased, trimmed, never empty.
    pub name: String,

    /// Lowercased, trimmed, may be empty.
    pub description: String,

    /// Units in stock.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,

    /// Lowercased, trimmed, may be empty.
    pub category: String,
}

#[cfg(test)]
impl Product {
    /// Returns the non-id fields of this product.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
            price: self.price,
            category: self.category.clone(),
        }
    }
}

// =============================================================================
// Product Fields
// =============================================================================

/// The validated, non-id fields of a product.
///
/// Used for both insert and update: an update replaces all five columns at
/// once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFields {
    name: String,
    description: String,
    quantity: i64,
    price: f64,
    category: String,
}

impl ProductFields {
    /// Normalizes and validates the five product fields.
    ///
    /// ## Rules
    /// - `name`: trimmed, lowercased, must not be empty
    /// - `description`, `category`: trimmed, lowercased, may be empty
    /// - `quantity`: must be >= 0
    /// - `price`: must be finite and >= 0
    pub fn new(
        name: &str,
        description: &str,
        quantity: i64,
        price: f64,
        category: &str,
    ) -> ValidationResult<Self> {
        Ok(ProductFields {
            name: parse_text("name", name, false)?,
            description: normalize_text(description),
            quantity: validate_non_negative_integer("quantity", quantity)?,
            price: validate_non_negative_real("price", price)?,
            category: normalize_text(category),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Combines these fields with a store-assigned id.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            price: self.price,
            category: self.category,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_product_fields_normalize() {
        let fields = ProductFields::new(" Widget ", " Blue ONE ", 5, 9.99, " Tools").unwrap();

        assert_eq!(fields.name(), "widget");
        assert_eq!(fields.description(), "blue one");
        assert_eq!(fields.quantity(), 5);
        assert_eq!(fields.price(), 9.99);
        assert_eq!(fields.category(), "tools");
    }

    #[test]
    fn test_product_fields_reject_invalid() {
        assert_eq!(
            ProductFields::new("  ", "", 1, 1.0, ""),
            Err(ValidationError::required("name"))
        );
        assert_eq!(
            ProductFields::new("widget", "", -1, 1.0, ""),
            Err(ValidationError::negative("quantity"))
        );
        assert_eq!(
            ProductFields::new("widget", "", 1, -0.5, ""),
            Err(ValidationError::negative("price"))
        );
        assert!(ProductFields::new("widget", "", 1, f64::INFINITY, "").is_err());
    }

    #[test]
    fn test_product_fields_round_trip() {
        let fields = ProductFields::new("widget", "", 5, 9.99, "tools").unwrap();
        let product = fields.clone().into_product(7);

        assert_eq!(product.id, 7);
        assert_eq!(product.fields(), fields);
    }

    #[test]
    fn test_product_serializes_with_plain_field_names() {
        let product = ProductFields::new("widget", "", 5, 9.99, "tools")
            .unwrap()
            .into_product(1);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["name"], "widget");
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["category"], "tools");
    }
}
