//! # inventory-core: Pure Domain Logic for the Inventory Manager
//!
//! This crate holds the product model and every rule that decides whether a
//! piece of user input is acceptable. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Manager Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                 inventory-cli (console app)                     │    │
//! │  │    Menu ──► Prompter ──► Session dispatch ──► Renderers         │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │             ★ inventory-core (THIS CRATE) ★                     │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐       │    │
//! │  │   │    types      │  │  validation   │  │    error      │       │    │
//! │  │   │   Product     │  │  parse_text   │  │ Validation-   │       │    │
//! │  │   │ ProductFields │  │  parse_*      │  │   Error       │       │    │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘       │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS            │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                 inventory-db (Database Layer)                   │    │
//! │  │            SQLite queries, schema, product repository           │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (`Product`, `ProductFields`)
//! - [`validation`] - Raw input parsing and normalization
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::ProductFields;
//!
//! let fields = ProductFields::new("  Widget ", "", 5, 9.99, "TOOLS").unwrap();
//! assert_eq!(fields.name(), "widget");
//! assert_eq!(fields.category(), "tools");
//!
//! assert!(ProductFields::new("   ", "", 5, 9.99, "").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// File name of the inventory database, relative to the working directory.
pub const DEFAULT_DATABASE_FILE: &str = "inventario.db";

/// Name of the single table holding products.
pub const PRODUCTS_TABLE: &str = "productos";
