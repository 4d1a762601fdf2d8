//! # inventory-db: Database Layer for the Inventory Manager
//!
//! This crate provides database access for the inventory manager.
//! It uses a single SQLite file with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory Manager Data Flow                        │
//! │                                                                         │
//! │  Menu action (e.g. "Search by name")                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                   inventory-db (THIS CRATE)                     │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐    │    │
//! │  │   │   Database    │    │  Repository   │    │    Schema    │    │    │
//! │  │   │ (database.rs) │    │ (product.rs)  │    │ (schema.rs)  │    │    │
//! │  │   │               │    │               │    │              │    │    │
//! │  │   │ connect()     │◄───│ ProductRepo   │    │ CREATE TABLE │    │    │
//! │  │   │ one handle    │    │ one statement │    │ IF NOT EXISTS│    │    │
//! │  │   │ per operation │    │ per call      │    │              │    │    │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘    │    │
//! │  │                                                                 │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                     SQLite Database                             │    │
//! │  │   ./inventario.db  (table: productos)                           │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`database`] - Connection configuration and scoped handles
//! - [`schema`] - Idempotent table creation
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventory_db::{Database, DbConfig};
//!
//! // Opens ./inventario.db and creates the table if needed
//! let db = Database::new(DbConfig::default()).await?;
//!
//! let matches = db.products().find_by_name_substring("wid").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod database;
pub mod error;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use database::{Database, DbConfig};
pub use error::{DbError, DbResult};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
