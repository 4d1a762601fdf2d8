//! # Repository Module
//!
//! Database repository implementations for the inventory manager.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Menu action                                                            │
//! │       │                                                                 │
//! │       │  db.products().update_by_id(3, &fields)                         │
//! │       ▼                                                                 │
//! │  ProductRepository                                                      │
//! │  ├── has_any_records / id_exists / count                                │
//! │  ├── insert / update_by_id / delete_by_id                               │
//! │  └── list_all / find_by_id / find_by_name_substring /                   │
//! │      filter_by_max_quantity                                             │
//! │       │                                                                 │
//! │       │  one scoped connection, one SQL statement                       │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  SQL lives here and nowhere else.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD, search and reports

pub mod product;
