//! # Seed Data Generator
//!
//! Populates a database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./inventario_dev.db (default)
//! cargo run -p inventory-db --bin seed
//!
//! # Specify database path
//! cargo run -p inventory-db --bin seed -- --db ./inventario.db
//! ```
//!
//! The catalog is embedded from `data/seed_catalog.json`. Every entry goes
//! through `ProductFields::new`, so seeded rows obey the same rules as rows
//! typed in at the console.

use serde::Deserialize;
use std::env;

use inventory_core::ProductFields;
use inventory_db::{Database, DbConfig};

const CATALOG: &str = include_str!("../../data/seed_catalog.json");

/// One product as written in the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    #[serde(default)]
    description: String,
    quantity: i64,
    price: f64,
    #[serde(default)]
    category: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./inventario_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./inventario_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let entries: Vec<CatalogEntry> = serde_json::from_str(CATALOG)?;

    println!("Inventory Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", entries.len());
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Schema ready");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let repo = db.products();
    let mut generated = 0;

    for entry in &entries {
        let fields = ProductFields::new(
            &entry.name,
            &entry.description,
            entry.quantity,
            entry.price,
            &entry.category,
        )?;

        match repo.insert(&fields).await {
            Ok(id) => {
                generated += 1;
                println!("  #{:<3} {}", id, fields.name());
            }
            Err(e) => eprintln!("Failed to insert {}: {}", entry.name, e),
        }
    }

    println!();
    println!("✓ Inserted {} products", generated);

    let low_stock = repo.filter_by_max_quantity(5).await?;
    println!("  Quantity <= 5: {} products", low_stock.len());

    Ok(())
}
