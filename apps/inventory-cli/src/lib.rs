//! # Inventory CLI Library
//!
//! The interactive console front end of the inventory manager.
//!
//! ## Module Organization
//! ```text
//! inventory_cli/
//! ├── lib.rs        ◄─── You are here (startup & run)
//! ├── config.rs     ◄─── AppConfig, Theme (color roles)
//! ├── prompt.rs     ◄─── Prompter: retrying input validators
//! ├── render.rs     ◄─── Menus, product listing, messages
//! ├── session.rs    ◄─── Menu loop and action dispatch
//! └── error.rs      ◄─── CliError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging                                                  │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: errors only, override with RUST_LOG                      │
//! │                                                                         │
//! │  2. Open Database                                                       │
//! │     • ./inventario.db, created if missing                               │
//! │     • CREATE TABLE IF NOT EXISTS productos                              │
//! │     • Health check: reachable and table present (warns otherwise)       │
//! │                                                                         │
//! │  3. Run Session                                                         │
//! │     • stdin / stdout, blocking, one action at a time                    │
//! │     • Returns on "7) Exit" or end of input                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod session;

use std::io;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::CliResult;
use inventory_db::Database;
use session::Session;

/// Opens the database and runs the interactive menu on the process console.
pub async fn run(config: AppConfig) -> CliResult<()> {
    info!("Starting inventory manager");

    let db = Database::new(config.db).await?;
    if db.health_check().await {
        info!(path = %db.path().display(), "Database ready");
    } else {
        warn!(path = %db.path().display(), "Database health check failed");
    }

    let mut session = Session::new(&db, io::stdin().lock(), io::stdout().lock(), config.theme);
    session.run().await?;

    info!("Inventory manager stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every repository call
/// - `RUST_LOG=inventory_db=debug` - Database layer only
/// - Default: ERROR level, so logs stay out of the interactive prompts
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
