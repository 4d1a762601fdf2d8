//! # Inventory Manager Entry Point
//!
//! Interactive command-line inventory manager backed by `./inventario.db`.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Open the database & ensure the products table exists
//! 3. Run the menu loop until the operator exits
//!
//! The runtime is current-thread: the program does one thing at a time and
//! every wait is a wait for console input.

use std::process::ExitCode;

use inventory_cli::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    inventory_cli::init_tracing();

    match inventory_cli::run(AppConfig::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
