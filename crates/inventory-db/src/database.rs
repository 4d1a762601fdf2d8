//! # Database Connection Management
//!
//! Connection configuration and scoped handles for the SQLite store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Scoped Connection per Operation                      │
//! │                                                                         │
//! │  App Startup                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← File name, busy timeout, schema flag             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Build options + ensure schema            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.delete_by_id(3)                                                   │
//! │       │                                                                 │
//! │       ├── connect()   ──► open handle                                   │
//! │       ├── DELETE ...  ──► one statement, autocommit                     │
//! │       └── return      ──► handle dropped (closed) on every path         │
//! │                                                                         │
//! │  Nothing is held open while the console waits for the operator.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{Connection, SqliteConnection};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::schema;
use inventory_core::DEFAULT_DATABASE_FILE;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/tmp/inventario.db")
///     .busy_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long a statement waits on a locked database before failing.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Whether to create the products table on open.
    /// Default: true
    pub ensure_schema: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            busy_timeout: Duration::from_secs(5),
            ensure_schema: true,
        }
    }

    /// Sets the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether to create the schema on open.
    pub fn ensure_schema(mut self, ensure: bool) -> Self {
        self.ensure_schema = ensure;
        self
    }
}

impl Default for DbConfig {
    /// `inventario.db` in the current working directory.
    fn default() -> Self {
        DbConfig::new(DEFAULT_DATABASE_FILE)
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// `Database` holds connection options, not a connection. Every call to
/// [`Database::connect`] opens a fresh handle that is closed when dropped.
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
    path: PathBuf,
}

impl Database {
    /// Prepares the database and creates the schema if configured to.
    ///
    /// ## What This Does
    /// 1. Builds connect options:
    ///    - create the file if missing
    ///    - rollback journal (single file on disk between operations)
    ///    - NORMAL synchronous
    /// 2. Runs `ensure_schema` on a scoped handle (if enabled)
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError)` - File could not be opened or schema failed
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database"
        );

        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(config.busy_timeout);

        debug!("Connection options configured");

        let db = Database {
            options,
            path: config.database_path,
        };

        if config.ensure_schema {
            db.ensure_schema().await?;
        }

        Ok(db)
    }

    /// Creates the products table if it does not exist.
    ///
    /// Idempotent: safe to call on every start.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        let mut conn = self.connect().await?;
        schema::ensure_schema(&mut conn).await?;
        info!("Schema ready");
        Ok(())
    }

    /// Opens a new connection to the store.
    ///
    /// The returned handle is owned by the caller and closes when dropped,
    /// so a repository method that returns early (`?`) still releases it.
    pub async fn connect(&self) -> DbResult<SqliteConnection> {
        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let low_stock = db.products().filter_by_max_quantity(5).await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Checks that the database answers queries and holds the products table.
    ///
    /// ## Returns
    /// * `true` - Database is responsive and the table is present
    /// * `false` - Database is unavailable or the table is missing
    pub async fn health_check(&self) -> bool {
        let mut conn = match self.connect().await {
            Ok(conn) => conn,
            Err(_) => return false,
        };

        matches!(schema::table_exists(&mut conn).await, Ok(true))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
