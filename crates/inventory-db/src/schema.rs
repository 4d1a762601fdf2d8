//! # Schema Initialization
//!
//! The store has exactly one table. It is created on startup if missing and
//! left untouched otherwise; there is no migration history.
//!
//! ```text
//! productos
//! ├── id           INTEGER PRIMARY KEY AUTOINCREMENT
//! ├── nombre       TEXT NOT NULL
//! ├── descripcion  TEXT
//! ├── cantidad     INTEGER NOT NULL
//! ├── precio       REAL NOT NULL
//! └── categoria    TEXT
//! ```

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventory_core::PRODUCTS_TABLE;

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS productos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    descripcion TEXT,
    cantidad INTEGER NOT NULL,
    precio REAL NOT NULL,
    categoria TEXT
)
"#;

/// Creates the `productos` table if it does not exist.
///
/// ## Safety
/// - Idempotent: existing rows and structure are left as they are
/// - Single statement under autocommit
pub async fn ensure_schema(conn: &mut SqliteConnection) -> DbResult<()> {
    debug!(table = PRODUCTS_TABLE, "Ensuring schema");

    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(conn)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    Ok(())
}

/// Returns whether the products table exists.
pub async fn table_exists(conn: &mut SqliteConnection) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(PRODUCTS_TABLE)
            .fetch_one(conn)
            .await?;

    Ok(count > 0)
}

/// Lists the products table columns in declaration order.
#[cfg(test)]
async fn column_names(conn: &mut SqliteConnection) -> DbResult<Vec<String>> {
    let names: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?1) ORDER BY cid")
        .bind(PRODUCTS_TABLE)
        .fetch_all(conn)
        .await?;

    Ok(names)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn open(dir: &tempfile::TempDir) -> Database {
        let config = DbConfig::new(dir.path().join("inventario.db")).ensure_schema(false);
        Database::new(config).await.unwrap()
    }

    #[tokio::test]
    async fn test_ensure_schema_creates_table() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir).await;
        let mut conn = db.connect().await.unwrap();

        ensure_schema(&mut conn).await.unwrap();

        assert!(table_exists(&mut conn).await.unwrap());
        assert_eq!(
            column_names(&mut conn).await.unwrap(),
            ["id", "nombre", "descripcion", "cantidad", "precio", "categoria"]
        );
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db = open(&dir).await;
        db.ensure_schema().await.unwrap();

        let fields = inventory_core::ProductFields::new("widget", "", 5, 9.99, "tools").unwrap();
        let id = db.products().insert(&fields).await.unwrap();

        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();

        let mut conn = db.connect().await.unwrap();
        assert_eq!(column_names(&mut conn).await.unwrap().len(), 6);
        assert_eq!(db.products().count().await.unwrap(), 1);
        assert_eq!(
            db.products().find_by_id(id).await.unwrap(),
            Some(fields.into_product(id))
        );
    }
}
