//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD by id
//! - Name substring search
//! - Low-stock report (quantity at or below a threshold)
//!
//! ## Not Found vs. Failed
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  update_by_id(99, fields) / delete_by_id(99)                        │
//! │       │                                                             │
//! │       ├── statement failed (locked, I/O, missing table)             │
//! │       │        → Err(DbError)        "system error"                 │
//! │       │                                                             │
//! │       ├── statement ran, matched 0 rows                             │
//! │       │        → Ok(0)               "no product with that id"      │
//! │       │                                                             │
//! │       └── statement ran, matched the row                            │
//! │                → Ok(1)               success                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers must treat `Ok(0)` as a user error and `Err` as a store error.

use tracing::debug;

use crate::database::Database;
use crate::error::DbResult;
use inventory_core::validation::normalize_text;
use inventory_core::{Product, ProductFields};

/// Column list mapping the stored (Spanish) column names onto `Product`.
///
/// NULL text columns come back as empty strings.
const SELECT_PRODUCT: &str = r#"
SELECT
    id,
    nombre AS name,
    COALESCE(descripcion, '') AS description,
    cantidad AS quantity,
    precio AS price,
    COALESCE(categoria, '') AS category
FROM productos
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(db);
///
/// let id = repo.insert(&fields).await?;
/// let product = repo.find_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(db: Database) -> Self {
        ProductRepository { db }
    }

    /// Returns whether the store holds at least one product.
    ///
    /// This is the single "is the inventory empty" check reused before every
    /// menu action that needs existing products.
    pub async fn has_any_records(&self) -> DbResult<bool> {
        let mut conn = self.db.connect().await?;

        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM productos)")
            .fetch_one(&mut conn)
            .await?;

        debug!(exists = exists != 0, "Checked for products");
        Ok(exists != 0)
    }

    /// Returns whether a product with this id exists.
    pub async fn id_exists(&self, id: i64) -> DbResult<bool> {
        let mut conn = self.db.connect().await?;

        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM productos WHERE id = ?1)")
            .bind(id)
            .fetch_one(&mut conn)
            .await?;

        debug!(id, exists = exists != 0, "Checked product id");
        Ok(exists != 0)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(id)` - Id assigned by the store
    pub async fn insert(&self, fields: &ProductFields) -> DbResult<i64> {
        debug!(name = %fields.name(), "Inserting product");

        let mut conn = self.db.connect().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO productos (nombre, descripcion, cantidad, precio, categoria)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(fields.name())
        .bind(fields.description())
        .bind(fields.quantity())
        .bind(fields.price())
        .bind(fields.category())
        .execute(&mut conn)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Lists every product in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.db.connect().await?;

        let sql = format!("{SELECT_PRODUCT} ORDER BY id");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&mut conn)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Replaces all non-id fields of a product in one statement.
    ///
    /// ## Returns
    /// * `Ok(0)` - No product has this id
    /// * `Ok(n)` - Rows updated (1 for an existing id)
    pub async fn update_by_id(&self, id: i64, fields: &ProductFields) -> DbResult<u64> {
        debug!(id, "Updating product");

        let mut conn = self.db.connect().await?;

        let result = sqlx::query(
            r#"
            UPDATE productos SET
                nombre = ?2,
                descripcion = ?3,
                cantidad = ?4,
                precio = ?5,
                categoria = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(fields.name())
        .bind(fields.description())
        .bind(fields.quantity())
        .bind(fields.price())
        .bind(fields.category())
        .execute(&mut conn)
        .await?;

        let affected = result.rows_affected();
        debug!(id, affected, "Product update finished");
        Ok(affected)
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(0)` - No product has this id
    /// * `Ok(n)` - Rows deleted (1 for an existing id)
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting product");

        let mut conn = self.db.connect().await?;

        let result = sqlx::query("DELETE FROM productos WHERE id = ?1")
            .bind(id)
            .execute(&mut conn)
            .await?;

        let affected = result.rows_affected();
        debug!(id, affected, "Product delete finished");
        Ok(affected)
    }

    /// Gets a product by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let mut conn = self.db.connect().await?;

        let sql = format!("{SELECT_PRODUCT} WHERE id = ?1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;

        debug!(id, found = product.is_some(), "Looked up product");
        Ok(product)
    }

    /// Finds products whose name contains `text` anywhere.
    ///
    /// ## How It Works
    /// The text is normalized the same way stored names are (trimmed and
    /// lowercased), so `"WID"` and `"ÑAN"` match like `"wid"` and `"ñan"`.
    /// It then becomes `LIKE '%wid%'`. `%`, `_` and `\` in the search text
    /// are escaped so they match literally.
    pub async fn find_by_name_substring(&self, text: &str) -> DbResult<Vec<Product>> {
        debug!(text = %text, "Searching products by name");

        let mut conn = self.db.connect().await?;

        let pattern = format!("%{}%", escape_like(&normalize_text(text)));
        let sql = format!(r"{SELECT_PRODUCT} WHERE nombre LIKE ?1 ESCAPE '\' ORDER BY id");
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(pattern)
            .fetch_all(&mut conn)
            .await?;

        debug!(count = products.len(), "Name search returned products");
        Ok(products)
    }

    /// Lists products whose quantity is at or below `max_quantity`.
    pub async fn filter_by_max_quantity(&self, max_quantity: i64) -> DbResult<Vec<Product>> {
        debug!(max_quantity, "Filtering products by quantity");

        let mut conn = self.db.connect().await?;

        let sql = format!("{SELECT_PRODUCT} WHERE cantidad <= ?1 ORDER BY id");
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(max_quantity)
            .fetch_all(&mut conn)
            .await?;

        debug!(count = products.len(), "Quantity report returned products");
        Ok(products)
    }

    /// Counts products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.db.connect().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
            .fetch_one(&mut conn)
            .await?;

        Ok(count)
    }
}

/// Escapes LIKE wildcards so the text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DbConfig, DbError};
    use tempfile::TempDir;

    async fn setup() -> (TempDir, ProductRepository) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("inventario.db")))
            .await
            .unwrap();
        (dir, db.products())
    }

    fn fields(name: &str, quantity: i64) -> ProductFields {
        ProductFields::new(name, "", quantity, 1.5, "misc").unwrap()
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("wid"), "wid");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[tokio::test]
    async fn test_has_any_records() {
        let (_dir, repo) = setup().await;
        assert!(!repo.has_any_records().await.unwrap());

        repo.insert(&fields("widget", 1)).await.unwrap();
        assert!(repo.has_any_records().await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_then_find_round_trip() {
        let (_dir, repo) = setup().await;
        let input = ProductFields::new("Widget", "", 5, 9.99, "Tools").unwrap();

        let id = repo.insert(&input).await.unwrap();
        let product = repo.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.name, "widget");
        assert_eq!(product.description, "");
        assert_eq!(product.quantity, 5);
        assert_eq!(product.price, 9.99);
        assert_eq!(product.category, "tools");
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let (_dir, repo) = setup().await;

        let first = repo.insert(&fields("a", 1)).await.unwrap();
        let second = repo.insert(&fields("b", 1)).await.unwrap();
        assert!(second > first);

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let (_dir, repo) = setup().await;
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_id_exists() {
        let (_dir, repo) = setup().await;
        let id = repo.insert(&fields("widget", 1)).await.unwrap();

        assert!(repo.id_exists(id).await.unwrap());
        assert!(!repo.id_exists(id + 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_by_id_replaces_all_fields() {
        let (_dir, repo) = setup().await;
        let id = repo.insert(&fields("widget", 1)).await.unwrap();

        let updated = ProductFields::new("gadget", "shiny", 10, 20.0, "toys").unwrap();
        assert_eq!(repo.update_by_id(id, &updated).await.unwrap(), 1);

        let product = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(product, updated.into_product(id));
    }

    #[tokio::test]
    async fn test_update_missing_id_reports_zero_rows() {
        let (_dir, repo) = setup().await;

        let affected = repo.update_by_id(99999, &fields("widget", 1)).await.unwrap();

        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_delete_by_id_removes_only_that_row() {
        let (_dir, repo) = setup().await;
        let keep = repo.insert(&fields("keep", 1)).await.unwrap();
        let gone = repo.insert(&fields("gone", 1)).await.unwrap();

        assert_eq!(repo.delete_by_id(gone).await.unwrap(), 1);

        assert_eq!(repo.find_by_id(gone).await.unwrap(), None);
        assert!(repo.find_by_id(keep).await.unwrap().is_some());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_id_reports_zero_rows() {
        let (_dir, repo) = setup().await;
        repo.insert(&fields("widget", 1)).await.unwrap();

        assert_eq!(repo.delete_by_id(42).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_name_substring() {
        let (_dir, repo) = setup().await;
        repo.insert(&fields("widget-pro", 1)).await.unwrap();
        repo.insert(&fields("gadget", 1)).await.unwrap();

        let found = repo.find_by_name_substring("wid").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "widget-pro");

        let found = repo.find_by_name_substring("WIDGET").await.unwrap();
        assert_eq!(found.len(), 1);

        let found = repo.find_by_name_substring("dget").await.unwrap();
        assert_eq!(found.len(), 2);

        assert!(repo.find_by_name_substring("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_substring_folds_non_ascii_case() {
        let (_dir, repo) = setup().await;
        repo.insert(&fields("Ñandú", 1)).await.unwrap();

        let lower = repo.find_by_name_substring("ñan").await.unwrap();
        let upper = repo.find_by_name_substring("ÑAN").await.unwrap();

        assert_eq!(lower.len(), 1);
        assert_eq!(upper, lower);
        assert_eq!(upper[0].name, "ñandú");
    }

    #[tokio::test]
    async fn test_find_by_name_treats_wildcards_literally() {
        let (_dir, repo) = setup().await;
        repo.insert(&fields("widget", 1)).await.unwrap();
        repo.insert(&fields("50% off", 1)).await.unwrap();

        let found = repo.find_by_name_substring("%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "50% off");

        assert!(repo.find_by_name_substring("w_dget").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filter_by_max_quantity() {
        let (_dir, repo) = setup().await;
        for (name, qty) in [("none", 0), ("few", 3), ("some", 5)] {
            repo.insert(&fields(name, qty)).await.unwrap();
        }

        let zero = repo.filter_by_max_quantity(0).await.unwrap();
        assert_eq!(zero.len(), 1);
        assert_eq!(zero[0].quantity, 0);

        assert_eq!(repo.filter_by_max_quantity(3).await.unwrap().len(), 2);
        assert_eq!(repo.filter_by_max_quantity(100).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_null_text_columns_read_as_empty() {
        let (_dir, repo) = setup().await;
        let mut conn = repo.db.connect().await.unwrap();
        sqlx::query("INSERT INTO productos (nombre, cantidad, precio) VALUES ('bare', 1, 2.0)")
            .execute(&mut conn)
            .await
            .unwrap();

        let products = repo.list_all().await.unwrap();
        assert_eq!(products[0].description, "");
        assert_eq!(products[0].category, "");
    }

    #[tokio::test]
    async fn test_missing_table_is_a_store_error() {
        let (_dir, repo) = setup().await;
        let mut conn = repo.db.connect().await.unwrap();
        sqlx::query("DROP TABLE productos")
            .execute(&mut conn)
            .await
            .unwrap();

        assert!(matches!(
            repo.update_by_id(1, &fields("widget", 1)).await,
            Err(DbError::QueryFailed(_))
        ));
        assert!(repo.has_any_records().await.is_err());
        assert!(matches!(
            repo.id_exists(1).await,
            Err(DbError::QueryFailed(_))
        ));
    }
}
