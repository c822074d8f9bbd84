//! # Product Repository
//!
//! Database operations for the purchasable catalogue.
//!
//! ## Key Operations
//! - Full-table scan in row order (`list_all`)
//! - Lookup by stable row identity (`get_by_id`)
//! - Guarded single-unit stock decrement (`purchase`)
//!
//! ## Guarded Decrement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 How a purchase stays consistent                     │
//! │                                                                     │
//! │  UPDATE products                                                    │
//! │  SET stock_quantity = stock_quantity - 1                            │
//! │  WHERE id = ?1 AND stock_quantity > 0                               │
//! │       │                                                             │
//! │       ├── 1 row affected  → unit taken, mirror it in memory         │
//! │       └── 0 rows affected → a concurrent purchaser took the last    │
//! │                             unit (or the copy was stale): OutOfStock│
//! │                                                                     │
//! │  The decrement and its stock check are one atomic statement, so     │
//! │  stock can never be driven below zero however many purchasers       │
//! │  race on the same row.                                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbResult, Result, WeddingListError};
use wedlist_core::{CatalogueProduct, CoreError, Money, Product};

/// Row shape of the `products` table.
///
/// Kept separate from the domain type so the store column layout can
/// change without touching wedlist-core.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    brand: String,
    price_pence: i64,
    stock_quantity: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            brand: row.brand,
            price: Money::from_pence(row.price_pence),
            stock_quantity: row.stock_quantity,
        }
    }
}

const SELECT_PRODUCT: &str =
    "SELECT id, name, brand, price_pence, stock_quantity FROM products";

const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (name, brand, price_pence, stock_quantity, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5)
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // Catalogue listing, id order
/// let products = repo.list_all().await?;
///
/// // Purchase one unit
/// let mut product = repo.get_by_id(1).await?;
/// repo.purchase(&mut product).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns every product row currently in the store, in row order.
    ///
    /// No filtering: out-of-stock products are still listed (their
    /// quantity tells the caller they cannot be purchased).
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let rows: Vec<ProductRow> =
            sqlx::query_as(&format!("{SELECT_PRODUCT} ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;

        debug!(count = rows.len(), "Loaded product catalogue");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Returns the product with the given identity.
    ///
    /// ## Errors
    /// `CoreError::UnknownProduct` when no such row exists.
    pub async fn get_by_id(&self, id: i64) -> Result<Product> {
        let row: Option<ProductRow> =
            sqlx::query_as(&format!("{SELECT_PRODUCT} WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(Product::from)
            .ok_or_else(|| CoreError::UnknownProduct(id).into())
    }

    /// Purchases one unit of a product: decrements its stock by
    /// exactly one and commits the new quantity before returning.
    ///
    /// The in-memory product and the stored row agree afterwards.
    ///
    /// ## Errors
    /// `CoreError::OutOfStock` when the quantity is zero - either in
    /// the caller's copy or, after the guarded update, in the store
    /// itself. On failure nothing is written and the caller's copy is
    /// left unchanged.
    pub async fn purchase(&self, product: &mut Product) -> Result<()> {
        if !product.in_stock() {
            return Err(CoreError::OutOfStock {
                product_id: product.id,
                name: product.name.clone(),
            }
            .into());
        }

        debug!(id = %product.id, "Taking one unit from stock");

        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock_quantity = stock_quantity - 1
            WHERE id = ?1 AND stock_quantity > 0
            "#,
        )
        .bind(product.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // The copy was stale: the store is the source of truth.
            return Err(CoreError::OutOfStock {
                product_id: product.id,
                name: product.name.clone(),
            }
            .into());
        }

        product
            .take_one_from_stock()
            .map_err(WeddingListError::Domain)
    }

    /// Inserts a validated catalogue product, returning the entity
    /// with its store-assigned identity.
    pub async fn insert(&self, product: &CatalogueProduct) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let now = Utc::now();

        let result = sqlx::query(INSERT_PRODUCT)
            .bind(&product.name)
            .bind(&product.brand)
            .bind(product.price.pence())
            .bind(product.stock_quantity)
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
        })
    }

    /// Inserts a batch of validated catalogue products in one
    /// transaction: either every row commits or none do.
    ///
    /// A failure on any row (a schema `CHECK`, a full disk) rolls the
    /// whole batch back, so a partial catalogue can never reach the
    /// store.
    pub async fn insert_all(&self, products: &[CatalogueProduct]) -> DbResult<Vec<Product>> {
        debug!(count = products.len(), "Inserting product batch");

        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let mut inserted = Vec::with_capacity(products.len());
        for product in products {
            let result = sqlx::query(INSERT_PRODUCT)
                .bind(&product.name)
                .bind(&product.brand)
                .bind(product.price.pence())
                .bind(product.stock_quantity)
                .bind(now)
                .execute(&mut *tx)
                .await?;

            inserted.push(Product {
                id: result.last_insert_rowid(),
                name: product.name.clone(),
                brand: product.brand.clone(),
                price: product.price,
                stock_quantity: product.stock_quantity,
            });
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Counts products (bootstrap guard and diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use wedlist_core::Money;

    fn catalogue_product(name: &str, stock: i64) -> CatalogueProduct {
        CatalogueProduct {
            name: name.to_string(),
            brand: "Test Brand".to_string(),
            price: Money::from_pence(4700),
            stock_quantity: stock,
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_identities() {
        let db = test_db().await;
        let repo = db.products();

        let first = repo.insert(&catalogue_product("Tea pot", 50)).await.unwrap();
        let second = repo.insert(&catalogue_product("Cake stand", 4)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_all_in_row_order() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&catalogue_product("A", 1)).await.unwrap();
        repo.insert(&catalogue_product("B", 2)).await.unwrap();
        repo.insert(&catalogue_product("C", 0)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        // Out-of-stock rows are listed, not filtered.
        assert_eq!(all[2].stock_quantity, 0);
    }

    #[tokio::test]
    async fn test_insert_all_commits_the_whole_batch() {
        let db = test_db().await;
        let repo = db.products();

        let batch = vec![
            catalogue_product("Tea pot", 50),
            catalogue_product("Cake stand", 4),
        ];
        let inserted = repo.insert_all(&batch).await.unwrap();

        assert_eq!(inserted.len(), 2);
        assert_eq!(inserted[0].id, 1);
        assert_eq!(inserted[1].id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_all_rolls_back_on_rejected_row() {
        let db = test_db().await;
        let repo = db.products();

        // The second row violates the stock_quantity >= 0 CHECK; the
        // first must not survive it.
        let batch = vec![
            catalogue_product("Good", 1),
            catalogue_product("Bad", -5),
        ];
        repo.insert_all(&batch).await.unwrap_err();

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_product() {
        let db = test_db().await;

        let err = db.products().get_by_id(99).await.unwrap_err();
        assert!(matches!(
            err,
            WeddingListError::Domain(CoreError::UnknownProduct(99))
        ));
    }

    #[tokio::test]
    async fn test_purchase_decrements_memory_and_store() {
        let db = test_db().await;
        let repo = db.products();

        let mut product = repo.insert(&catalogue_product("Tea pot", 3)).await.unwrap();
        repo.purchase(&mut product).await.unwrap();

        assert_eq!(product.stock_quantity, 2);

        // Observable by reloading from the store too.
        let reloaded = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(reloaded.stock_quantity, 2);
    }

    #[tokio::test]
    async fn test_purchase_at_zero_is_out_of_stock_and_writes_nothing() {
        let db = test_db().await;
        let repo = db.products();

        let mut product = repo.insert(&catalogue_product("Espresso Maker", 0)).await.unwrap();
        let err = repo.purchase(&mut product).await.unwrap_err();

        assert!(err.is_out_of_stock());
        assert_eq!(product.stock_quantity, 0);
        assert_eq!(repo.get_by_id(product.id).await.unwrap().stock_quantity, 0);
    }

    #[tokio::test]
    async fn test_purchase_with_stale_copy_is_out_of_stock() {
        let db = test_db().await;
        let repo = db.products();

        let product = repo.insert(&catalogue_product("Hamper", 1)).await.unwrap();

        // Two loads of the same row, as two requests would hold.
        let mut first = repo.get_by_id(product.id).await.unwrap();
        let mut second = repo.get_by_id(product.id).await.unwrap();

        repo.purchase(&mut first).await.unwrap();

        // The second copy still claims a unit, but the guarded update
        // sees the truth.
        let err = repo.purchase(&mut second).await.unwrap_err();
        assert!(err.is_out_of_stock());
        assert_eq!(repo.get_by_id(product.id).await.unwrap().stock_quantity, 0);
    }
}
