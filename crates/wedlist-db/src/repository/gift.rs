//! # Gift Repository
//!
//! Database operations for wedding gift rows.
//!
//! ## Gift Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Gift Lifecycle                                │
//! │                                                                     │
//! │  1. CREATE                                                          │
//! │     └── create(product) → GiftItem { purchased: false }             │
//! │                                                                     │
//! │  2. PURCHASE (single transaction)                                   │
//! │     ├── guarded product stock decrement                             │
//! │     └── purchased flag 0 → 1                                        │
//! │         Both commit together or not at all: a crash can never       │
//! │         leave stock taken with the gift unmarked.                   │
//! │                                                                     │
//! │  3. REMOVE                                                          │
//! │     └── remove(gift) → row deleted, value consumed                  │
//! │                                                                     │
//! │  The wedding list itself has no durable representation beyond       │
//! │  these rows; load_wedding_list() rebuilds it on demand.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{Result, WeddingListError};
use crate::repository::product::ProductRepository;
use wedlist_core::{CoreError, GiftItem, Product, WeddingList};

/// Row shape of the `wedding_gift` table.
#[derive(Debug, sqlx::FromRow)]
struct GiftRow {
    id: i64,
    product_id: i64,
    purchased: bool,
}

/// Repository for gift database operations.
#[derive(Debug, Clone)]
pub struct GiftRepository {
    pool: SqlitePool,
}

impl GiftRepository {
    /// Creates a new GiftRepository.
    pub fn new(pool: SqlitePool) -> Self {
        GiftRepository { pool }
    }

    /// Factory for a new gift request: inserts a row referencing an
    /// existing product with `purchased = false` and returns the newly
    /// identified gift.
    pub async fn create(&self, product: Product) -> Result<GiftItem> {
        debug!(product_id = %product.id, "Creating gift item");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO wedding_gift (product_id, purchased, created_at)
            VALUES (?1, 0, ?2)
            "#,
        )
        .bind(product.id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(GiftItem::new(result.last_insert_rowid(), product, false))
    }

    /// Rebuilds the wedding list from the store: scans all gift rows
    /// in row order and resolves each one's product by identity.
    ///
    /// ## Errors
    /// `CoreError::UnknownProduct` when a gift row references a
    /// product that no longer exists. Referential integrity breaches
    /// are surfaced, never hidden.
    pub async fn load_wedding_list(&self) -> Result<WeddingList> {
        let rows: Vec<GiftRow> = sqlx::query_as(
            "SELECT id, product_id, purchased FROM wedding_gift ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded wedding gift rows");

        let products = ProductRepository::new(self.pool.clone());

        let mut gifts = Vec::with_capacity(rows.len());
        for row in rows {
            let product = products.get_by_id(row.product_id).await?;
            gifts.push(GiftItem::new(row.id, product, row.purchased));
        }

        Ok(WeddingList::from_gifts(gifts))
    }

    /// Purchases a gift: takes one unit of the referenced product's
    /// stock and records `purchased = true`, in a single transaction.
    ///
    /// ## Errors
    /// - `CoreError::OutOfStock` when the product is exhausted; the
    ///   gift's flag stays false and nothing is written
    /// - `CoreError::UnknownGift` when the gift row has been removed
    ///   since the caller loaded it; the stock decrement is rolled back
    pub async fn purchase(&self, gift: &mut GiftItem) -> Result<()> {
        if !gift.product.in_stock() {
            return Err(CoreError::OutOfStock {
                product_id: gift.product.id,
                name: gift.product.name.clone(),
            }
            .into());
        }

        debug!(gift_id = %gift.id, product_id = %gift.product.id, "Purchasing gift");

        let mut tx = self.pool.begin().await?;

        // Guarded decrement: the stock check and the write are one
        // atomic statement, serialized by the store's row locking.
        let stock_update = sqlx::query(
            r#"
            UPDATE products
            SET stock_quantity = stock_quantity - 1
            WHERE id = ?1 AND stock_quantity > 0
            "#,
        )
        .bind(gift.product.id)
        .execute(&mut *tx)
        .await?;

        if stock_update.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(CoreError::OutOfStock {
                product_id: gift.product.id,
                name: gift.product.name.clone(),
            }
            .into());
        }

        let flag_update = sqlx::query("UPDATE wedding_gift SET purchased = 1 WHERE id = ?1")
            .bind(gift.id)
            .execute(&mut *tx)
            .await?;

        if flag_update.rows_affected() == 0 {
            return Err(CoreError::UnknownGift(gift.id).into());
        }

        tx.commit().await?;

        // Mirror the committed state in memory.
        gift.product
            .take_one_from_stock()
            .map_err(WeddingListError::Domain)?;
        gift.mark_purchased();

        Ok(())
    }

    /// Deletes a gift's durable record.
    ///
    /// Consumes the gift: after removal the in-memory object is
    /// discarded, so no further operations are possible on it.
    ///
    /// ## Errors
    /// `CoreError::UnknownGift` when no row with that identity exists.
    pub async fn remove(&self, gift: GiftItem) -> Result<()> {
        debug!(gift_id = %gift.id, "Removing gift item");

        let result = sqlx::query("DELETE FROM wedding_gift WHERE id = ?1")
            .bind(gift.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::UnknownGift(gift.id).into());
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use wedlist_core::{CatalogueProduct, Money};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seeded_product(db: &Database, name: &str, stock: i64) -> Product {
        db.products()
            .insert(&CatalogueProduct {
                name: name.to_string(),
                brand: "Test Brand".to_string(),
                price: Money::from_pence(4700),
                stock_quantity: stock,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_starts_unpurchased() {
        let db = test_db().await;
        let product = seeded_product(&db, "Tea pot", 50).await;

        let gift = db.gifts().create(product).await.unwrap();

        assert_eq!(gift.id, 1);
        assert!(!gift.purchased());

        let list = db.gifts().load_wedding_list().await.unwrap();
        assert_eq!(list.len(), 1);
        assert!(!list.gift(gift.id).unwrap().purchased());
    }

    #[tokio::test]
    async fn test_purchase_flips_flag_and_takes_stock_together() {
        let db = test_db().await;
        let product = seeded_product(&db, "Tea pot", 2).await;

        let mut gift = db.gifts().create(product).await.unwrap();
        db.gifts().purchase(&mut gift).await.unwrap();

        assert!(gift.purchased());
        assert_eq!(gift.product.stock_quantity, 1);

        // Both effects visible on reload.
        let list = db.gifts().load_wedding_list().await.unwrap();
        let reloaded = list.gift(gift.id).unwrap();
        assert!(reloaded.purchased());
        assert_eq!(reloaded.product.stock_quantity, 1);
    }

    #[tokio::test]
    async fn test_purchase_out_of_stock_leaves_flag_false() {
        let db = test_db().await;
        let product = seeded_product(&db, "Espresso Maker", 0).await;

        let mut gift = db.gifts().create(product).await.unwrap();
        let err = db.gifts().purchase(&mut gift).await.unwrap_err();

        assert!(err.is_out_of_stock());
        assert!(!gift.purchased());

        // No partial update reached the store.
        let list = db.gifts().load_wedding_list().await.unwrap();
        assert!(!list.gift(gift.id).unwrap().purchased());
    }

    #[tokio::test]
    async fn test_purchase_of_removed_gift_rolls_back_stock() {
        let db = test_db().await;
        let product = seeded_product(&db, "Hamper", 3).await;

        let mut gift = db.gifts().create(product).await.unwrap();
        let doomed = db.gifts().load_wedding_list().await.unwrap().remove(gift.id).unwrap();
        db.gifts().remove(doomed).await.unwrap();

        let err = db.gifts().purchase(&mut gift).await.unwrap_err();
        assert!(matches!(
            err,
            WeddingListError::Domain(CoreError::UnknownGift(_))
        ));

        // The decrement was rolled back with the failed flag update.
        assert_eq!(db.products().get_by_id(1).await.unwrap().stock_quantity, 3);
    }

    #[tokio::test]
    async fn test_remove_deletes_the_row() {
        let db = test_db().await;
        let product = seeded_product(&db, "Tea pot", 50).await;

        let gift = db.gifts().create(product).await.unwrap();
        let gift_id = gift.id;
        db.gifts().remove(gift).await.unwrap();

        let list = db.gifts().load_wedding_list().await.unwrap();
        assert!(list.is_empty());
        assert!(matches!(
            list.gift(gift_id).unwrap_err(),
            CoreError::GiftNotInList(_)
        ));
    }

    #[tokio::test]
    async fn test_removing_twice_is_unknown_gift() {
        let db = test_db().await;
        let product = seeded_product(&db, "Tea pot", 50).await;

        let gift = db.gifts().create(product).await.unwrap();
        let copy = db.gifts().load_wedding_list().await.unwrap().remove(gift.id).unwrap();

        db.gifts().remove(gift).await.unwrap();
        let err = db.gifts().remove(copy).await.unwrap_err();

        assert!(matches!(
            err,
            WeddingListError::Domain(CoreError::UnknownGift(_))
        ));
    }

    #[tokio::test]
    async fn test_dangling_product_reference_is_surfaced() {
        let db = test_db().await;
        let product = seeded_product(&db, "Tea pot", 50).await;
        let product_id = product.id;
        db.gifts().create(product).await.unwrap();

        // Break referential integrity behind the repository's back.
        sqlx::query("PRAGMA foreign_keys = OFF")
            .execute(db.pool())
            .await
            .unwrap();
        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(product_id)
            .execute(db.pool())
            .await
            .unwrap();

        let err = db.gifts().load_wedding_list().await.unwrap_err();
        assert!(matches!(
            err,
            WeddingListError::Domain(CoreError::UnknownProduct(_))
        ));
    }
}
