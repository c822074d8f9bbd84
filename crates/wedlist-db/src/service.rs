//! # Wedding List Service
//!
//! The facade the request-handling layer consumes: one method per
//! external operation, inputs and outputs as domain values.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Operation                 │ Failure                                │
//! │  ──────────────────────────┼─────────────────────────────────────── │
//! │  available_products()      │ -                                      │
//! │  wedding_list()            │ UnknownProduct (dangling reference)    │
//! │  report()                  │ UnknownProduct (dangling reference)    │
//! │  add_gift(product_id)      │ UnknownProduct                         │
//! │  purchase_gift(gift_id)    │ UnknownGift, OutOfStock                │
//! │  remove_gift(gift_id)      │ UnknownGift                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation re-reads current state from the store before
//! acting; nothing is cached across calls. That bounds staleness to
//! the duration of one operation and keeps the guarded single-row
//! updates the only concurrency control required.

use tracing::info;

use crate::error::Result;
use crate::pool::Database;
use wedlist_core::{CoreError, Product, WeddingList, WeddingListReport};

/// Service facade over the store for the external operations.
///
/// Holds a `Database` handle injected by the caller; lifecycle
/// (open/close) stays with whoever constructed it.
#[derive(Debug, Clone)]
pub struct WeddingListService {
    db: Database,
}

impl WeddingListService {
    /// Creates a service over an open database handle.
    pub fn new(db: Database) -> Self {
        WeddingListService { db }
    }

    /// Lists every product available in the catalogue, in row order.
    pub async fn available_products(&self) -> Result<Vec<Product>> {
        Ok(self.db.products().list_all().await?)
    }

    /// Rebuilds the current wedding list from the store.
    pub async fn wedding_list(&self) -> Result<WeddingList> {
        self.db.gifts().load_wedding_list().await
    }

    /// Builds the two-section report over the current wedding list.
    pub async fn report(&self) -> Result<WeddingListReport> {
        Ok(self.wedding_list().await?.report())
    }

    /// Adds a gift request for the given product, returning the new
    /// gift's identity.
    ///
    /// ## Errors
    /// `CoreError::UnknownProduct` when the product id is not found.
    pub async fn add_gift(&self, product_id: i64) -> Result<i64> {
        let product = self.db.products().get_by_id(product_id).await?;
        let gift = self.db.gifts().create(product).await?;

        info!(gift_id = %gift.id, product_id = %product_id, "Gift added to wedding list");
        Ok(gift.id)
    }

    /// Purchases the gift with the given identity.
    ///
    /// ## Errors
    /// - `CoreError::UnknownGift` when no such gift is on the list
    /// - `CoreError::OutOfStock` when the underlying product is
    ///   exhausted; the gift stays unpurchased
    pub async fn purchase_gift(&self, gift_id: i64) -> Result<()> {
        let mut list = self.wedding_list().await?;
        let gift = list
            .gift_mut(gift_id)
            .map_err(|_| CoreError::UnknownGift(gift_id))?;

        self.db.gifts().purchase(gift).await?;

        info!(gift_id = %gift_id, "Gift purchased");
        Ok(())
    }

    /// Removes the gift with the given identity from the list and the
    /// store.
    ///
    /// ## Errors
    /// `CoreError::UnknownGift` when no such gift is on the list.
    pub async fn remove_gift(&self, gift_id: i64) -> Result<()> {
        let mut list = self.wedding_list().await?;
        let gift = list
            .remove(gift_id)
            .map_err(|_| CoreError::UnknownGift(gift_id))?;

        self.db.gifts().remove(gift).await?;

        info!(gift_id = %gift_id, "Gift removed from wedding list");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
