//! # Domain Types
//!
//! Core domain types for the wedding list organiser.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌───────────────────┐ │
//! │  │    Product      │   │    GiftItem     │   │   WeddingList     │ │
//! │  │  ─────────────  │   │  ─────────────  │   │  ───────────────  │ │
//! │  │  id (i64)       │◄──│  product        │◄──│  gifts (ordered)  │ │
//! │  │  name, brand    │   │  id (i64)       │   │  purchased()      │ │
//! │  │  price (pence)  │   │  purchased      │   │  not_purchased()  │ │
//! │  │  stock_quantity │   │  (one-way flag) │   │  report()         │ │
//! │  └─────────────────┘   └─────────────────┘   └───────────────────┘ │
//! │                                                                     │
//! │  Identity is the stable integer row id assigned by the store.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rules here are pure: `take_one_from_stock` and `mark_purchased`
//! mutate in-memory values only. Persisting the new state is the
//! wedlist-db repositories' job, and they re-read current state from
//! the store before every mutation.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalogue entry that can be given as a gift.
///
/// The serialized form (id, name, brand, price in pence, stock
/// quantity) is the stable field set external consumers see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Stable identity assigned by the store.
    pub id: i64,

    /// Display name shown on the wedding list.
    pub name: String,

    /// Brand display string.
    pub brand: String,

    /// Price in pence (smallest currency unit).
    pub price: Money,

    /// Units currently in stock. Never negative.
    pub stock_quantity: i64,
}

impl Product {
    /// Takes exactly one unit from stock.
    ///
    /// ## Errors
    /// `CoreError::OutOfStock` when `stock_quantity` is zero; the
    /// product is left unchanged.
    ///
    /// ## Example
    /// ```rust
    /// # use wedlist_core::{Money, Product};
    /// let mut teapot = Product {
    ///     id: 1,
    ///     name: "Tea pot".into(),
    ///     brand: "Le Creuset".into(),
    ///     price: Money::from_pence(4700),
    ///     stock_quantity: 2,
    /// };
    /// teapot.take_one_from_stock().unwrap();
    /// assert_eq!(teapot.stock_quantity, 1);
    /// ```
    pub fn take_one_from_stock(&mut self) -> CoreResult<()> {
        if self.stock_quantity == 0 {
            return Err(CoreError::OutOfStock {
                product_id: self.id,
                name: self.name.clone(),
            });
        }

        self.stock_quantity -= 1;
        Ok(())
    }

    /// Checks whether a purchase could currently succeed.
    #[inline]
    pub const fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

// =============================================================================
// Gift Item
// =============================================================================

/// A gift request referencing exactly one product.
///
/// Several gift items may reference the same product; multiplicity is
/// not constrained here. The `purchased` flag only ever transitions
/// false → true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiftItem {
    /// Stable identity assigned by the store.
    pub id: i64,

    /// The product this gift is a request for. Stock is read and
    /// written through the product's own API, never duplicated here.
    pub product: Product,

    purchased: bool,
}

impl GiftItem {
    /// Rehydrates a gift item from stored state.
    pub fn new(id: i64, product: Product, purchased: bool) -> Self {
        GiftItem {
            id,
            product,
            purchased,
        }
    }

    /// Whether the gift has been purchased.
    ///
    /// Reflects the value captured at load/mutation time; re-reading it
    /// requires reloading from the store.
    #[inline]
    pub const fn purchased(&self) -> bool {
        self.purchased
    }

    /// Marks the gift as purchased. One-way: there is no path back.
    pub fn mark_purchased(&mut self) {
        self.purchased = true;
    }
}

// =============================================================================
// Wedding List
// =============================================================================

/// The ordered aggregate of current gift items.
///
/// A dedicated type rather than a general-purpose sequence: the only
/// mutations are [`append`](WeddingList::append) and
/// [`remove`](WeddingList::remove), so membership cannot be changed in
/// a way that bypasses the gift lifecycle. Insertion order is
/// significant for report ordering.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct WeddingList {
    gifts: Vec<GiftItem>,
}

impl WeddingList {
    /// Creates an empty wedding list.
    pub fn new() -> Self {
        WeddingList::default()
    }

    /// Builds a wedding list from gift items in store row order.
    pub fn from_gifts(gifts: Vec<GiftItem>) -> Self {
        WeddingList { gifts }
    }

    /// Number of gifts currently on the list.
    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    /// Whether the list has no gifts.
    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }

    /// Iterates the gifts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GiftItem> {
        self.gifts.iter()
    }

    /// Appends a gift to the end of the list.
    pub fn append(&mut self, gift: GiftItem) {
        self.gifts.push(gift);
    }

    /// Removes the gift with the given identity, returning it.
    ///
    /// Identity equality determines the match; when duplicates exist
    /// the first is removed.
    ///
    /// ## Errors
    /// `CoreError::GiftNotInList` when no member matches - never a
    /// silent no-op.
    pub fn remove(&mut self, gift_id: i64) -> CoreResult<GiftItem> {
        let index = self.position(gift_id)?;
        Ok(self.gifts.remove(index))
    }

    /// Looks up the member with the given identity.
    pub fn gift(&self, gift_id: i64) -> CoreResult<&GiftItem> {
        let index = self.position(gift_id)?;
        Ok(&self.gifts[index])
    }

    /// Looks up the member with the given identity for mutation.
    ///
    /// This is the purchase-delegation hook: the store layer locates
    /// the member here, purchases its product and flips its flag.
    pub fn gift_mut(&mut self, gift_id: i64) -> CoreResult<&mut GiftItem> {
        let index = self.position(gift_id)?;
        Ok(&mut self.gifts[index])
    }

    /// Gifts that have been purchased, recomputed from the live flags.
    pub fn purchased(&self) -> Vec<&GiftItem> {
        self.gifts.iter().filter(|g| g.purchased()).collect()
    }

    /// Gifts not yet purchased, recomputed from the live flags.
    pub fn not_purchased(&self) -> Vec<&GiftItem> {
        self.gifts.iter().filter(|g| !g.purchased()).collect()
    }

    /// Builds the two-section report view.
    ///
    /// The partition is a disjoint, covering split of the current
    /// membership - every gift appears in exactly one section.
    pub fn report(&self) -> WeddingListReport {
        WeddingListReport {
            purchased_gifts: self.purchased().into_iter().cloned().collect(),
            not_purchased_gifts: self.not_purchased().into_iter().cloned().collect(),
        }
    }

    fn position(&self, gift_id: i64) -> CoreResult<usize> {
        self.gifts
            .iter()
            .position(|g| g.id == gift_id)
            .ok_or(CoreError::GiftNotInList(gift_id))
    }
}

// =============================================================================
// Report View
// =============================================================================

/// The externally consumed report shape: the wedding list partitioned
/// by purchase state.
#[derive(Debug, Clone, Serialize)]
pub struct WeddingListReport {
    pub purchased_gifts: Vec<GiftItem>,
    pub not_purchased_gifts: Vec<GiftItem>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, stock: i64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            brand: "Brand".to_string(),
            price: Money::from_pence(999),
            stock_quantity: stock,
        }
    }

    fn gift(id: i64, product_id: i64) -> GiftItem {
        GiftItem::new(id, product(product_id, 5), false)
    }

    #[test]
    fn test_take_one_from_stock_decrements_by_one() {
        let mut p = product(1, 3);
        p.take_one_from_stock().unwrap();
        assert_eq!(p.stock_quantity, 2);
    }

    #[test]
    fn test_stock_never_goes_negative() {
        let mut p = product(1, 0);
        let err = p.take_one_from_stock().unwrap_err();
        assert!(matches!(err, CoreError::OutOfStock { product_id: 1, .. }));
        // Failed purchase leaves state unchanged.
        assert_eq!(p.stock_quantity, 0);
    }

    #[test]
    fn test_purchased_flag_is_one_way() {
        let mut g = gift(1, 1);
        assert!(!g.purchased());

        g.mark_purchased();
        assert!(g.purchased());

        // Marking again changes nothing; there is no API to revert.
        g.mark_purchased();
        assert!(g.purchased());
    }

    #[test]
    fn test_append_and_remove_by_identity() {
        let mut list = WeddingList::new();
        list.append(gift(1, 1));
        list.append(gift(2, 18));
        assert_eq!(list.len(), 2);

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().unwrap().id, 2);
    }

    #[test]
    fn test_remove_unknown_gift_is_an_error() {
        let mut list = WeddingList::new();
        list.append(gift(1, 1));

        let err = list.remove(99).unwrap_err();
        assert!(matches!(err, CoreError::GiftNotInList(99)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_partition_is_disjoint_and_covering() {
        let mut list = WeddingList::new();
        for id in 1..=5 {
            list.append(gift(id, id));
        }
        list.gift_mut(2).unwrap().mark_purchased();
        list.gift_mut(4).unwrap().mark_purchased();

        let purchased: Vec<i64> = list.purchased().iter().map(|g| g.id).collect();
        let not_purchased: Vec<i64> = list.not_purchased().iter().map(|g| g.id).collect();

        assert_eq!(purchased, vec![2, 4]);
        assert_eq!(not_purchased, vec![1, 3, 5]);

        // Union reconstructs the membership exactly, with no overlap.
        let mut union = [purchased, not_purchased].concat();
        union.sort_unstable();
        assert_eq!(union, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_report_sections_mirror_the_partition() {
        let mut list = WeddingList::new();
        list.append(gift(1, 1));
        list.append(gift(2, 4));
        list.append(gift(3, 10));
        list.gift_mut(2).unwrap().mark_purchased();

        let report = list.report();
        assert_eq!(report.purchased_gifts.len(), 1);
        assert_eq!(report.not_purchased_gifts.len(), 2);
        assert_eq!(report.purchased_gifts[0].id, 2);
    }

    #[test]
    fn test_report_serializes_with_named_sections() {
        let mut list = WeddingList::new();
        list.append(gift(1, 1));

        let json = serde_json::to_value(list.report()).unwrap();
        assert!(json.get("purchased_gifts").is_some());
        assert!(json.get("not_purchased_gifts").is_some());
        assert_eq!(json["not_purchased_gifts"][0]["id"], 1);
        assert_eq!(json["not_purchased_gifts"][0]["purchased"], false);
        assert_eq!(json["not_purchased_gifts"][0]["product"]["price"], 999);
    }

    #[test]
    fn test_duplicate_product_references_are_allowed() {
        let mut list = WeddingList::new();
        list.append(gift(1, 7));
        list.append(gift(2, 7));
        assert_eq!(list.len(), 2);

        // Removal matches gift identity, not product identity.
        list.remove(2).unwrap();
        assert_eq!(list.gift(1).unwrap().product.id, 7);
    }
}
