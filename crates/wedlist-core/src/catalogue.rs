//! # Catalogue Parsing
//!
//! Builds the initial product set from a static catalogue description.
//! Used only by the bootstrap step in wedlist-db; nothing here touches
//! the store.
//!
//! ## Description Format
//! A JSON array of entries, each carrying a name, a brand, a stock
//! quantity, and a price in one of two accepted forms:
//!
//! ```json
//! [
//!   {"id": 1, "name": "Tea pot", "brand": "Le Creuset",
//!    "price": "47.00GBP", "in_stock_quantity": 50},
//!   {"id": 2, "name": "Cake stand", "brand": "Wilko",
//!    "int_price": 999, "in_stock_quantity": 4}
//! ]
//! ```
//!
//! `int_price` (already in pence) wins when both are present. An entry
//! with neither form fails the whole load - the bootstrap must abort
//! rather than insert a partial catalogue.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Catalogue Entry (raw description)
// =============================================================================

/// One raw product description as it appears in the catalogue file.
#[derive(Debug, Clone, Deserialize)]
struct CatalogueEntry {
    name: String,
    brand: String,
    /// Human-readable price string, e.g. `"12.50GBP"`.
    #[serde(default)]
    price: Option<String>,
    /// Price already in pence. Takes precedence over `price`.
    #[serde(default)]
    int_price: Option<i64>,
    in_stock_quantity: i64,
}

impl CatalogueEntry {
    /// Normalizes whichever price form the entry carries.
    ///
    /// A negative `int_price` is as unbuildable as a malformed price
    /// string; string prices are non-negative by construction.
    fn normalized_price(&self) -> CoreResult<Money> {
        if let Some(pence) = self.int_price {
            if pence < 0 {
                return Err(CoreError::InvalidPrice {
                    raw: pence.to_string(),
                });
            }
            return Ok(Money::from_pence(pence));
        }
        if let Some(raw) = &self.price {
            return Money::parse(raw);
        }
        Err(CoreError::MissingPrice {
            name: self.name.clone(),
        })
    }
}

// =============================================================================
// Catalogue Product (validated, not yet persisted)
// =============================================================================

/// A validated product description, not yet persisted.
///
/// Identity is assigned by the store at insert time, so there is no id
/// here - this is a value object, not an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueProduct {
    pub name: String,
    pub brand: String,
    pub price: Money,
    pub stock_quantity: i64,
}

/// Parses a static catalogue description into product value objects.
///
/// ## Errors
/// - `CoreError::MalformedCatalogue` when the JSON itself is invalid
/// - `CoreError::MissingPrice` / `CoreError::InvalidPrice` when any
///   entry has no usable price
/// - `CoreError::InvalidStock` when any entry claims a negative stock
///   quantity
///
/// All-or-nothing: the first bad entry fails the whole load, so a
/// partially-built catalogue can never reach the store.
pub fn parse(source: &str) -> CoreResult<Vec<CatalogueProduct>> {
    let entries: Vec<CatalogueEntry> = serde_json::from_str(source)?;

    entries
        .into_iter()
        .map(|entry| {
            let price = entry.normalized_price()?;
            if entry.in_stock_quantity < 0 {
                return Err(CoreError::InvalidStock {
                    name: entry.name,
                    quantity: entry.in_stock_quantity,
                });
            }
            Ok(CatalogueProduct {
                name: entry.name,
                brand: entry.brand,
                price,
                stock_quantity: entry.in_stock_quantity,
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
