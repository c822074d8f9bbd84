//! # Error Types
//!
//! Domain-specific error types for wedlist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  wedlist-core errors (this file)                                    │
//! │  └── CoreError        - Domain rule violations                      │
//! │                                                                     │
//! │  wedlist-db errors (separate crate)                                 │
//! │  ├── DbError          - Database operation failures                 │
//! │  └── WeddingListError - Domain ∪ Store, what callers consume        │
//! │                                                                     │
//! │  Flow: CoreError ──┐                                                │
//! │                    ├──► WeddingListError ──► request layer          │
//! │        DbError  ───┘                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, gift id, raw price)
//! 3. Errors are enum variants, never String
//! 4. Each variant is a distinct, identifiable condition - the request
//!    layer must be able to tell OutOfStock from UnknownGift without
//!    string matching

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic
/// failures. They are surfaced to the caller as-is, never swallowed or
/// collapsed into a generic failure.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A purchase was attempted on a product with no remaining stock.
    ///
    /// ## When This Occurs
    /// - `Product::take_one_from_stock` is called at quantity zero
    /// - A guarded decrement in the store affects no rows (a concurrent
    ///   purchaser took the last unit)
    ///
    /// Recoverable: the caller can pick a different gift.
    #[error("product {product_id} ('{name}') is out of stock")]
    OutOfStock { product_id: i64, name: String },

    /// A product identity could not be resolved in the store.
    ///
    /// ## When This Occurs
    /// - A lookup by id matches no row
    /// - A gift row references a product that no longer exists
    ///   (referential-integrity breach, surfaced rather than hidden)
    #[error("unknown product: {0}")]
    UnknownProduct(i64),

    /// A gift identity could not be resolved in the store.
    #[error("unknown gift: {0}")]
    UnknownGift(i64),

    /// A gift identity is not a member of the wedding list aggregate.
    ///
    /// Raised by the aggregate's own lookup; never a silent no-op.
    #[error("gift {0} is not in the wedding list")]
    GiftNotInList(i64),

    /// A catalogue price string could not be normalized.
    ///
    /// Fatal to bootstrap: the catalogue import must abort before any
    /// entity is built from the offending description.
    #[error("unparseable price: '{raw}'")]
    InvalidPrice { raw: String },

    /// A catalogue description carries neither price form.
    ///
    /// The accepted forms are an integer minor-unit value or a
    /// `<whole>.<two-digits><CURRENCY>` string.
    #[error("catalogue entry '{name}' is missing a price")]
    MissingPrice { name: String },

    /// A catalogue description carries a negative stock quantity.
    ///
    /// Stock can never be negative, so the description is unbuildable
    /// and the import must abort.
    #[error("catalogue entry '{name}' has a negative stock quantity ({quantity})")]
    InvalidStock { name: String, quantity: i64 },

    /// The catalogue description list itself is malformed.
    #[error("malformed catalogue: {0}")]
    MalformedCatalogue(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            product_id: 7,
            name: "Tea pot".to_string(),
        };
        assert_eq!(err.to_string(), "product 7 ('Tea pot') is out of stock");

        let err = CoreError::UnknownProduct(42);
        assert_eq!(err.to_string(), "unknown product: 42");

        let err = CoreError::InvalidPrice {
            raw: "cheap".to_string(),
        };
        assert_eq!(err.to_string(), "unparseable price: 'cheap'");
    }

    #[test]
    fn test_serde_error_converts_to_core_error() {
        let parse_err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let core_err: CoreError = parse_err.into();
        assert!(matches!(core_err, CoreError::MalformedCatalogue(_)));
    }
}
