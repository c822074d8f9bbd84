//! # wedlist-core: Pure Business Logic for the Wedding List Organiser
//!
//! This crate is the heart of the system. It contains the domain model
//! and every business rule, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Wedlist Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              Request-handling layer (external)              │   │
//! │  │   list products ─► list gifts ─► purchase ─► report         │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              ★ wedlist-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌─────────────┐  ┌─────────┐ │   │
//! │  │   │  types   │  │  money   │  │  catalogue  │  │  error  │ │   │
//! │  │   │ Product  │  │  Money   │  │   parsing   │  │ domain  │ │   │
//! │  │   │ GiftItem │  │  pence   │  │  (bootstrap)│  │ errors  │ │   │
//! │  │   └──────────┘  └──────────┘  └─────────────┘  └─────────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 wedlist-db (Database Layer)                 │   │
//! │  │          SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, GiftItem, WeddingList, report)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalogue`] - Static catalogue description parsing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every rule is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in pence (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use wedlist_core::money::Money;
//!
//! // Normalize a catalogue price string (never parse to a float!)
//! let price = Money::parse("12.50GBP").unwrap();
//! assert_eq!(price.pence(), 1250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalogue;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use wedlist_core::Money` instead of
// `use wedlist_core::money::Money`

pub use catalogue::CatalogueProduct;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::{GiftItem, Product, WeddingList, WeddingListReport};
