//! # Catalogue Bootstrap
//!
//! One-time import of the static product catalogue into an otherwise
//! empty store.
//!
//! ## Import Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Bootstrap Decision                              │
//! │                                                                     │
//! │  import_catalogue(db, source)                                       │
//! │       │                                                             │
//! │       ├── products table already populated?                         │
//! │       │        └── yes → skip entirely (import must not run)        │
//! │       │                                                             │
//! │       ├── parse the whole description list                          │
//! │       │        └── any bad entry → abort, nothing inserted          │
//! │       │                                                             │
//! │       └── insert every validated product in one transaction, in     │
//! │           description order, so store identities follow catalogue   │
//! │           positions (1..N)                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use crate::error::Result;
use crate::pool::Database;
use wedlist_core::catalogue;

/// The catalogue shipped with the organiser: twenty gift descriptions,
/// embedded at compile time so bootstrap needs no runtime file access.
pub const DEFAULT_CATALOGUE: &str = include_str!("../catalogue/products.json");

/// Imports a catalogue description into an empty store.
///
/// Returns the number of products inserted; zero means the store
/// already had products and the import did not run.
///
/// ## Errors
/// Construction errors (`InvalidPrice`, `MissingPrice`,
/// `MalformedCatalogue`) abort before any insert - a partial catalogue
/// can never reach the store.
pub async fn import_catalogue(db: &Database, source: &str) -> Result<usize> {
    let existing = db.products().count().await?;
    if existing > 0 {
        warn!(existing, "Store already has products, skipping catalogue import");
        return Ok(0);
    }

    // Validate the whole catalogue before touching the store.
    let products = catalogue::parse(source)?;

    info!(count = products.len(), "Importing catalogue");

    // Single transaction: an insert failure rolls the whole batch back.
    db.products().insert_all(&products).await?;

    info!("Catalogue import complete");
    Ok(products.len())
}

// =============================================================================
// Unit Tests
// =============================================================================
