//! # wedlist-db: Database Layer for the Wedding List Organiser
//!
//! This crate provides persistence for the wedding list organiser.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Wedlist Data Flow                            │
//! │                                                                     │
//! │  Request-handling layer (external)                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                    wedlist-db (THIS CRATE)                  │   │
//! │  │                                                             │   │
//! │  │   ┌─────────────┐   ┌──────────────┐   ┌───────────────┐   │   │
//! │  │   │  Database   │   │ Repositories │   │  Migrations   │   │   │
//! │  │   │  (pool.rs)  │◄──│ product/gift │   │  (embedded)   │   │   │
//! │  │   └─────────────┘   └──────────────┘   └───────────────┘   │   │
//! │  │          ▲                                                  │   │
//! │  │   ┌──────┴───────────────┐   ┌───────────────────────────┐ │   │
//! │  │   │ WeddingListService   │   │ bootstrap (catalogue)     │ │   │
//! │  │   │ (external operations)│   │ one-time import           │ │   │
//! │  │   └──────────────────────┘   └───────────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite Database (wedlist.db)                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and unified error types
//! - [`repository`] - Repository implementations (product, gift)
//! - [`service`] - The external operation facade
//! - [`bootstrap`] - One-time catalogue import
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wedlist_db::{bootstrap, Database, DbConfig, WeddingListService};
//!
//! let db = Database::new(DbConfig::new("wedlist.db")).await?;
//! bootstrap::import_catalogue(&db, bootstrap::DEFAULT_CATALOGUE).await?;
//!
//! let service = WeddingListService::new(db);
//! let gift_id = service.add_gift(1).await?;
//! service.purchase_gift(gift_id).await?;
//! let report = service.report().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bootstrap;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, WeddingListError};
pub use pool::{Database, DbConfig};
pub use service::WeddingListService;

// Repository re-exports for convenience
pub use repository::gift::GiftRepository;
pub use repository::product::ProductRepository;
