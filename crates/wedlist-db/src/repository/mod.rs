//! # Repository Module
//!
//! Database repository implementations for the wedding list organiser.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean   │
//! │  API.                                                               │
//! │                                                                     │
//! │  Service / request layer                                            │
//! │       │                                                             │
//! │       │  db.gifts().load_wedding_list()                             │
//! │       ▼                                                             │
//! │  GiftRepository                                                     │
//! │  ├── create(product)                                                │
//! │  ├── load_wedding_list()                                            │
//! │  ├── purchase(&mut gift)                                            │
//! │  └── remove(gift)                                                   │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Domain rules stay in wedlist-core                                │
//! │  • Each operation re-reads store state before acting                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalogue scans, lookup, stock decrement
//! - [`gift::GiftRepository`] - Gift row lifecycle and wedding-list rebuild

pub mod gift;
pub mod product;
