//! # Database Error Types
//!
//! Error types for database operations, and the unified error the
//! service facade exposes.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← Adds context and categorization            │
//! │       │                                                             │
//! │       │      CoreError (wedlist-core) ← OutOfStock, UnknownGift...  │
//! │       │           │                                                 │
//! │       ▼           ▼                                                 │
//! │  WeddingListError ← What the request layer consumes                 │
//! │                                                                     │
//! │  Domain conditions stay distinct end to end; the request layer      │
//! │  can match on them without string inspection.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use wedlist_core::CoreError;

// =============================================================================
// Db Error
// =============================================================================

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context for
/// debugging and user feedback.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a gift row referencing a non-existent product id
    #[error("foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = std::result::Result<T, DbError>;

// =============================================================================
// Unified Error
// =============================================================================

/// The error type the repositories and service facade surface.
///
/// Domain conditions (out of stock, unknown product/gift, catalogue
/// construction failures) and store failures stay distinguishable; the
/// request layer maps `Domain` to client-correctable responses and
/// `Store` to operational failures.
#[derive(Debug, Error)]
pub enum WeddingListError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] DbError),
}

impl WeddingListError {
    /// Convenience predicate for the most common caller question.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, WeddingListError::Domain(CoreError::OutOfStock { .. }))
    }
}

impl From<sqlx::Error> for WeddingListError {
    fn from(err: sqlx::Error) -> Self {
        WeddingListError::Store(err.into())
    }
}

/// Result type for operations that can fail on either side.
pub type Result<T> = std::result::Result<T, WeddingListError>;

// =============================================================================
// Unit Tests
// =============================================================================
