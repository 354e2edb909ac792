//! Storage error types for movies-storage.
//!
//! [`StorageError`] covers all anticipated failure modes in the storage
//! layer: underlying SQLite failures, migration failures, lookup misses,
//! and rejected writes.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An underlying SQLite operation failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A movie with the given ID (or matching the given query) was not found.
    #[error("movie not found: {0}")]
    MovieNotFound(i64),

    /// No movie matched a title query.
    #[error("no movie with title: {0}")]
    TitleNotFound(String),

    /// The store rejected a write (e.g. duplicate title).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}
