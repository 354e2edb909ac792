//! Application state with a shared `MovieService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` so handlers await the lock without blocking the tokio
//! runtime.
//!
//! Note: `tokio::sync::RwLock` would allow concurrent reads, but the SQLite
//! backend contains `rusqlite::Connection` which is `!Sync`, preventing it
//! from being held behind an `RwLock`. Concurrency discipline beyond this
//! serialization is the store's job.

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::MovieService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared movie service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<MovieService>>,
}

impl AppState {
    /// Creates a new `AppState` with a `MovieService` backed by the given
    /// SQLite database path.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let service = MovieService::open(db_path)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }

    /// Creates a new `AppState` with an in-memory store (for testing).
    pub fn in_memory() -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(MovieService::in_memory())),
        }
    }
}
