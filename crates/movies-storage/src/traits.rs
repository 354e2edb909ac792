//! The [`MovieStore`] trait defining the storage contract for movie records.
//!
//! All backends (InMemoryStore, SqliteStore, etc.) implement this trait,
//! ensuring they are fully swappable without changing the HTTP layer.

use crate::error::StorageError;
use crate::types::{Movie, MovieId, NewMovie};

/// The storage contract for movie records.
///
/// The trait is synchronous (not async): every operation is a single
/// statement against the store, and the server serializes access behind an
/// async-aware mutex.
///
/// Lookup misses are reported as errors ([`StorageError::MovieNotFound`] /
/// [`StorageError::TitleNotFound`]) rather than `Option`, so callers can
/// propagate them with `?` straight into the HTTP status mapping.
pub trait MovieStore {
    /// Persists a new movie and returns the store-assigned id.
    ///
    /// A write the store rejects (duplicate title) yields
    /// [`StorageError::ConstraintViolation`]; no separate existence
    /// re-check is needed after a successful return.
    fn insert(&mut self, movie: &NewMovie) -> Result<MovieId, StorageError>;

    /// Retrieves a movie by id.
    fn get(&self, id: MovieId) -> Result<Movie, StorageError>;

    /// Retrieves the movie with exactly this title.
    ///
    /// At most one row can match: the schema enforces title uniqueness.
    fn find_by_title(&self, title: &str) -> Result<Movie, StorageError>;

    /// Retrieves all movies from the given country, ordered by id.
    /// The result may be empty.
    fn find_by_country(&self, country: &str) -> Result<Vec<Movie>, StorageError>;

    /// Lists all stored movies, ordered by id.
    fn list(&self) -> Result<Vec<Movie>, StorageError>;

    /// Applies a new title to an existing movie and returns the updated
    /// record.
    ///
    /// If no movie has this id, nothing is mutated and
    /// [`StorageError::MovieNotFound`] is returned.
    fn update_title(&mut self, id: MovieId, title: &str) -> Result<Movie, StorageError>;

    /// Removes a movie by id, or [`StorageError::MovieNotFound`] if absent.
    fn delete(&mut self, id: MovieId) -> Result<(), StorageError>;
}
