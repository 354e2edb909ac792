//! MovieService: the single coordinator between HTTP handlers and the
//! storage backend.
//!
//! All persistence access flows through [`MovieService`]. Handlers are thin
//! wrappers that delegate to these methods. The backend is injected as a
//! [`MovieStore`] trait object at construction, so the service never touches
//! a concrete store type.

use movies_storage::{InMemoryStore, Movie, MovieId, MovieStore, NewMovie, SqliteStore};

use crate::error::ApiError;

/// Coordinates movie CRUD operations against an injected storage backend.
pub struct MovieService {
    store: Box<dyn MovieStore + Send>,
}

impl MovieService {
    /// Creates a service over an explicit storage backend.
    pub fn new(store: Box<dyn MovieStore + Send>) -> Self {
        MovieService { store }
    }

    /// Creates a service backed by a SQLite database at `db_path`.
    pub fn open(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)
            .map_err(|e| ApiError::InternalError(format!("failed to open database: {}", e)))?;
        Ok(MovieService::new(Box::new(store)))
    }

    /// Creates a service backed by an in-memory store (for testing).
    pub fn in_memory() -> Self {
        MovieService::new(Box::new(InMemoryStore::new()))
    }

    /// All stored movies, ordered by id.
    pub fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        Ok(self.store.list()?)
    }

    /// The movie with this id.
    pub fn get_movie(&self, id: MovieId) -> Result<Movie, ApiError> {
        Ok(self.store.get(id)?)
    }

    /// The single movie with exactly this title.
    pub fn movie_by_title(&self, title: &str) -> Result<Movie, ApiError> {
        Ok(self.store.find_by_title(title)?)
    }

    /// All movies from this country, possibly none.
    pub fn movies_by_country(&self, country: &str) -> Result<Vec<Movie>, ApiError> {
        Ok(self.store.find_by_country(country)?)
    }

    /// Persists a new movie and returns its assigned id.
    pub fn create_movie(&mut self, movie: NewMovie) -> Result<MovieId, ApiError> {
        Ok(self.store.insert(&movie)?)
    }

    /// Applies a new title to an existing movie and returns the updated
    /// record.
    pub fn update_title(&mut self, id: MovieId, title: &str) -> Result<Movie, ApiError> {
        Ok(self.store.update_title(id, title)?)
    }

    /// Removes a movie by id.
    pub fn delete_movie(&mut self, id: MovieId) -> Result<(), ApiError> {
        Ok(self.store.delete(id)?)
    }
}
