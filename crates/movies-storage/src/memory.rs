//! In-memory implementation of [`MovieStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral use.
//! It stores rows in a HashMap with identical semantics to the SQLite
//! backend, including title uniqueness.

use std::collections::HashMap;

use crate::error::StorageError;
use crate::traits::MovieStore;
use crate::types::{Movie, MovieId, NewMovie};

/// In-memory backend with SQLite-equivalent semantics.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    movies: HashMap<MovieId, Movie>,
    /// Mirrors AUTOINCREMENT: ids are never reused after a delete.
    next_id: i64,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// True if any row other than `except` already carries `title`.
    fn title_taken(&self, title: &str, except: Option<MovieId>) -> bool {
        self.movies
            .values()
            .any(|m| m.title == title && Some(m.id) != except)
    }
}

impl MovieStore for InMemoryStore {
    fn insert(&mut self, movie: &NewMovie) -> Result<MovieId, StorageError> {
        if self.title_taken(&movie.title, None) {
            return Err(StorageError::ConstraintViolation(format!(
                "UNIQUE constraint failed: movies.title ({})",
                movie.title
            )));
        }
        self.next_id += 1;
        let id = MovieId(self.next_id);
        self.movies.insert(
            id,
            Movie {
                id,
                title: movie.title.clone(),
                country: movie.country.clone(),
                description: movie.description.clone(),
                director: movie.director.clone(),
            },
        );
        Ok(id)
    }

    fn get(&self, id: MovieId) -> Result<Movie, StorageError> {
        self.movies
            .get(&id)
            .cloned()
            .ok_or(StorageError::MovieNotFound(id.0))
    }

    fn find_by_title(&self, title: &str) -> Result<Movie, StorageError> {
        self.movies
            .values()
            .find(|m| m.title == title)
            .cloned()
            .ok_or_else(|| StorageError::TitleNotFound(title.to_string()))
    }

    fn find_by_country(&self, country: &str) -> Result<Vec<Movie>, StorageError> {
        let mut movies: Vec<Movie> = self
            .movies
            .values()
            .filter(|m| m.country == country)
            .cloned()
            .collect();
        movies.sort_by_key(|m| m.id.0);
        Ok(movies)
    }

    fn list(&self) -> Result<Vec<Movie>, StorageError> {
        let mut movies: Vec<Movie> = self.movies.values().cloned().collect();
        movies.sort_by_key(|m| m.id.0);
        Ok(movies)
    }

    fn update_title(&mut self, id: MovieId, title: &str) -> Result<Movie, StorageError> {
        if !self.movies.contains_key(&id) {
            return Err(StorageError::MovieNotFound(id.0));
        }
        if self.title_taken(title, Some(id)) {
            return Err(StorageError::ConstraintViolation(format!(
                "UNIQUE constraint failed: movies.title ({})",
                title
            )));
        }
        let movie = self
            .movies
            .get_mut(&id)
            .ok_or(StorageError::MovieNotFound(id.0))?;
        movie.title = title.to_string();
        Ok(movie.clone())
    }

    fn delete(&mut self, id: MovieId) -> Result<(), StorageError> {
        self.movies
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::MovieNotFound(id.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str, country: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            country: country.to_string(),
            description: format!("about {}", title),
            director: "Someone".to_string(),
        }
    }

    #[test]
    fn test_insert_then_get_roundtrip() {
        let mut store = InMemoryStore::new();
        let id = store.insert(&sample("Dune", "US")).unwrap();

        let movie = store.get(id).unwrap();
        assert_eq!(movie.id, id);
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.country, "US");
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = InMemoryStore::new();
        let first = store.insert(&sample("First", "FR")).unwrap();
        store.delete(first).unwrap();
        let second = store.insert(&sample("Second", "FR")).unwrap();
        assert!(second.0 > first.0);
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let mut store = InMemoryStore::new();
        store.insert(&sample("Same", "FR")).unwrap();
        let err = store.insert(&sample("Same", "DE")).unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_title() {
        let mut store = InMemoryStore::new();
        store.insert(&sample("Alien", "US")).unwrap();
        store.insert(&sample("Solaris", "RU")).unwrap();

        assert_eq!(store.find_by_title("Solaris").unwrap().country, "RU");
        assert!(matches!(
            store.find_by_title("Stalker").unwrap_err(),
            StorageError::TitleNotFound(_)
        ));
    }

    #[test]
    fn test_find_by_country_exact_matches_only() {
        let mut store = InMemoryStore::new();
        let a = store.insert(&sample("A", "Planet")).unwrap();
        let b = store.insert(&sample("B", "Planet")).unwrap();
        store.insert(&sample("C", "Mars")).unwrap();

        let planet = store.find_by_country("Planet").unwrap();
        assert_eq!(planet.iter().map(|m| m.id).collect::<Vec<_>>(), vec![a, b]);
        assert!(store.find_by_country("Venus").unwrap().is_empty());
    }

    #[test]
    fn test_list_ordered_by_id() {
        let mut store = InMemoryStore::new();
        let ids: Vec<MovieId> = ["Z", "M", "A"]
            .iter()
            .map(|t| store.insert(&sample(t, "FR")).unwrap())
            .collect();

        let listed: Vec<MovieId> = store.list().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_update_title_changes_only_title() {
        let mut store = InMemoryStore::new();
        let id = store.insert(&sample("Before", "JP")).unwrap();

        let updated = store.update_title(id, "After").unwrap();
        assert_eq!(updated.title, "After");
        assert_eq!(updated.country, "JP");
        assert_eq!(store.get(id).unwrap().title, "After");
    }

    #[test]
    fn test_update_missing_id_mutates_nothing() {
        let mut store = InMemoryStore::new();
        store.insert(&sample("Only", "FR")).unwrap();

        let err = store.update_title(MovieId(99), "New").unwrap_err();
        assert!(matches!(err, StorageError::MovieNotFound(99)));
        assert_eq!(store.list().unwrap()[0].title, "Only");
    }

    #[test]
    fn test_delete_then_get_misses() {
        let mut store = InMemoryStore::new();
        let id = store.insert(&sample("Gone", "FR")).unwrap();

        store.delete(id).unwrap();
        assert!(matches!(
            store.get(id).unwrap_err(),
            StorageError::MovieNotFound(_)
        ));
        assert!(matches!(
            store.delete(id).unwrap_err(),
            StorageError::MovieNotFound(_)
        ));
    }
}
