//! SQLite implementation of [`MovieStore`].
//!
//! [`SqliteStore`] persists movie records in a SQLite database with WAL mode
//! and automatic schema migrations. Each write is a single statement, which
//! SQLite executes in its own implicit transaction.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StorageError;
use crate::traits::MovieStore;
use crate::types::{Movie, MovieId, NewMovie};

/// SQLite-backed implementation of [`MovieStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    /// Maps a movies table row to a [`Movie`].
    fn row_to_movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
        Ok(Movie {
            id: MovieId(row.get(0)?),
            title: row.get(1)?,
            country: row.get(2)?,
            description: row.get(3)?,
            director: row.get(4)?,
        })
    }

    /// Distinguishes constraint violations from other SQLite failures so
    /// rejected writes surface as [`StorageError::ConstraintViolation`].
    fn map_write_err(err: rusqlite::Error) -> StorageError {
        if let rusqlite::Error::SqliteFailure(e, _) = &err {
            if e.code == rusqlite::ErrorCode::ConstraintViolation {
                return StorageError::ConstraintViolation(err.to_string());
            }
        }
        StorageError::Sqlite(err)
    }
}

impl MovieStore for SqliteStore {
    fn insert(&mut self, movie: &NewMovie) -> Result<MovieId, StorageError> {
        self.conn
            .execute(
                "INSERT INTO movies (title, country, description, director)
                 VALUES (?1, ?2, ?3, ?4)",
                params![movie.title, movie.country, movie.description, movie.director],
            )
            .map_err(Self::map_write_err)?;
        Ok(MovieId(self.conn.last_insert_rowid()))
    }

    fn get(&self, id: MovieId) -> Result<Movie, StorageError> {
        self.conn
            .query_row(
                "SELECT id, title, country, description, director
                 FROM movies WHERE id = ?1",
                params![id.0],
                Self::row_to_movie,
            )
            .optional()?
            .ok_or(StorageError::MovieNotFound(id.0))
    }

    fn find_by_title(&self, title: &str) -> Result<Movie, StorageError> {
        self.conn
            .query_row(
                "SELECT id, title, country, description, director
                 FROM movies WHERE title = ?1",
                params![title],
                Self::row_to_movie,
            )
            .optional()?
            .ok_or_else(|| StorageError::TitleNotFound(title.to_string()))
    }

    fn find_by_country(&self, country: &str) -> Result<Vec<Movie>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, title, country, description, director
             FROM movies WHERE country = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![country], Self::row_to_movie)?;
        let movies = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(movies)
    }

    fn list(&self) -> Result<Vec<Movie>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, title, country, description, director
             FROM movies ORDER BY id",
        )?;
        let rows = stmt.query_map([], Self::row_to_movie)?;
        let movies = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(movies)
    }

    fn update_title(&mut self, id: MovieId, title: &str) -> Result<Movie, StorageError> {
        let changed = self
            .conn
            .execute(
                "UPDATE movies SET title = ?1 WHERE id = ?2",
                params![title, id.0],
            )
            .map_err(Self::map_write_err)?;
        if changed == 0 {
            return Err(StorageError::MovieNotFound(id.0));
        }
        self.get(id)
    }

    fn delete(&mut self, id: MovieId) -> Result<(), StorageError> {
        let changed = self
            .conn
            .execute("DELETE FROM movies WHERE id = ?1", params![id.0])?;
        if changed == 0 {
            return Err(StorageError::MovieNotFound(id.0));
        }
        Ok(())
    }
}
