//! Movie request/response types.
//!
//! [`MovieView`] is the JSON shape of a movie on the wire; the request types
//! carry the same fields minus `id` (an `id` key in a request body is ignored
//! by serde's unknown-field handling).

use movies_storage::{Movie, MovieId, NewMovie};
use serde::{Deserialize, Serialize};

/// A movie as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct MovieView {
    /// Store-assigned identifier.
    pub id: MovieId,
    /// Title.
    pub title: String,
    /// Country of origin.
    pub country: String,
    /// Free-text description.
    pub description: String,
    /// Director name.
    pub director: String,
}

impl From<Movie> for MovieView {
    fn from(movie: Movie) -> Self {
        MovieView {
            id: movie.id,
            title: movie.title,
            country: movie.country,
            description: movie.description,
            director: movie.director,
        }
    }
}

/// Request body for creating a movie. The store assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieRequest {
    /// Title for the new movie.
    pub title: String,
    /// Country of origin.
    pub country: String,
    /// Free-text description.
    pub description: String,
    /// Director name.
    pub director: String,
}

impl From<CreateMovieRequest> for NewMovie {
    fn from(req: CreateMovieRequest) -> Self {
        NewMovie {
            title: req.title,
            country: req.country,
            description: req.description,
            director: req.director,
        }
    }
}

/// Request body for updating a movie.
///
/// Only `title` is applied; the remaining fields are accepted for wire
/// compatibility and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovieRequest {
    /// The new title.
    pub title: String,
    /// Accepted but not applied.
    #[serde(default)]
    pub country: String,
    /// Accepted but not applied.
    #[serde(default)]
    pub description: String,
    /// Accepted but not applied.
    #[serde(default)]
    pub director: String,
}
