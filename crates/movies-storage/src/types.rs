//! Storage-layer types for movie identity and records.
//!
//! [`MovieId`] lives here because record identity is a storage concern --
//! a movie only gains an ID when persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored movie.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`. Serializes
/// as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(pub i64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovieId({})", self.0)
    }
}

/// A persisted movie record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned identifier, immutable once set.
    pub id: MovieId,
    /// Title. Unique across the store.
    pub title: String,
    /// Country of origin.
    pub country: String,
    /// Free-text description.
    pub description: String,
    /// Director name.
    pub director: String,
}

/// An id-less movie payload for inserts; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    /// Title. Must not collide with an existing record.
    pub title: String,
    /// Country of origin.
    pub country: String,
    /// Free-text description.
    pub description: String,
    /// Director name.
    pub director: String,
}
