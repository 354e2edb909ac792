//! Request/response types for the movies API.

pub mod movies;
