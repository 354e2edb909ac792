//! HTTP handler modules for the movies API.
//!
//! Handlers are thin: parse the request, acquire the service lock, delegate
//! to [`MovieService`](crate::service::MovieService), and map the result to
//! a JSON response. No business logic lives here.

pub mod movies;
