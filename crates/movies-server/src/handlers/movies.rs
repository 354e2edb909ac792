//! Movie CRUD handlers (list, get, create, update, delete).

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use movies_storage::MovieId;

use crate::error::ApiError;
use crate::schema::movies::{CreateMovieRequest, MovieView, UpdateMovieRequest};
use crate::state::AppState;

/// Lists all movies.
///
/// `GET /movies`
pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieView>>, ApiError> {
    let service = state.service.lock().await;
    let movies = service.list_movies()?;
    Ok(Json(movies.into_iter().map(MovieView::from).collect()))
}

/// Fetches a movie by id.
///
/// `GET /movies/{id}`
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MovieView>, ApiError> {
    let service = state.service.lock().await;
    let movie = service.get_movie(MovieId(id))?;
    Ok(Json(movie.into()))
}

/// Fetches the movie with exactly this title.
///
/// `GET /movies/title/{title}`
pub async fn get_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<MovieView>, ApiError> {
    let service = state.service.lock().await;
    let movie = service.movie_by_title(&title)?;
    Ok(Json(movie.into()))
}

/// Fetches all movies from a country (possibly none).
///
/// `GET /movies/country/{country}`
pub async fn get_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<Vec<MovieView>>, ApiError> {
    let service = state.service.lock().await;
    let movies = service.movies_by_country(&country)?;
    Ok(Json(movies.into_iter().map(MovieView::from).collect()))
}

/// Creates a movie.
///
/// `POST /movies` -- 201 with a `Location` header pointing at the new
/// record, or 400 if the store rejects the write.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(req): Json<CreateMovieRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut service = state.service.lock().await;
    let id = service.create_movie(req.into())?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/movies/{}", id.0))],
    ))
}

/// Updates a movie by id. Only the title field is applied.
///
/// `PUT /movies/{id}`
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMovieRequest>,
) -> Result<Json<MovieView>, ApiError> {
    let mut service = state.service.lock().await;
    let movie = service.update_title(MovieId(id), &req.title)?;
    Ok(Json(movie.into()))
}

/// Deletes a movie by id.
///
/// `DELETE /movies/{id}` -- 204 on success, 404 if absent.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut service = state.service.lock().await;
    service.delete_movie(MovieId(id))?;
    Ok(StatusCode::NO_CONTENT)
}
