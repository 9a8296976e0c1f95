//! Handlers for the movie collection.
//!
//! Each handler takes the store lock once and performs its whole operation
//! under that guard, so every request is a single atomic step.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::CreateMovie;
use movies_core::types::MovieId;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::query::GenreFilterParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/movies
///
/// Full collection in current order.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = state.movies.read().await;

    tracing::info!(count = movies.len(), "Listing movies");

    Ok(Json(movies.list().to_vec()))
}

/// GET /api/movies/filter?genre=
///
/// Case-insensitive full-string genre match. No matches is an empty array,
/// not an error.
pub async fn filter_movies(
    State(state): State<AppState>,
    params: Result<Query<GenreFilterParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let genre = params
        .genre
        .filter(|g| !g.is_empty())
        .ok_or(CoreError::MissingParameter("genre"))?;

    let matches = state.movies.read().await.filter_by_genre(&genre);

    tracing::info!(genre = %genre, count = matches.len(), "Filtered movies by genre");

    Ok(Json(matches))
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_movie_id(&raw_id)?;

    let movies = state.movies.read().await;
    let movie = movies.get(id)?.clone();

    tracing::info!(movie_id = id, "Fetched movie");

    Ok(Json(movie))
}

/// POST /api/movies
///
/// All four fields are required; the id is assigned by the store.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<CreateMovie>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    let movie = state.movies.write().await.create(input)?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/movies/{id}
///
/// Shallow merge of the supplied fields. An unknown id is reported before
/// anything about the payload, including a malformed one. The body must be a
/// JSON object with at least one key; keys that are not movie fields are
/// accepted and leave the record unchanged.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_movie_id(&raw_id)?;

    let mut movies = state.movies.write().await;
    movies.position(id)?;

    let Json(input) = payload?;
    let movie = movies.update(id, input)?;

    tracing::info!(movie_id = id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_movie_id(&raw_id)?;

    let removed = state.movies.write().await.delete(id)?;

    tracing::info!(movie_id = id, title = %removed.title, "Movie deleted");

    Ok(Json(MessageResponse::new("Movie deleted successfully.")))
}

/// A path segment that is not an integer cannot name a movie.
fn parse_movie_id(raw: &str) -> AppResult<MovieId> {
    raw.parse()
        .map_err(|_| AppError::NotFound("Movie not found.".into()))
}
