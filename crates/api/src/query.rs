//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/movies/filter` (`?genre=`).
///
/// `genre` stays optional here so the handler can report a missing value
/// as a JSON 400 instead of axum's plain-text query rejection.
#[derive(Debug, Deserialize)]
pub struct GenreFilterParams {
    pub genre: Option<String>,
}
