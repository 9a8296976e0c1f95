//! Route definitions for the movie collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /                  -> list_movies
/// POST   /                  -> create_movie
/// GET    /filter?genre=     -> filter_movies
/// GET    /{id}              -> get_movie
/// PUT    /{id}              -> update_movie
/// DELETE /{id}              -> delete_movie
/// ```
///
/// `/filter` is a static segment and takes precedence over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route("/filter", get(movies::filter_movies))
        .route(
            "/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
}
