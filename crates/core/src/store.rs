//! Owned, ordered in-memory movie collection.
//!
//! [`MovieStore`] is the only place records are mutated. It keeps insertion
//! order, removes in place on delete, and assigns ids with [`next_id`].
//! Callers that share a store across tasks wrap it in a lock and hold the
//! write guard for the duration of each mutating call.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::movie::{CreateMovie, Movie, UpdateMovie};
use crate::seed::seed_movies;
use crate::types::MovieId;

const ENTITY: &str = "Movie";

/// Next id to assign: one past the current maximum, or `1` when empty.
pub fn next_id(movies: &[Movie]) -> MovieId {
    movies.iter().map(|m| m.id).max().unwrap_or(0) + 1
}

#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the seed records.
    pub fn seeded() -> Self {
        Self::from_movies(seed_movies())
    }

    /// A store holding `movies` in the given order.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every record in current order.
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    /// Records whose genre equals `genre`, ignoring case. May be empty.
    pub fn filter_by_genre(&self, genre: &str) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|m| m.has_genre(genre))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: MovieId) -> Result<&Movie, CoreError> {
        self.movies
            .iter()
            .find(|m| m.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Validate `input`, assign the next id, and append the record.
    pub fn create(&mut self, input: CreateMovie) -> Result<Movie, CoreError> {
        let new = input.validate()?;
        let movie = new.into_movie(next_id(&self.movies));
        self.movies.push(movie.clone());
        Ok(movie)
    }

    /// Merge the JSON object `payload` onto the record with `id`.
    ///
    /// Existence is checked before the payload, so an unknown id is always
    /// `NotFound` even when the payload is empty. Only an object with no keys
    /// is rejected as empty.
    pub fn update(
        &mut self,
        id: MovieId,
        payload: Map<String, Value>,
    ) -> Result<Movie, CoreError> {
        let index = self.position(id)?;
        let input = UpdateMovie::from_object(payload)?;
        let movie = &mut self.movies[index];
        input.apply_to(movie);
        Ok(movie.clone())
    }

    /// Remove the record with `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: MovieId) -> Result<Movie, CoreError> {
        let index = self.position(id)?;
        Ok(self.movies.remove(index))
    }

    /// Index of the record with `id`.
    pub fn position(&self, id: MovieId) -> Result<usize, CoreError> {
        self.movies
            .iter()
            .position(|m| m.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }
}
