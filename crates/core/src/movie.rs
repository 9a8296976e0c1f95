//! Movie entity and the request payloads that create or modify it.
//!
//! Payload fields are all optional at the wire level: presence is checked
//! here rather than by the deserializer so callers get a message naming the
//! missing fields instead of a parse failure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::MovieId;

/// Fields a create payload must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "genre", "year", "director"];

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A single record in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub director: String,
}

impl Movie {
    /// Full-string, case-insensitive genre comparison.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a movie. The id is always assigned by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMovie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
}

/// A create payload that passed presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub director: String,
}

impl NewMovie {
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            genre: self.genre,
            year: self.year,
            director: self.director,
        }
    }
}

impl CreateMovie {
    /// Check that every required field is present and non-falsy.
    ///
    /// Empty strings and a `0` year count as missing. The error message
    /// lists every missing field, not just the first.
    pub fn validate(self) -> Result<NewMovie, CoreError> {
        let title = non_empty(self.title);
        let genre = non_empty(self.genre);
        let year = self.year.filter(|y| *y != 0);
        let director = non_empty(self.director);

        match (title, genre, year, director) {
            (Some(title), Some(genre), Some(year), Some(director)) => Ok(NewMovie {
                title,
                genre,
                year,
                director,
            }),
            (title, genre, year, director) => {
                let present = [
                    title.is_some(),
                    genre.is_some(),
                    year.is_some(),
                    director.is_some(),
                ];
                let missing: Vec<&str> = REQUIRED_FIELDS
                    .iter()
                    .zip(present)
                    .filter(|(_, ok)| !ok)
                    .map(|(name, _)| *name)
                    .collect();
                Err(CoreError::Validation(format!(
                    "All fields (title, genre, year, director) are required. Missing: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// DTO for partially updating a movie.
///
/// An `id` key in the payload is not a field here and is dropped during
/// deserialization, so a record's id can never change through an update.
/// Other unknown keys and `null` values are dropped the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
}

impl UpdateMovie {
    /// Build a patch from a raw JSON object payload.
    ///
    /// Only an object with no keys at all is empty. An object whose keys are
    /// all unknown (or `id`) is a valid patch that changes nothing.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, CoreError> {
        if object.is_empty() {
            return Err(CoreError::Validation(
                "Request body cannot be empty for update.".into(),
            ));
        }
        serde_json::from_value(Value::Object(object))
            .map_err(|e| CoreError::Validation(format!("Invalid update payload: {e}")))
    }

    /// Shallow merge: only the supplied fields overwrite the record.
    pub fn apply_to(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
