use crate::types::MovieId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: MovieId },

    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),
}
