//! Shared response payload types for API handlers.
//!
//! Movie endpoints return the record (or array of records) as the body
//! directly. Confirmation-only endpoints use [`MessageResponse`], which has
//! the same `{ "message": ... }` shape as error bodies.

use serde::Serialize;

/// `{ "message": "..." }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
