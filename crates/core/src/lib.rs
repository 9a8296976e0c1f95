//! Domain layer for the movie collection service.
//!
//! Holds the [`movie::Movie`] entity and its request DTOs, the owned
//! [`store::MovieStore`] with the id-assignment policy, the seed data, and
//! the [`error::CoreError`] taxonomy. Nothing here knows about HTTP.

pub mod error;
pub mod movie;
pub mod seed;
pub mod store;
pub mod types;
