/// Movie identifiers are plain integers assigned by the store.
pub type MovieId = i64;
