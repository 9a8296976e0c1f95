use std::sync::Arc;

use movies_core::store::MovieStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. The store sits behind a single `RwLock`: reads share
/// the lock, and every mutation runs to completion under the write guard.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The movie collection.
    pub movies: Arc<RwLock<MovieStore>>,
}

impl AppState {
    pub fn new(config: ServerConfig, store: MovieStore) -> Self {
        Self {
            config: Arc::new(config),
            movies: Arc::new(RwLock::new(store)),
        }
    }
}
