use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created at startup and torn down with the
    /// process.
    pub pool: inmovista_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
