use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::StudentStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Student row store.
    pub store: Arc<StudentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
