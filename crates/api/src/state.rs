use std::sync::Arc;

use scriptbox_core::store::ScriptStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The process-wide script store. Starts empty on every launch.
    pub store: Arc<ScriptStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
