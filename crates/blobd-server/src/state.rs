use std::sync::Arc;

use blobd_store::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state passed to all route handlers.
///
/// The store is an explicitly constructed trait object injected here — never
/// a process-wide singleton — so tests get isolated instances and the
/// backend can be swapped without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Create application state from a configuration and a store backend.
    pub fn new(config: ServerConfig, store: Arc<dyn ObjectStore>) -> Self {
        Self { config, store }
    }
}
