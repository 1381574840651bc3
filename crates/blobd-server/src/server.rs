use std::sync::Arc;

use tokio::net::TcpListener;

use blobd_store::ObjectStore;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;
use crate::state::AppState;

/// The blobd HTTP server: a configuration plus an injected store backend.
pub struct BlobServer {
    config: ServerConfig,
    store: Arc<dyn ObjectStore>,
}

impl BlobServer {
    pub fn new(config: ServerConfig, store: Arc<dyn ObjectStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.config.clone(), Arc::clone(&self.store)))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("blobd listening on {}", self.config.bind_addr);
        axum::serve(listener, app).await?;
        Ok(())
    }
}
