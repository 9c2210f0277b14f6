use std::sync::Arc;

use tokio::net::TcpListener;

use shelf_store::RecordStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// The Shelf HTTP server.
pub struct ShelfServer {
    config: ServerConfig,
    state: AppState,
}

impl ShelfServer {
    /// A server over a fresh in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: AppState::in_memory(),
        }
    }

    /// A server over a caller-provided store backend.
    pub fn with_store(config: ServerConfig, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("shelf server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
