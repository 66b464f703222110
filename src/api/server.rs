//! HTTP API server

use super::handlers::{create_note, delete_note, get_note, health, list_notes, update_note};
use crate::config::DEFAULT_STATIC_DIR;
use crate::error::Result;
use crate::store::NoteStore;
use axum::{routing::get, Router};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{debug, info};

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Server address
    pub addr: SocketAddr,
    /// Directory with the browser client, served at `/`
    pub static_dir: Option<PathBuf>,
    /// Attach a permissive CORS layer
    pub cors: bool,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            addr: ([127, 0, 0, 1], 3000).into(),
            static_dir: Some(PathBuf::from(DEFAULT_STATIC_DIR)),
            cors: true,
        }
    }
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NoteStore>,
}

/// API server
pub struct ApiServer {
    config: ApiServerConfig,
    store: Arc<NoteStore>,
}

impl ApiServer {
    /// Create a server with a fresh, empty store
    pub fn new(config: ApiServerConfig) -> Self {
        Self::with_store(config, Arc::new(NoteStore::new()))
    }

    /// Create a server around an existing store
    pub fn with_store(config: ApiServerConfig, store: Arc<NoteStore>) -> Self {
        Self { config, store }
    }

    /// Get the note store
    pub fn store(&self) -> &Arc<NoteStore> {
        &self.store
    }

    /// Build router
    pub fn router(&self) -> Router {
        build_router(
            AppState {
                store: self.store.clone(),
            },
            &self.config,
        )
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn serve(self) -> Result<()> {
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;

        info!(
            "Notekeeper listening on http://{}",
            listener.local_addr()?
        );
        if let Some(dir) = &self.config.static_dir {
            info!("Serving client from {}", dir.display());
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Build router
pub fn build_router(state: AppState, config: &ApiServerConfig) -> Router {
    let mut router = Router::new()
        // Notes CRUD
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        // Health check
        .route("/health", get(health))
        // State
        .with_state(state);

    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    // Middleware
    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }
    router.layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        debug!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
