//! API server for the lingraph tools

use anyhow::Result;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

use lingraph_kg::{EntryCatalog, SchemaRegistry};

use crate::config::AppConfig;
use crate::session::SessionStore;

use super::routes::{
    append_token, candidates, clear_chain, clear_history, compose, create_session,
    delete_session, entries, entry_info, get_session, health_check, pop_token, query_text,
    AppState,
};

/// API server
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create a server over an already-loaded catalog
    pub fn new(config: AppConfig, registry: SchemaRegistry, catalog: EntryCatalog) -> Self {
        let state = Arc::new(AppState {
            registry,
            catalog: Arc::new(catalog),
            sessions: Arc::new(RwLock::new(SessionStore::new())),
            config,
        });
        Self { state }
    }

    /// Build the router; exposed separately for tests
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/api/candidates", get(candidates))
            .route("/api/entries", get(entries))
            .route("/api/entries/:name", get(entry_info))
            .route("/api/sessions", post(create_session))
            .route(
                "/api/sessions/:id",
                get(get_session).delete(delete_session),
            )
            .route(
                "/api/sessions/:id/chain",
                post(append_token).delete(clear_chain),
            )
            .route("/api/sessions/:id/chain/last", delete(pop_token))
            .route(
                "/api/sessions/:id/queries/:mode",
                post(compose).get(query_text).delete(clear_history),
            )
            .with_state(self.state.clone())
            .layer(CorsLayer::permissive())
    }

    /// Start the API server
    pub async fn start(self) -> Result<()> {
        let addr = format!("{}:{}", self.state.config.host, self.state.config.port);
        info!("Starting API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}
