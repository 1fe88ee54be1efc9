// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring

use axum::{
    routing::{get, post},
    Router,
};
use std::env;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{
    cache_info_handler, command_handler, health_handler, question_list_handler,
    random_question_handler, refresh_handler,
};
use crate::commands::CommandHandler;
use crate::questions::QuestionService;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QuestionService>,
    pub commands: Arc<CommandHandler>,
}

impl AppState {
    pub fn new(service: Arc<QuestionService>) -> Self {
        Self {
            commands: Arc::new(CommandHandler::new(service.clone())),
            service,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host (default: 127.0.0.1)
    pub host: String,
    /// Bind port (default: 8080)
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("API_HOST").unwrap_or(defaults.host),
            port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Questions
        .route("/v1/questions/random", get(random_question_handler))
        .route("/v1/questions/:category", get(question_list_handler))
        // Cache control
        .route("/v1/cache", get(cache_info_handler))
        .route("/v1/cache/refresh", post(refresh_handler))
        // Chat commands
        .route("/v1/commands", post(command_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serve the API until `shutdown` resolves
pub async fn start_server<F>(config: ApiConfig, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
