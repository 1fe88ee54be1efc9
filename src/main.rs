// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use std::{env, sync::Arc};
use tokio::signal;
use tracing::{info, warn};
use truthbot::{
    api::{start_server, ApiConfig, AppState},
    questions::{QuestionConfig, QuestionService},
    version,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting {} {}", version::BOT_NAME, version::VERSION);

    let config = QuestionConfig::from_env();
    info!(
        "Question cache: {}s freshness, {}s fetch timeout, {} per source",
        config.cache_duration_secs, config.request_timeout_secs, config.extraction.max_per_source
    );

    let service = Arc::new(QuestionService::new(config).context("invalid question configuration")?);
    let state = AppState::new(service.clone());

    let result = start_server(ApiConfig::from_env(), state, shutdown_signal()).await;

    service.close();
    info!("Shutdown complete");

    result
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
