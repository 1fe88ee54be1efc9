// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP source fetching
//!
//! Downloads raw markup from question source pages over a single shared
//! connection pool.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::config::QuestionConfig;

/// Source fetch error types
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Request exceeded the per-fetch timeout
    #[error("Timeout fetching: {url}")]
    Timeout { url: String },

    /// Transport-level failure (DNS, connect, body read)
    #[error("HTTP error for {url}: {message}")]
    Http { url: String, message: String },

    /// Server answered with something other than 200
    #[error("HTTP {status} for: {url}")]
    Status { status: u16, url: String },

    /// Fetch attempted after `close()`
    #[error("HTTP client has been closed")]
    ClientClosed,

    /// HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

/// Trait for anything that can turn a source URL into raw markup
///
/// The category cache only depends on this trait, so tests and alternate
/// transports can stand in for the HTTP implementation.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Fetch the raw body of `url`
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;

    /// Release any held network resources
    fn close(&self) {}
}

enum ClientState {
    Idle,
    Open(Client),
    Closed,
}

/// Source fetcher backed by a lazily created `reqwest` client
pub struct HttpFetcher {
    state: Mutex<ClientState>,
    timeout: Duration,
    user_agent: String,
}

impl HttpFetcher {
    /// Create a fetcher; no connection pool exists until the first fetch
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(ClientState::Idle),
            timeout,
            user_agent: user_agent.into(),
        }
    }

    /// Create a fetcher from question configuration
    pub fn from_config(config: &QuestionConfig) -> Self {
        Self::new(config.request_timeout(), config.user_agent.clone())
    }

    /// Whether the underlying client has been created and not yet closed
    pub fn is_open(&self) -> bool {
        matches!(
            self.state.lock().as_deref(),
            Ok(ClientState::Open(_))
        )
    }

    /// Get the shared client, creating it on first use
    fn client(&self) -> Result<Client, FetchError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| FetchError::Client("client state lock poisoned".to_string()))?;

        match &*state {
            ClientState::Open(client) => Ok(client.clone()),
            ClientState::Closed => Err(FetchError::ClientClosed),
            ClientState::Idle => {
                let client = Client::builder()
                    .timeout(self.timeout)
                    .user_agent(self.user_agent.clone())
                    .redirect(reqwest::redirect::Policy::limited(5))
                    .build()
                    .map_err(|e| FetchError::Client(e.to_string()))?;
                debug!("Created shared HTTP client (timeout {:?})", self.timeout);
                *state = ClientState::Open(client.clone());
                Ok(client)
            }
        }
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let client = self.client()?;

        debug!("Fetching questions from: {}", url);

        let response = client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Http {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Http {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn close(&self) {
        if let Ok(mut state) = self.state.lock() {
            if matches!(*state, ClientState::Open(_)) {
                debug!("Closing shared HTTP client");
            }
            *state = ClientState::Closed;
        }
    }
}
