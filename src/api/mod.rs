// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API
//!
//! Exposes the question service and the chat command layer over HTTP.

pub mod handlers;
pub mod http_server;
pub mod types;

pub use http_server::{create_router, start_server, ApiConfig, AppState};
pub use types::{
    CategoryQuery, CommandRequest, CommandResponse, HealthResponse, QuestionListResponse,
    RandomQuestionResponse, RefreshResponse,
};
