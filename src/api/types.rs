// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! API request and response types

use serde::{Deserialize, Serialize};

use crate::commands::Reply;
use crate::questions::{Category, QuestionError};

/// Optional `?category=` query parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    /// Parse the category, treating a blank value as absent
    pub fn parse(&self) -> Result<Option<Category>, QuestionError> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name.parse().map(Some),
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub activity: String,
}

/// Response body for GET /v1/questions/random
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomQuestionResponse {
    pub question: String,
    pub category: Category,
}

/// Response body for GET /v1/questions/{category}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub category: Category,
    pub count: usize,
    pub questions: Vec<String>,
}

/// Response body for POST /v1/cache/refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub refreshed: Vec<Category>,
}

/// Request body for POST /v1/commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Raw message text, e.g. `!truth`
    pub content: String,
    /// Display name used in reply footers
    #[serde(default = "default_author")]
    pub author: String,
}

fn default_author() -> String {
    "anonymous".to_string()
}

/// Response body for POST /v1/commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// `None` when the message was not a command
    pub reply: Option<Reply>,
}
