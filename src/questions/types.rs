// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for question acquisition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Question category served by the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Truth,
    Dare,
    WouldYouRather,
}

impl Category {
    /// Every configured category, in display order
    pub const ALL: [Category; 3] = [Category::Truth, Category::Dare, Category::WouldYouRather];

    /// Stable identifier used in commands, URLs and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Truth => "truth",
            Self::Dare => "dare",
            Self::WouldYouRather => "would_you_rather",
        }
    }

    /// Human readable name ("Would You Rather")
    pub fn title(&self) -> &'static str {
        match self {
            Self::Truth => "Truth",
            Self::Dare => "Dare",
            Self::WouldYouRather => "Would You Rather",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "truth" => Ok(Self::Truth),
            "dare" => Ok(Self::Dare),
            "would_you_rather" | "wyr" => Ok(Self::WouldYouRather),
            other => Err(QuestionError::UnknownCategory(other.to_string())),
        }
    }
}

/// Per-category cache status, as reported by `cache_info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheInfo {
    /// Number of questions held for the category
    pub question_count: usize,
    /// Age of the entry in whole minutes
    pub cache_age_minutes: u64,
    /// Whether the entry is still inside the freshness window
    pub is_fresh: bool,
    /// Wall-clock time of the last refresh
    pub refreshed_at: DateTime<Utc>,
}

/// A randomly drawn question together with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedQuestion {
    pub question: String,
    pub category: Category,
}

/// Errors surfaced by the question subsystem outside the fetch path
#[derive(Debug, Error)]
pub enum QuestionError {
    /// Category name does not match any configured category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Configuration failed startup validation
    #[error("Invalid question configuration: {0}")]
    InvalidConfig(String),
}
