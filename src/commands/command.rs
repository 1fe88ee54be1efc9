// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat command parsing

use crate::questions::Category;

/// Default command prefix
pub const DEFAULT_PREFIX: &str = "!";

/// A recognised chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Question from a fixed category
    Question(Category),
    /// Question from a random category
    Random,
    /// Cache status
    Stats,
    /// Clear every cached category
    Refresh,
    /// Help text
    Info,
    /// Prefixed but not a known command name
    Unknown(String),
}

impl Command {
    /// Parse message text; `None` when the text is not addressed to the bot
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        let rest = content.trim_start().strip_prefix(prefix)?;
        let name = rest.split_whitespace().next().unwrap_or("");

        let command = match name {
            "truth" => Self::Question(Category::Truth),
            "dare" => Self::Question(Category::Dare),
            "would_you_rather" => Self::Question(Category::WouldYouRather),
            "random" => Self::Random,
            "stats" => Self::Stats,
            "refresh" => Self::Refresh,
            "info" => Self::Info,
            other => Self::Unknown(other.to_string()),
        };

        Some(command)
    }
}
