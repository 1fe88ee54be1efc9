// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Command handling
//!
//! Turns parsed commands into replies using the question service.

use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{debug, info};

use super::command::{Command, DEFAULT_PREFIX};
use super::reply::{category_color, Embed, Reply, NEUTRAL_COLOR};
use crate::questions::{Category, QuestionService};
use crate::version::BOT_NAME;

/// Presence texts a chat transport can rotate through
pub const STATUS_MESSAGES: &[&str] = &[
    "!info for commands",
    "Scraping questions...",
    "Truth or Dare?",
    "Would you rather...",
    "Playing with friends",
];

/// Pick a random presence text
pub fn random_status() -> &'static str {
    STATUS_MESSAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Truth or Dare?")
}

/// Executes chat commands against the question service
pub struct CommandHandler {
    service: Arc<QuestionService>,
    prefix: String,
}

impl CommandHandler {
    /// Create a handler using the default `!` prefix
    pub fn new(service: Arc<QuestionService>) -> Self {
        Self::with_prefix(service, DEFAULT_PREFIX)
    }

    /// Create a handler with a custom command prefix
    pub fn with_prefix(service: Arc<QuestionService>, prefix: impl Into<String>) -> Self {
        Self {
            service,
            prefix: prefix.into(),
        }
    }

    /// Handle one message; `None` when the message is not a command
    pub async fn handle_message(&self, content: &str, author: &str) -> Option<Reply> {
        let command = Command::parse(content, &self.prefix)?;
        Some(self.execute(command, author).await)
    }

    /// Execute a parsed command
    pub async fn execute(&self, command: Command, author: &str) -> Reply {
        debug!("Executing {:?} for {}", command, author);

        match command {
            Command::Question(category) => self.question(Some(category), author).await,
            Command::Random => self.question(None, author).await,
            Command::Stats => self.stats(),
            Command::Refresh => self.refresh(author),
            Command::Info => self.info(),
            Command::Unknown(_) => Reply::text(format!(
                "❌ Command not found! Use `{}info` to see available commands.",
                self.prefix
            )),
        }
    }

    async fn question(&self, requested: Option<Category>, author: &str) -> Reply {
        let Some(picked) = self.service.get_random_question(requested).await else {
            let kind = match requested {
                Some(Category::Truth) => "a truth question",
                Some(Category::Dare) => "a dare question",
                Some(Category::WouldYouRather) => "a 'Would You Rather' question",
                None => "a random question",
            };
            return Reply::text(format!(
                "Sorry, I couldn't get {} right now. Try again later!",
                kind
            ));
        };

        let title = match (requested.is_some(), picked.category) {
            (true, Category::Truth) => "🤔 Truth Question",
            (true, Category::Dare) => "🎯 Dare Challenge",
            (true, Category::WouldYouRather) => "🤷 Would You Rather",
            (false, Category::Truth) => "🤔 Random Truth Question",
            (false, Category::Dare) => "🎯 Random Dare Challenge",
            (false, Category::WouldYouRather) => "🤷 Random Would You Rather",
        };

        Embed::new(title, category_color(picked.category))
            .description(picked.question)
            .footer(format!("Requested by {}", author))
            .into()
    }

    fn stats(&self) -> Reply {
        let cache_text: String = self
            .service
            .get_cache_info()
            .iter()
            .map(|(category, info)| {
                let status = if info.is_fresh { "✅ Fresh" } else { "🔄 Stale" };
                format!(
                    "{}: {} questions ({})\n",
                    category.title(),
                    info.question_count,
                    status
                )
            })
            .collect();

        let mut embed = Embed::new("📊 Bot Statistics", NEUTRAL_COLOR);
        if !cache_text.is_empty() {
            embed = embed.field("Cache Status", cache_text, false);
        }
        embed.footer(BOT_NAME).into()
    }

    fn refresh(&self, author: &str) -> Reply {
        self.service.refresh_cache(None);
        info!("Question cache refreshed by {}", author);

        Embed::new("🔄 Cache Refreshed", NEUTRAL_COLOR)
            .description("The question cache has been refreshed!")
            .footer(format!("Requested by {}", author))
            .into()
    }

    fn info(&self) -> Reply {
        let p = &self.prefix;
        let commands = format!(
            "`{p}truth` - Get a random truth question\n\
             `{p}dare` - Get a random dare challenge\n\
             `{p}would_you_rather` - Get a random \"Would You Rather\" question\n\
             `{p}random` - Get a random question of any type\n\
             `{p}stats` - Show bot statistics\n\
             `{p}refresh` - Refresh the question cache\n\
             `{p}info` - Show this help message"
        );

        Embed::new(format!("🎮 {} - Help", BOT_NAME), NEUTRAL_COLOR)
            .description("Get random questions to spice up your conversations!")
            .field("Commands", commands, false)
            .field(
                "How it works",
                "The bot scrapes questions from popular websites and picks random ones for you. \
                 If web scraping fails, it uses a curated list of fallback questions.",
                false,
            )
            .field(
                "Features",
                "• Web scraping from multiple sources\n\
                 • Intelligent caching system\n\
                 • Fallback questions if scraping fails\n\
                 • Multiple question categories",
                false,
            )
            .footer("Have fun and be respectful!")
            .into()
    }
}
