// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat command layer
//!
//! Parses `!truth`, `!dare`, `!would_you_rather`, `!random`, `!stats`,
//! `!refresh` and `!info` and renders platform-neutral replies.

pub mod command;
pub mod handler;
pub mod reply;

pub use command::{Command, DEFAULT_PREFIX};
pub use handler::{random_status, CommandHandler, STATUS_MESSAGES};
pub use reply::{category_color, Embed, EmbedField, Reply, NEUTRAL_COLOR};
