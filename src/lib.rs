// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod commands;
pub mod questions;
pub mod version;

// Re-export main types
pub use commands::{Command, CommandHandler, Reply};
pub use questions::{Category, QuestionConfig, QuestionService};
