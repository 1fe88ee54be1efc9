// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for truthbot

/// Full version string
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Bot name shown in logs and help text
pub const BOT_NAME: &str = "Truth and Truth Bot";
