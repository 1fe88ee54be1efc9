// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Platform-neutral reply types
//!
//! Shaped like a chat embed so any chat transport can render them.

use serde::{Deserialize, Serialize};

use crate::questions::Category;

/// Colour for stats, refresh, help and other non-question replies
pub const NEUTRAL_COLOR: u32 = 0x9932cc;

/// Embed colour for a question category
pub fn category_color(category: Category) -> u32 {
    match category {
        Category::Truth => 0x00ff00,
        Category::Dare => 0xff0000,
        Category::WouldYouRather => 0x0099ff,
    }
}

/// One named field of an embed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich reply with title, body, colour, fields and footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            color,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// Reply produced for one command invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    Embed(Embed),
    Text { content: String },
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Get the embed, if this is an embed reply
    pub fn as_embed(&self) -> Option<&Embed> {
        match self {
            Self::Embed(embed) => Some(embed),
            Self::Text { .. } => None,
        }
    }
}

impl From<Embed> for Reply {
    fn from(embed: Embed) -> Self {
        Self::Embed(embed)
    }
}
