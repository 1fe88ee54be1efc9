// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML question extraction
//!
//! Pulls question-like text out of arbitrary markup using CSS selectors and
//! a set of validity heuristics.

use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::warn;

use super::config::ExtractionConfig;

/// Extracts candidate questions from raw HTML
pub struct QuestionExtractor {
    selectors: Vec<Selector>,
    noise_words: Vec<String>,
    question_indicators: Vec<String>,
    min_chars: usize,
    max_chars: usize,
    max_per_source: usize,
}

impl QuestionExtractor {
    /// Build an extractor, compiling selectors once
    ///
    /// Selectors that fail to parse are skipped with a warning.
    pub fn new(config: &ExtractionConfig) -> Self {
        let selectors = config
            .selectors
            .iter()
            .filter_map(|s| match Selector::parse(s) {
                Ok(selector) => Some(selector),
                Err(e) => {
                    warn!("Skipping invalid selector '{}': {:?}", s, e);
                    None
                }
            })
            .collect();

        Self {
            selectors,
            noise_words: lowercase_all(&config.noise_words),
            question_indicators: lowercase_all(&config.question_indicators),
            min_chars: config.min_chars,
            max_chars: config.max_chars,
            max_per_source: config.max_per_source,
        }
    }

    /// Extract unique questions from `html`, in selector-priority order
    ///
    /// Never fails: malformed markup yields whatever the tolerant parser
    /// recovers, possibly nothing.
    pub fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        let mut seen = HashSet::new();
        let mut questions = Vec::new();

        for selector in &self.selectors {
            for element in document.select(selector) {
                let text = element.text().collect::<String>();
                let text = text.trim();
                if self.is_valid_question(text) && seen.insert(text.to_string()) {
                    questions.push(text.to_string());
                }
            }
        }

        questions.truncate(self.max_per_source);
        questions
    }

    /// Check if a scraped fragment looks like a usable question
    pub fn is_valid_question(&self, text: &str) -> bool {
        let len = text.chars().count();
        if text.is_empty() || len < self.min_chars || len > self.max_chars {
            return false;
        }

        let lower = text.to_lowercase();
        if self.noise_words.iter().any(|word| lower.contains(word.as_str())) {
            return false;
        }

        let has_indicator = self
            .question_indicators
            .iter()
            .any(|indicator| lower.contains(indicator.as_str()));

        has_indicator || text.trim_end().ends_with('?')
    }
}

impl Default for QuestionExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

fn lowercase_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}
