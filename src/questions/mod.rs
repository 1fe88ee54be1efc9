// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Question acquisition and caching
//!
//! Scrapes truth, dare and would-you-rather prompts from public web pages
//! and serves random picks to the command layer.
//!
//! ## Architecture
//!
//! ```text
//! Source URLs → SourceFetcher → HTML → QuestionExtractor → Questions
//!                                                    ↓
//!                         CategoryCache (1h TTL, fallback lists)
//!                                                    ↓
//!                               QuestionService (random pick)
//! ```
//!
//! Key features:
//! - Primary and alternative source tiers per category
//! - Built-in fallback questions when every source fails
//! - One in-flight refresh per category
//! - Graceful degradation: fetch failures are logged, never returned

pub mod cache;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod selector;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use cache::{CategoryCache, QuestionList};
pub use config::{CategorySources, ExtractionConfig, QuestionConfig};
pub use extractor::QuestionExtractor;
pub use fetcher::{FetchError, HttpFetcher, SourceFetcher};
pub use service::QuestionService;
pub use types::{CacheInfo, Category, PickedQuestion, QuestionError};
