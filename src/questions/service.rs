// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Question service orchestration
//!
//! Entry point for consumers: random questions, full lists, cache control
//! and shutdown.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::cache::{CategoryCache, QuestionList};
use super::config::QuestionConfig;
use super::fetcher::{HttpFetcher, SourceFetcher};
use super::selector::{pick_category, pick_question};
use super::types::{CacheInfo, Category, PickedQuestion, QuestionError};

/// Main question service wrapping the category cache
pub struct QuestionService {
    cache: CategoryCache,
}

impl QuestionService {
    /// Create a service that scrapes over HTTP
    pub fn new(config: QuestionConfig) -> Result<Self, QuestionError> {
        let fetcher = Arc::new(HttpFetcher::from_config(&config));
        Self::with_fetcher(config, fetcher)
    }

    /// Create a service with a custom source fetcher
    pub fn with_fetcher(
        config: QuestionConfig,
        fetcher: Arc<dyn SourceFetcher>,
    ) -> Result<Self, QuestionError> {
        config.validate().map_err(QuestionError::InvalidConfig)?;

        Ok(Self {
            cache: CategoryCache::new(config, fetcher),
        })
    }

    /// Get a random question, from `category` or from a random category
    ///
    /// Returns `None` only when the resolved category has no questions at all.
    pub async fn get_random_question(&self, category: Option<Category>) -> Option<PickedQuestion> {
        let category = match category {
            Some(category) => category,
            None => pick_category(&Category::ALL, &mut rand::thread_rng())?,
        };

        let questions = self.cache.get_all(category).await;
        let question = pick_question(&questions, &mut rand::thread_rng())?;

        debug!("Picked {} question: {}", category, question);

        Some(PickedQuestion {
            question: question.to_string(),
            category,
        })
    }

    /// Get every question currently available for a category
    pub async fn get_all_questions(&self, category: Category) -> QuestionList {
        self.cache.get_all(category).await
    }

    /// Force the next request for `category` (or all) to re-scrape
    pub fn refresh_cache(&self, category: Option<Category>) {
        self.cache.refresh(category);
    }

    /// Get count, age and freshness for each cached category
    pub fn get_cache_info(&self) -> BTreeMap<Category, CacheInfo> {
        self.cache.cache_info()
    }

    /// Release network resources; safe to call more than once
    pub fn close(&self) {
        info!("Closing question service");
        self.cache.close();
    }

    /// Get the configuration
    pub fn config(&self) -> &QuestionConfig {
        self.cache.config()
    }
}
