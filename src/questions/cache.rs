// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-category question cache
//!
//! Owns one entry per category and orchestrates acquisition on a miss:
//! primary sources, then alternative sources when the primary tier comes
//! up short, then the built-in fallback list.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::config::QuestionConfig;
use super::extractor::QuestionExtractor;
use super::fetcher::SourceFetcher;
use super::types::{CacheInfo, Category};

/// Shared, immutable question list handed out by the cache
pub type QuestionList = Arc<Vec<String>>;

struct CacheEntry {
    questions: QuestionList,
    refreshed_at: Instant,
    refreshed_wall: DateTime<Utc>,
}

/// Cache of scraped questions, one entry per category
pub struct CategoryCache {
    entries: RwLock<HashMap<Category, CacheEntry>>,
    refresh_locks: HashMap<Category, Mutex<()>>,
    fetcher: Arc<dyn SourceFetcher>,
    extractor: QuestionExtractor,
    config: QuestionConfig,
}

impl CategoryCache {
    /// Create an empty cache
    pub fn new(config: QuestionConfig, fetcher: Arc<dyn SourceFetcher>) -> Self {
        let refresh_locks = Category::ALL
            .iter()
            .map(|category| (*category, Mutex::new(())))
            .collect();

        Self {
            entries: RwLock::new(HashMap::new()),
            refresh_locks,
            extractor: QuestionExtractor::new(&config.extraction),
            fetcher,
            config,
        }
    }

    /// Get all questions for a category, refreshing if missing or stale
    ///
    /// At most one refresh per category runs at a time; concurrent callers
    /// wait for it and then read the stored result.
    pub async fn get_all(&self, category: Category) -> QuestionList {
        if let Some(questions) = self.fresh(category) {
            debug!("Question cache hit for: {}", category);
            return questions;
        }

        let _guard = match self.refresh_locks.get(&category) {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        // Another caller may have refreshed while we waited
        if let Some(questions) = self.fresh(category) {
            debug!("Question cache filled by concurrent refresh for: {}", category);
            return questions;
        }

        let questions: QuestionList = Arc::new(self.acquire(category).await);
        self.store(category, questions.clone());
        questions
    }

    /// Drop the entry for one category, or every entry when `None`
    pub fn refresh(&self, category: Option<Category>) {
        let mut entries = match self.entries.write() {
            Ok(e) => e,
            Err(_) => return,
        };

        match category {
            Some(category) => {
                entries.remove(&category);
                info!("Question cache cleared for: {}", category);
            }
            None => {
                entries.clear();
                info!("Question cache cleared for all categories");
            }
        }
    }

    /// Report count, age and freshness for every cached category
    pub fn cache_info(&self) -> BTreeMap<Category, CacheInfo> {
        let entries = match self.entries.read() {
            Ok(e) => e,
            Err(_) => return BTreeMap::new(),
        };

        entries
            .iter()
            .map(|(category, entry)| {
                let age = entry.refreshed_at.elapsed();
                (
                    *category,
                    CacheInfo {
                        question_count: entry.questions.len(),
                        cache_age_minutes: age.as_secs() / 60,
                        is_fresh: age < self.cache_duration(),
                        refreshed_at: entry.refreshed_wall,
                    },
                )
            })
            .collect()
    }

    /// Release the fetcher's network resources
    pub fn close(&self) {
        self.fetcher.close();
    }

    /// Get the configuration
    pub fn config(&self) -> &QuestionConfig {
        &self.config
    }

    fn cache_duration(&self) -> Duration {
        self.config.cache_duration()
    }

    fn fresh(&self, category: Category) -> Option<QuestionList> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(&category)?;

        if entry.refreshed_at.elapsed() >= self.cache_duration() {
            return None; // Stale
        }

        Some(entry.questions.clone())
    }

    fn store(&self, category: Category, questions: QuestionList) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                category,
                CacheEntry {
                    questions,
                    refreshed_at: Instant::now(),
                    refreshed_wall: Utc::now(),
                },
            );
        }
    }

    async fn acquire(&self, category: Category) -> Vec<String> {
        let sources = self.config.sources_for(category);

        let mut questions = self.fetch_tier(&sources.primary).await;
        let primary_count = questions.len();

        if primary_count < self.config.min_questions_before_alternatives
            && !sources.alternative.is_empty()
        {
            debug!(
                "Only {} {} questions from primary sources, trying alternatives",
                primary_count, category
            );
            questions.extend(self.fetch_tier(&sources.alternative).await);
        }

        if questions.is_empty() {
            let fallback = self.config.fallback_for(category).to_vec();
            warn!(
                "No {} questions scraped, using {} fallback questions",
                category,
                fallback.len()
            );
            return fallback;
        }

        info!(
            "Refreshed {} questions: {} total ({} from primary sources)",
            category,
            questions.len(),
            primary_count
        );
        questions
    }

    /// Fetch and extract every URL of a tier, concatenated in source order
    async fn fetch_tier(&self, urls: &[String]) -> Vec<String> {
        if self.config.parallel_fetch {
            let futures: Vec<_> = urls.iter().map(|url| self.fetch_source(url)).collect();
            return join_all(futures).await.into_iter().flatten().collect();
        }

        let mut questions = Vec::new();
        for url in urls {
            questions.extend(self.fetch_source(url).await);
        }
        questions
    }

    async fn fetch_source(&self, url: &str) -> Vec<String> {
        match self.fetcher.fetch(url).await {
            Ok(html) => {
                let questions = self.extractor.extract(&html);
                debug!("Extracted {} questions from: {}", questions.len(), url);
                questions
            }
            Err(e) => {
                warn!("Failed to scrape {}: {}", url, e);
                Vec::new()
            }
        }
    }
}
