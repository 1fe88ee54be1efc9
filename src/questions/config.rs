// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for question acquisition
//!
//! Defines source URLs, fallback questions, extraction heuristics and
//! cache timing.

use std::collections::HashMap;
use std::env;
use std::time::Duration;
use url::Url;

use super::types::Category;

const BASE_URL: &str = "https://www.truthordarequestions.net";

/// Default User-Agent sent with every source request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Primary and alternative source URLs for one category
#[derive(Debug, Clone, Default)]
pub struct CategorySources {
    /// Always fetched on refresh
    pub primary: Vec<String>,
    /// Fetched only when the primary tier comes up short
    pub alternative: Vec<String>,
}

/// Heuristics used by the question extractor
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// CSS selectors scanned in priority order
    pub selectors: Vec<String>,
    /// Case-insensitive substrings that disqualify a candidate
    pub noise_words: Vec<String>,
    /// Case-insensitive substrings that mark a candidate as a question
    pub question_indicators: Vec<String>,
    /// Minimum candidate length in characters (default: 10)
    pub min_chars: usize,
    /// Maximum candidate length in characters (default: 500)
    pub max_chars: usize,
    /// Maximum questions kept per source page (default: 50)
    pub max_per_source: usize,
}

/// Configuration for question acquisition and caching
#[derive(Debug, Clone)]
pub struct QuestionConfig {
    /// Total timeout per source fetch in seconds (default: 10)
    pub request_timeout_secs: u64,
    /// Freshness window for cached categories in seconds (default: 3600)
    pub cache_duration_secs: u64,
    /// Primary-tier count below which alternative sources are tried (default: 10)
    pub min_questions_before_alternatives: usize,
    /// Fetch the sources of one tier concurrently (default: true)
    pub parallel_fetch: bool,
    /// User-Agent header for source requests
    pub user_agent: String,
    /// Source URLs per category
    pub sources: HashMap<Category, CategorySources>,
    /// Built-in questions used when every source comes up empty
    pub fallback_questions: HashMap<Category, Vec<String>>,
    /// Extraction heuristics
    pub extraction: ExtractionConfig,
}

impl QuestionConfig {
    /// Load configuration from environment variables
    ///
    /// Source lists and fallback questions always come from the built-in
    /// defaults; only scalar settings are overridable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let mut extraction = defaults.extraction;
        extraction.max_per_source = env::var("QUESTION_MAX_PER_SOURCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(extraction.max_per_source);

        Self {
            request_timeout_secs: env::var("QUESTION_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            cache_duration_secs: env::var("QUESTION_CACHE_DURATION_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_duration_secs),
            min_questions_before_alternatives: env::var("QUESTION_MIN_BEFORE_ALTERNATIVES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_questions_before_alternatives),
            parallel_fetch: env::var("QUESTION_PARALLEL_FETCH")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(defaults.parallel_fetch),
            user_agent: env::var("QUESTION_USER_AGENT").unwrap_or(defaults.user_agent),
            sources: defaults.sources,
            fallback_questions: defaults.fallback_questions,
            extraction,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1".to_string());
        }
        if self.cache_duration_secs == 0 {
            return Err("cache_duration_secs must be greater than 0".to_string());
        }
        if self.extraction.max_per_source == 0 {
            return Err("max_per_source must be at least 1".to_string());
        }
        if self.extraction.min_chars > self.extraction.max_chars {
            return Err("min_chars cannot exceed max_chars".to_string());
        }
        if self.extraction.selectors.is_empty() {
            return Err("at least one extraction selector is required".to_string());
        }

        for category in Category::ALL {
            let has_fallback = self
                .fallback_questions
                .get(&category)
                .map(|questions| questions.iter().any(|q| !q.trim().is_empty()))
                .unwrap_or(false);
            if !has_fallback {
                return Err(format!("fallback questions for '{}' must not be empty", category));
            }
        }

        for (category, sources) in &self.sources {
            for url in sources.primary.iter().chain(sources.alternative.iter()) {
                let parsed = Url::parse(url)
                    .map_err(|e| format!("invalid source URL for '{}': {} ({})", category, url, e))?;
                if !["http", "https"].contains(&parsed.scheme()) {
                    return Err(format!(
                        "source URL for '{}' must be http or https: {}",
                        category, url
                    ));
                }
            }
        }

        Ok(())
    }

    /// Per-fetch timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Freshness window
    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_secs)
    }

    /// Sources for a category; empty when none are configured
    pub fn sources_for(&self, category: Category) -> CategorySources {
        self.sources.get(&category).cloned().unwrap_or_default()
    }

    /// Fallback questions for a category
    pub fn fallback_for(&self, category: Category) -> &[String] {
        self.fallback_questions
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            selectors: to_strings(&[
                "li",
                "p",
                "h3",
                "h4",
                "h5",
                "div.question",
                "div.truth-question",
                "div.dare-question",
                "span.question",
                "article",
                "section",
            ]),
            noise_words: to_strings(&[
                "cookie",
                "privacy",
                "advertisement",
                "menu",
                "navigation",
                "subscribe",
                "newsletter",
                "ad",
                "sponsored",
                "click here",
                "terms",
                "conditions",
                "copyright",
                "all rights reserved",
            ]),
            question_indicators: to_strings(&[
                "what",
                "when",
                "where",
                "who",
                "why",
                "how",
                "would you",
                "have you",
                "do you",
                "are you",
            ]),
            min_chars: 10,
            max_chars: 500,
            max_per_source: 50,
        }
    }
}

impl Default for QuestionConfig {
    fn default() -> Self {
        let mut sources = HashMap::new();
        sources.insert(
            Category::Truth,
            CategorySources {
                primary: source_urls(&[
                    "truth-questions",
                    "funny-truth-questions",
                    "dirty-truth-questions",
                    "embarrassing-truth-questions",
                ]),
                alternative: source_urls(&[
                    "truth-questions-for-couples",
                    "truth-questions-for-teens",
                ]),
            },
        );
        sources.insert(
            Category::Dare,
            CategorySources {
                primary: source_urls(&[
                    "dare-questions",
                    "funny-dare-questions",
                    "dirty-dare-questions",
                    "embarrassing-dare-questions",
                ]),
                alternative: source_urls(&[
                    "dare-questions-for-couples",
                    "dare-questions-for-teens",
                ]),
            },
        );
        sources.insert(
            Category::WouldYouRather,
            CategorySources {
                primary: source_urls(&[
                    "would-you-rather-questions",
                    "funny-would-you-rather-questions",
                    "dirty-would-you-rather-questions",
                ]),
                alternative: Vec::new(),
            },
        );

        Self {
            request_timeout_secs: 10,
            cache_duration_secs: 3600,
            min_questions_before_alternatives: 10,
            parallel_fetch: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sources,
            fallback_questions: default_fallback_questions(),
            extraction: ExtractionConfig::default(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn source_urls(slugs: &[&str]) -> Vec<String> {
    slugs
        .iter()
        .map(|slug| format!("{}/{}/", BASE_URL, slug))
        .collect()
}

fn default_fallback_questions() -> HashMap<Category, Vec<String>> {
    let mut fallback = HashMap::new();
    fallback.insert(
        Category::Truth,
        to_strings(&[
            "What's the most embarrassing thing that happened to you in school?",
            "What's your biggest fear?",
            "What's the worst lie you've ever told?",
            "What's your most embarrassing childhood memory?",
            "What's the most trouble you've ever been in?",
            "What's your biggest regret?",
            "What's the most embarrassing thing in your search history?",
            "What's your biggest insecurity?",
            "What's the most embarrassing thing you've done while drunk?",
            "What's your biggest pet peeve?",
            "What's the most embarrassing thing you've ever said to someone?",
            "What's your most embarrassing nickname?",
            "What's the most embarrassing thing you've ever worn?",
            "What's your most embarrassing moment in public?",
            "What's the most embarrassing thing you've ever done for money?",
        ]),
    );
    fallback.insert(
        Category::Dare,
        to_strings(&[
            "Let someone in the group post something on your social media",
            "Call your mom and tell her you're getting married",
            "Let the group go through your phone for 2 minutes",
            "Do your best impression of someone in the group",
            "Let someone in the group text anyone in your contacts",
            "Dance for 30 seconds without music",
            "Let the group pick your profile picture for the next week",
            "Call a friend and sing them a song",
            "Let someone in the group look through your photos for 1 minute",
            "Do 10 push-ups right now",
            "Let the group choose your outfit for tomorrow",
            "Call a random number and try to sell them something",
            "Let someone in the group control your phone for 5 minutes",
            "Do your best animal impression",
            "Let the group pick your next status update",
        ]),
    );
    fallback.insert(
        Category::WouldYouRather,
        to_strings(&[
            "Would you rather be invisible or be able to fly?",
            "Would you rather be rich and ugly or poor and beautiful?",
            "Would you rather have unlimited money or unlimited knowledge?",
            "Would you rather live in the past or the future?",
            "Would you rather be famous or be a genius?",
            "Would you rather have no internet or no phone?",
            "Would you rather be too hot or too cold?",
            "Would you rather be a superhero or a villain?",
            "Would you rather be able to read minds or see the future?",
            "Would you rather be poor and happy or rich and miserable?",
            "Would you rather be able to speak all languages or play all instruments?",
            "Would you rather be able to teleport or time travel?",
            "Would you rather be a famous actor or a famous musician?",
            "Would you rather be able to control fire or water?",
            "Would you rather be able to talk to animals or speak all human languages?",
        ]),
    );
    fallback
}
