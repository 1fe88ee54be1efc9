// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::sync::Arc;
use std::time::Duration;
use truthbot::questions::{Category, CategoryCache, QuestionConfig};

use super::mock::{config_for, numbered_questions, Page, ScriptedFetcher};

const PRIMARY_A: &str = "http://questions.test/primary-a";
const PRIMARY_B: &str = "http://questions.test/primary-b";
const ALT_A: &str = "http://questions.test/alt-a";
const ALT_B: &str = "http://questions.test/alt-b";

fn as_strs(questions: &[String]) -> Vec<&str> {
    questions.iter().map(String::as_str).collect()
}

#[tokio::test]
async fn test_every_source_failing_returns_fallback() {
    let fetcher = ScriptedFetcher::new();
    fetcher.set_page(PRIMARY_A, Page::Status(500));
    fetcher.set_page(PRIMARY_B, Page::Status(500));
    fetcher.set_page(ALT_A, Page::Timeout);

    let config = config_for(Category::Dare, &[PRIMARY_A, PRIMARY_B], &[ALT_A]);
    let expected = config.fallback_questions[&Category::Dare].clone();
    let cache = CategoryCache::new(config, fetcher.clone());

    let questions = cache.get_all(Category::Dare).await;

    assert_eq!(*questions, expected);
    assert_eq!(fetcher.call_count(), 3);

    let info = cache.cache_info();
    assert_eq!(info[&Category::Dare].question_count, expected.len());
    assert!(info[&Category::Dare].is_fresh);
}

#[tokio::test]
async fn test_category_without_sources_uses_fallback() {
    let fetcher = ScriptedFetcher::new();
    let config = config_for(Category::Truth, &[PRIMARY_A], &[]);
    let expected = config.fallback_questions[&Category::WouldYouRather].clone();
    let cache = CategoryCache::new(config, fetcher.clone());

    let questions = cache.get_all(Category::WouldYouRather).await;

    assert_eq!(*questions, expected);
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_fresh_entry_is_served_without_fetching() {
    let fetcher = ScriptedFetcher::new();
    let scraped = numbered_questions("truth", 12);
    let scraped_refs: Vec<&str> = scraped.iter().map(String::as_str).collect();
    fetcher.set_questions(PRIMARY_A, &scraped_refs);

    let cache = CategoryCache::new(config_for(Category::Truth, &[PRIMARY_A], &[ALT_A]), fetcher.clone());

    let first = cache.get_all(Category::Truth).await;
    assert_eq!(fetcher.call_count(), 1);

    let second = cache.get_all(Category::Truth).await;
    assert_eq!(fetcher.call_count(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(as_strs(&second), scraped_refs);
}

#[tokio::test]
async fn test_alternatives_skipped_when_primary_sufficient() {
    let fetcher = ScriptedFetcher::new();
    let scraped = numbered_questions("truth", 10);
    let scraped_refs: Vec<&str> = scraped.iter().map(String::as_str).collect();
    fetcher.set_questions(PRIMARY_A, &scraped_refs);
    fetcher.set_questions(ALT_A, &["What is your secret talent?"]);

    let cache = CategoryCache::new(config_for(Category::Truth, &[PRIMARY_A], &[ALT_A]), fetcher.clone());

    let questions = cache.get_all(Category::Truth).await;

    assert_eq!(questions.len(), 10);
    assert_eq!(fetcher.calls(), vec![PRIMARY_A.to_string()]);
}

#[tokio::test]
async fn test_alternatives_appended_after_primary_when_short() {
    let fetcher = ScriptedFetcher::new();
    fetcher.set_questions(PRIMARY_A, &["What is your biggest fear?"]);
    fetcher.set_page(PRIMARY_B, Page::Status(404));
    fetcher.set_questions(ALT_A, &["Who was your first crush?"]);
    fetcher.set_questions(ALT_B, &["When did you last cry?", "Why did you pick this game?"]);

    let cache = CategoryCache::new(
        config_for(Category::Truth, &[PRIMARY_A, PRIMARY_B], &[ALT_A, ALT_B]),
        fetcher.clone(),
    );

    let questions = cache.get_all(Category::Truth).await;

    assert_eq!(
        as_strs(&questions),
        vec![
            "What is your biggest fear?",
            "Who was your first crush?",
            "When did you last cry?",
            "Why did you pick this game?",
        ]
    );
    assert_eq!(fetcher.call_count(), 4);
}

#[tokio::test]
async fn test_failing_source_does_not_abort_others() {
    let fetcher = ScriptedFetcher::new();
    fetcher.set_page(PRIMARY_A, Page::Timeout);
    fetcher.set_questions(PRIMARY_B, &["Would you rather fly or be invisible?"]);

    let cache = CategoryCache::new(
        config_for(Category::WouldYouRather, &[PRIMARY_A, PRIMARY_B], &[]),
        fetcher.clone(),
    );

    let questions = cache.get_all(Category::WouldYouRather).await;

    assert_eq!(as_strs(&questions), vec!["Would you rather fly or be invisible?"]);
}

#[tokio::test]
async fn test_parallel_fetch_preserves_source_order() {
    let fetcher = ScriptedFetcher::with_delay(Duration::from_millis(10));
    fetcher.set_questions(PRIMARY_A, &["What is the first question?"]);
    fetcher.set_questions(PRIMARY_B, &["What is the second question?"]);

    let mut config = config_for(Category::Truth, &[PRIMARY_A, PRIMARY_B], &[]);
    config.parallel_fetch = true;
    let cache = CategoryCache::new(config, fetcher);

    let questions = cache.get_all(Category::Truth).await;

    assert_eq!(
        as_strs(&questions),
        vec!["What is the first question?", "What is the second question?"]
    );
}

#[tokio::test]
async fn test_refresh_forces_refetch() {
    let fetcher = ScriptedFetcher::new();
    fetcher.set_questions(PRIMARY_A, &["What is your old favourite song?"]);

    let cache = CategoryCache::new(config_for(Category::Truth, &[PRIMARY_A], &[]), fetcher.clone());
    cache.get_all(Category::Truth).await;

    fetcher.set_questions(PRIMARY_A, &["What is your new favourite song?"]);
    cache.refresh(Some(Category::Truth));
    assert!(cache.cache_info().is_empty());

    let questions = cache.get_all(Category::Truth).await;
    assert_eq!(as_strs(&questions), vec!["What is your new favourite song?"]);
    assert_eq!(fetcher.call_count(), 2);
}

#[tokio::test]
async fn test_refresh_all_clears_every_category() {
    let fetcher = ScriptedFetcher::new();
    let cache = CategoryCache::new(QuestionConfig { sources: Default::default(), ..Default::default() }, fetcher);

    for category in Category::ALL {
        cache.get_all(category).await;
    }
    assert_eq!(cache.cache_info().len(), 3);

    cache.refresh(None);
    assert!(cache.cache_info().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stale_entry_is_refetched() {
    let fetcher = ScriptedFetcher::new();
    fetcher.set_questions(PRIMARY_A, &["What is the stale question?"]);

    let cache = CategoryCache::new(config_for(Category::Truth, &[PRIMARY_A], &[]), fetcher.clone());
    cache.get_all(Category::Truth).await;

    tokio::time::advance(Duration::from_secs(3601)).await;

    let info = cache.cache_info();
    assert!(!info[&Category::Truth].is_fresh);
    assert!(info[&Category::Truth].cache_age_minutes >= 60);

    fetcher.set_questions(PRIMARY_A, &["What is the fresh question?"]);
    let questions = cache.get_all(Category::Truth).await;

    assert_eq!(as_strs(&questions), vec!["What is the fresh question?"]);
    assert_eq!(fetcher.call_count(), 2);

    let info = cache.cache_info();
    assert!(info[&Category::Truth].is_fresh);
    assert_eq!(info[&Category::Truth].cache_age_minutes, 0);
}

#[tokio::test(start_paused = true)]
async fn test_entry_still_fresh_just_before_expiry() {
    let fetcher = ScriptedFetcher::new();
    fetcher.set_questions(PRIMARY_A, &["What is the cached question?"]);

    let cache = CategoryCache::new(config_for(Category::Truth, &[PRIMARY_A], &[]), fetcher.clone());
    cache.get_all(Category::Truth).await;

    tokio::time::advance(Duration::from_secs(3599)).await;
    cache.get_all(Category::Truth).await;

    assert_eq!(fetcher.call_count(), 1);
    assert_eq!(cache.cache_info()[&Category::Truth].cache_age_minutes, 59);
}

#[tokio::test]
async fn test_concurrent_misses_share_one_refresh() {
    let fetcher = ScriptedFetcher::with_delay(Duration::from_millis(50));
    fetcher.set_questions(PRIMARY_A, &["What is the shared question?"]);

    let cache = Arc::new(CategoryCache::new(
        config_for(Category::Truth, &[PRIMARY_A], &[]),
        fetcher.clone(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = cache.clone();
            tokio::spawn(async move { cache.get_all(Category::Truth).await })
        })
        .collect();

    let mut lists = Vec::new();
    for handle in handles {
        lists.push(handle.await.unwrap());
    }

    assert_eq!(fetcher.call_count(), 1);
    for list in &lists[1..] {
        assert!(Arc::ptr_eq(&lists[0], list));
    }
}

#[tokio::test]
async fn test_close_reaches_fetcher() {
    let fetcher = ScriptedFetcher::new();
    let cache = CategoryCache::new(QuestionConfig::default(), fetcher.clone());

    cache.close();
    cache.close();

    assert!(fetcher.is_closed());
}
