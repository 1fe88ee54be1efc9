// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Uniform random selection of categories and questions

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::Category;

/// Pick a category uniformly from `categories`
pub fn pick_category<R: Rng + ?Sized>(categories: &[Category], rng: &mut R) -> Option<Category> {
    categories.choose(rng).copied()
}

/// Pick one question uniformly from `questions`; `None` when empty
pub fn pick_question<'a, R: Rng + ?Sized>(questions: &'a [String], rng: &mut R) -> Option<&'a str> {
    questions.choose(rng).map(String::as_str)
}
