// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! Linear weighted term frequency. For each query token, count how often it
//! appears in each field's lowercased text, multiply by the field weight, sum
//! everything, then divide by ten points per query token.
//!
//! # Constants
//!
//! | Field       | Weight | Note                         |
//! |-------------|--------|------------------------------|
//! | Title       | 3.0    |                              |
//! | Description | 2.0    |                              |
//! | Content     | 1.0    | Baseline                     |
//! | Tag         | 2.0    | Per tag, summed over tags    |
//! | Category    | 1.5    | Per category, summed         |
//!
//! A document whose title, description and tag each mention the token once
//! scores 7/10. Repeated mentions can push the raw ratio past 1, which is why
//! the normalized score is clamped unless the config turns that off.

use crate::config::{EngineConfig, FieldWeights};
use crate::types::SearchResult;

pub const TITLE_WEIGHT: f64 = 3.0;
pub const DESCRIPTION_WEIGHT: f64 = 2.0;
pub const CONTENT_WEIGHT: f64 = 1.0;
pub const TAG_WEIGHT: f64 = 2.0;
pub const CATEGORY_WEIGHT: f64 = 1.5;

/// Normalization divisor per query token.
pub const MAX_TOKEN_WEIGHT: f64 = 10.0;

/// Non-overlapping occurrences of `needle` in `haystack`.
///
/// Counts left to right and resumes after each hit, so "aa" occurs once in
/// "aaa". Substrings count too: "react" occurs in "reactive".
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Occurrences of every token in one field, summed.
pub fn field_occurrences(text: &str, tokens: &[String]) -> usize {
    let lowered = text.to_lowercase();
    tokens
        .iter()
        .map(|token| count_occurrences(&lowered, token))
        .sum()
}

/// Weighted occurrence sum across every field, before normalization.
pub fn raw_score(result: &SearchResult, tokens: &[String], weights: &FieldWeights) -> f64 {
    let tags: usize = result
        .tags
        .iter()
        .map(|tag| field_occurrences(tag, tokens))
        .sum();
    let categories: usize = result
        .categories
        .iter()
        .map(|category| field_occurrences(category, tokens))
        .sum();

    field_occurrences(&result.title, tokens) as f64 * weights.title
        + field_occurrences(&result.description, tokens) as f64 * weights.description
        + field_occurrences(&result.content, tokens) as f64 * weights.content
        + tags as f64 * weights.tag
        + categories as f64 * weights.category
}

/// Divide by the per-token maximum and, if configured, clamp into `[0, 1]`.
pub fn normalize_score(raw: f64, token_count: usize, config: &EngineConfig) -> f64 {
    if token_count == 0 || config.max_token_weight <= 0.0 {
        return 0.0;
    }
    let normalized = raw / (token_count as f64 * config.max_token_weight);
    if config.clamp_scores {
        normalized.clamp(0.0, 1.0)
    } else {
        normalized
    }
}

/// Fill in `score` for every result.
pub fn calculate_scores(results: &mut [SearchResult], tokens: &[String], config: &EngineConfig) {
    for result in results.iter_mut() {
        let raw = raw_score(result, tokens, &config.weights);
        result.score = normalize_score(raw, tokens.len(), config);
    }
}
