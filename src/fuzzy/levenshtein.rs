// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so if two strings
//! differ in length by more than the threshold we skip the O(nm) DP entirely.
//! Fuzzy search compares every query token against the whole vocabulary,
//! so most comparisons end there.
//!
//! All lengths are in characters, not bytes. "入門" is two characters.

use crate::config::FuzzyConfig;

/// How many edits a query token of this length may absorb.
///
/// `max(min_distance, ⌊chars · ratio⌋)`. With the defaults (0.3, 1):
///
/// | Token length | Allowed edits |
/// |--------------|---------------|
/// | 1..=6        | 1             |
/// | 7..=9        | 2             |
/// | 10..=13      | 3             |
pub fn fuzzy_threshold(token: &str, config: &FuzzyConfig) -> usize {
    let chars = token.chars().count();
    let scaled = (chars as f64 * config.distance_ratio).floor() as usize;
    scaled.max(config.min_distance)
}

/// Full Levenshtein distance (insert, delete, substitute all cost 1).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut dp: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_chars.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Same answer as `levenshtein_distance(a, b) <= max`, with two early exits:
/// 1. Length difference exceeds `max`: reject before allocating
/// 2. Every cell in a DP row exceeds `max`: the final cell can't recover
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}
