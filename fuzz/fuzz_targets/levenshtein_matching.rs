// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit-distance matching.
//!
//! Checks the early-exit bound against the full distance and the metric
//! laws fuzzy search relies on.

#![no_main]

use arbitrary::Arbitrary;
use kensaku::{fuzzy_threshold, levenshtein_distance, levenshtein_within, FuzzyConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let query: String = input.query.chars().take(50).collect();
    let target: String = input.target.chars().take(100).collect();
    let max = (input.max % 8) as usize;

    let distance = levenshtein_distance(&query, &target);

    // INVARIANT 1: the bounded check agrees with the full distance
    assert_eq!(
        levenshtein_within(&query, &target, max),
        distance <= max,
        "within({:?}, {:?}, {}) disagrees with distance {}",
        query,
        target,
        max,
        distance
    );

    // INVARIANT 2: symmetric, zero only for equal strings
    assert_eq!(distance, levenshtein_distance(&target, &query));
    assert_eq!(distance == 0, query == target);

    // INVARIANT 3: bounded by the longer length, at least the length gap
    let (q, t) = (query.chars().count(), target.chars().count());
    assert!(distance <= q.max(t));
    assert!(distance >= q.abs_diff(t));

    // INVARIANT 4: every token tolerates at least one edit
    assert!(fuzzy_threshold(&query, &FuzzyConfig::default()) >= 1);
});
