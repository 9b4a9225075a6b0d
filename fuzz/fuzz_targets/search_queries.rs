// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries and options at the engine to verify it never
//! panics and never returns malformed pages.

#![no_main]

use arbitrary::Arbitrary;
use kensaku::testing::{engine_with, portal_fixture};
use kensaku::{ContentSearchEngine, SearchOptions, SortBy, SortOrder};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    fuzzy: bool,
    exact: bool,
    sort: u8,
    descending: bool,
    offset: u8,
    limit: u8,
}

fuzz_target!(|input: QueryInput| {
    static ENGINE: OnceLock<ContentSearchEngine> = OnceLock::new();
    let engine = ENGINE.get_or_init(|| engine_with(portal_fixture()));

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(200).collect();
    let sort_by = match input.sort % 4 {
        0 => SortBy::Relevance,
        1 => SortBy::Date,
        2 => SortBy::Title,
        _ => SortBy::Popularity,
    };
    let sort_order = if input.descending {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };
    let limit = input.limit as usize;

    let options = SearchOptions::new(query)
        .with_fuzzy(input.fuzzy)
        .with_exact_match(input.exact)
        .with_sort(sort_by, sort_order)
        .with_offset(input.offset as usize)
        .with_limit(limit);

    // INVARIANT 1: search never panics
    let page = engine.search_page(&options);

    // INVARIANT 2: limit and total are respected
    assert!(page.results.len() <= limit);
    assert!(page.results.len() <= page.total);
    assert!(page.total <= engine.len());

    // INVARIANT 3: every result is a live, unique document with a sane score
    let mut seen = HashSet::new();
    for result in &page.results {
        assert!(engine.contains(&result.id), "unknown id {}", result.id);
        assert!(seen.insert(result.id.clone()), "duplicate id {}", result.id);
        assert!((0.0..=1.0).contains(&result.score), "score {}", result.score);
        assert!(result.highlights.len() <= 5);
    }
});
