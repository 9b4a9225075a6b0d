// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! The pipeline, in order:
//!
//! ```text
//! query ──tokenize──▶ matcher ──▶ filter ──▶ score ──▶ sort ──▶ page ──▶ highlight
//!   │                                          ▲
//!   └─ empty ─▶ every document ─▶ filter ──────┘ (score stays 0, no highlights)
//! ```
//!
//! Highlighting runs last so only the returned page pays for it.

pub mod filter;
pub mod highlight;
pub mod matcher;
mod suggest;

pub use suggest::suggest;

use tracing::debug;

use crate::config::EngineConfig;
use crate::index::IndexStore;
use crate::scoring::calculate_scores;
use crate::scoring::ranking::sort_results;
use crate::tokenizer::tokenize;
use crate::types::{SearchOptions, SearchPage, SearchResult};

use filter::apply_filters;
use highlight::generate_highlights;
use matcher::{search_by_tokens, MatchMode};

/// Run one search against `store`.
pub fn run_search(store: &IndexStore, config: &EngineConfig, options: &SearchOptions) -> SearchPage {
    if options.is_browse() {
        return browse(store, options);
    }

    let tokens = tokenize(&options.query);
    if tokens.is_empty() {
        debug!(query = %options.query, "query has no searchable tokens");
        return SearchPage {
            total: 0,
            results: Vec::new(),
        };
    }

    let mode = MatchMode::from_flags(options.fuzzy, options.exact_match);
    let candidate_ids = search_by_tokens(store.inverted(), &tokens, mode, &config.fuzzy);
    let candidates: Vec<SearchResult> = candidate_ids
        .iter()
        .filter_map(|id| store.get(id))
        .map(|stored| SearchResult::from_document(&stored.document))
        .collect();
    let candidate_count = candidates.len();

    let mut results = match &options.filters {
        Some(filters) => apply_filters(candidates, filters),
        None => candidates,
    };
    calculate_scores(&mut results, &tokens, config);
    sort_results(&mut results, options.sort_by, options.sort_order);

    let total = results.len();
    let mut page = paginate(results, options.offset, options.limit);
    generate_highlights(&mut page, &options.query, &config.highlights);

    debug!(
        query = %options.query,
        ?mode,
        tokens = tokens.len(),
        candidates = candidate_count,
        total,
        returned = page.len(),
        "search complete"
    );

    SearchPage {
        total,
        results: page,
    }
}

/// Empty query: list every document that passes the filters.
fn browse(store: &IndexStore, options: &SearchOptions) -> SearchPage {
    let all: Vec<SearchResult> = store.documents().map(SearchResult::from_document).collect();
    let mut results = match &options.filters {
        Some(filters) => apply_filters(all, filters),
        None => all,
    };
    sort_results(&mut results, options.sort_by, options.sort_order);

    let total = results.len();
    let results = paginate(results, options.offset, options.limit);
    debug!(total, returned = results.len(), "browse complete");
    SearchPage { total, results }
}

/// `results[offset..offset + limit]`, clamped to what exists.
pub fn paginate<T>(results: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    results.into_iter().skip(offset).take(limit).collect()
}
