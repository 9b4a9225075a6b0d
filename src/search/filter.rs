// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured filters: AND across fields, OR within a field.
//!
//! An empty list constrains nothing. A document missing the metadata key a
//! filter looks at simply fails that filter.

use serde_json::Value;

use crate::scoring::ranking::document_date;
use crate::types::{Metadata, SearchFilters, SearchResult};

/// Does `result` satisfy every populated field of `filters`?
pub fn matches_filters(result: &SearchResult, filters: &SearchFilters) -> bool {
    if !filters.categories.is_empty() && !intersects(&result.categories, &filters.categories) {
        return false;
    }
    if !filters.tags.is_empty() && !intersects(&result.tags, &filters.tags) {
        return false;
    }
    if let Some(range) = &filters.date_range {
        match document_date(&result.metadata) {
            Some(date) if range.contains(date) => {}
            _ => return false,
        }
    }
    metadata_in(&result.metadata, "difficulty", &filters.difficulty)
        && metadata_in(&result.metadata, "type", &filters.content_type)
        && metadata_in(&result.metadata, "author", &filters.author)
}

/// Keep only the results that pass.
pub fn apply_filters(results: Vec<SearchResult>, filters: &SearchFilters) -> Vec<SearchResult> {
    if filters.is_empty() {
        return results;
    }
    results
        .into_iter()
        .filter(|result| matches_filters(result, filters))
        .collect()
}

fn intersects(values: &[String], wanted: &[String]) -> bool {
    values.iter().any(|value| wanted.contains(value))
}

/// `metadata[key]` is one of `allowed`, or `allowed` is empty.
///
/// Numbers and booleans compare by their JSON text, so `"difficulty": 2`
/// passes a `["2"]` filter.
fn metadata_in(metadata: &Metadata, key: &str, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    let value = match metadata.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => return false,
    };
    allowed.contains(&value)
}
