// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how search results get sorted.
//!
//! One comparator per sort key, flipped for descending order. Sorting is
//! stable, so results that compare equal keep candidate order (document id
//! order), and the same query over the same index always returns the same page.
//!
//! | Key          | Compares                                          |
//! |--------------|---------------------------------------------------|
//! | `relevance`  | `score`                                           |
//! | `date`       | `metadata.createdAt`, falling back to `updatedAt` |
//! | `title`      | case-folded title, then raw title                 |
//! | `popularity` | `metadata.views`, missing counts as 0             |

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::types::{Metadata, SearchResult, SortBy, SortOrder};

/// Parse a metadata value as a timestamp.
///
/// Accepts RFC 3339 strings, `YYYY-MM-DDTHH:MM:SS` (taken as UTC), plain
/// `YYYY-MM-DD` dates (midnight UTC) and integer epoch milliseconds.
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(naive.and_utc());
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(naive.and_utc());
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        }
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// The date a document is filed under: `createdAt`, else `updatedAt`.
pub fn document_date(metadata: &Metadata) -> Option<DateTime<Utc>> {
    metadata
        .get("createdAt")
        .and_then(parse_date)
        .or_else(|| metadata.get("updatedAt").and_then(parse_date))
}

/// View count from `metadata.views`. Missing or unparseable counts as 0.
pub fn popularity(metadata: &Metadata) -> f64 {
    match metadata.get("views") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Title comparison that ignores case first, so "apple" sorts next to "Apple"
/// rather than after "Zebra". Plain code-point order; no locale collation.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Ascending comparison for `sort_by`.
///
/// Undated documents sort before every dated one.
pub fn compare_by(a: &SearchResult, b: &SearchResult, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Relevance => a.score.total_cmp(&b.score),
        SortBy::Date => document_date(&a.metadata).cmp(&document_date(&b.metadata)),
        SortBy::Title => compare_titles(&a.title, &b.title),
        SortBy::Popularity => popularity(&a.metadata).total_cmp(&popularity(&b.metadata)),
    }
}

/// Compare two results for the requested key and direction.
pub fn compare_results(
    a: &SearchResult,
    b: &SearchResult,
    sort_by: SortBy,
    sort_order: SortOrder,
) -> Ordering {
    let ordering = compare_by(a, b, sort_by);
    match sort_order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Stable in-place sort.
pub fn sort_results(results: &mut [SearchResult], sort_by: SortBy, sort_order: SortOrder) {
    results.sort_by(|a, b| compare_results(a, b, sort_by, sort_order));
}
