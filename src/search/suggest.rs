// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete over the indexed vocabulary.

use std::cmp::Reverse;

use crate::index::InvertedIndex;

/// Indexed tokens starting with `prefix`, most widely used first.
///
/// The prefix is lowercased and trimmed the way query text is. Ties on
/// document frequency fall back to token order.
pub fn suggest(index: &InvertedIndex, prefix: &str, limit: usize) -> Vec<String> {
    let prefix = prefix.trim().to_lowercase();
    if prefix.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<(&String, usize)> = index
        .tokens_with_prefix(&prefix)
        .map(|(token, ids)| (token, ids.len()))
        .collect();
    // Stable sort keeps token order among equal frequencies
    hits.sort_by_key(|&(_, freq)| Reverse(freq));
    hits.into_iter()
        .take(limit)
        .map(|(token, _)| token.clone())
        .collect()
}
