// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token → document id sets.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// Sorted token → sorted id set.
///
/// Ordered maps keep exports and candidate order deterministic, which makes
/// ties in ranking reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    terms: BTreeMap<String, BTreeSet<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `doc_id` contains each of `tokens`.
    pub fn insert<'a, I>(&mut self, doc_id: &str, tokens: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for token in tokens {
            self.terms
                .entry(token.clone())
                .or_default()
                .insert(doc_id.to_string());
        }
    }

    /// Strip `doc_id` from each of `tokens`, deleting tokens left with no ids.
    pub fn remove<'a, I>(&mut self, doc_id: &str, tokens: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for token in tokens {
            if let Some(ids) = self.terms.get_mut(token) {
                ids.remove(doc_id);
                if ids.is_empty() {
                    self.terms.remove(token);
                }
            }
        }
    }

    /// Ids of documents containing exactly this token.
    pub fn get(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.terms.get(token)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.terms.contains_key(token)
    }

    /// Every (token, ids) pair in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.terms.iter()
    }

    /// Every distinct token in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &String> {
        self.terms.keys()
    }

    /// Tokens starting with `prefix`, in sorted order.
    pub fn tokens_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a BTreeSet<String>)> + 'a {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(token, _)| token.starts_with(prefix))
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Plain-collection view for snapshots.
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        self.terms
            .iter()
            .map(|(token, ids)| (token.clone(), ids.iter().cloned().collect()))
            .collect()
    }
}
