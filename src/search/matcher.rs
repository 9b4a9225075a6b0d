// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate resolution: which documents could match these tokens?
//!
//! Three modes, chosen per query:
//!
//! | Mode      | A query token matches an indexed token when…        |
//! |-----------|-----------------------------------------------------|
//! | exact     | they are identical                                  |
//! | fuzzy     | edit distance ≤ `max(1, ⌊0.3 · len⌋)`               |
//! | partial   | the indexed token contains the query token          |
//!
//! Tokens are OR'd: one hit is enough to make a document a candidate. The
//! ranker sorts out how good the match actually is.
//!
//! Partial and fuzzy modes scan the whole vocabulary for every query token.
//! Fuzzy costs O(query tokens × vocabulary × token length²). That's fine for a
//! portal-sized index; a huge vocabulary wants a Levenshtein automaton instead.

use std::collections::BTreeSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::FuzzyConfig;
use crate::fuzzy::{fuzzy_threshold, levenshtein_within};
use crate::index::InvertedIndex;

/// Vocabulary size above which the fuzzy scan fans out across threads.
#[cfg(feature = "parallel")]
pub const PARALLEL_FUZZY_MIN_TOKENS: usize = 4096;

/// How query tokens are compared against indexed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Fuzzy,
    Partial,
}

impl MatchMode {
    /// `exact_match` wins over `fuzzy` when both are set.
    pub fn from_flags(fuzzy: bool, exact_match: bool) -> Self {
        if exact_match {
            MatchMode::Exact
        } else if fuzzy {
            MatchMode::Fuzzy
        } else {
            MatchMode::Partial
        }
    }
}

/// Ids of every document containing at least one matching token.
pub fn search_by_tokens(
    index: &InvertedIndex,
    tokens: &[String],
    mode: MatchMode,
    fuzzy: &FuzzyConfig,
) -> BTreeSet<String> {
    let mut candidates = BTreeSet::new();

    for token in tokens {
        match mode {
            MatchMode::Exact => {
                if let Some(ids) = index.get(token) {
                    candidates.extend(ids.iter().cloned());
                }
            }
            MatchMode::Partial => {
                for (indexed, ids) in index.iter() {
                    if indexed.contains(token.as_str()) {
                        candidates.extend(ids.iter().cloned());
                    }
                }
            }
            MatchMode::Fuzzy => {
                let max = fuzzy_threshold(token, fuzzy);
                for indexed in fuzzy_matches(index, token, max) {
                    if let Some(ids) = index.get(indexed) {
                        candidates.extend(ids.iter().cloned());
                    }
                }
            }
        }
    }

    candidates
}

/// Indexed tokens within `max` edits of `token`.
pub fn fuzzy_matches<'a>(index: &'a InvertedIndex, token: &str, max: usize) -> Vec<&'a String> {
    #[cfg(feature = "parallel")]
    if index.len() >= PARALLEL_FUZZY_MIN_TOKENS {
        let vocabulary: Vec<&String> = index.tokens().collect();
        return vocabulary
            .into_par_iter()
            .filter(|indexed| levenshtein_within(token, indexed, max))
            .collect();
    }

    index
        .tokens()
        .filter(|indexed| levenshtein_within(token, indexed, max))
        .collect()
}
