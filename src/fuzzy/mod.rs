// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! A bounded Levenshtein check does the per-token comparison, and the
//! threshold scales with the query token's length so "reakt" finds "react"
//! without "go" matching every two-letter word.

mod levenshtein;

pub use levenshtein::*;
