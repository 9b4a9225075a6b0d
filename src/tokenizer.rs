// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning text into searchable tokens.
//!
//! Lowercase, blank out anything that isn't a word character, whitespace or
//! Japanese script, split on whitespace, drop stop words. No segmentation of
//! Japanese runs: "React入門ガイド" is one token, and substring matching does
//! the rest at query time.
//!
//! Japanese ranges kept:
//!
//! | Range           | Script               |
//! |-----------------|----------------------|
//! | U+3040..U+309F  | Hiragana             |
//! | U+30A0..U+30FF  | Katakana             |
//! | U+4E00..U+9FAF  | CJK ideographs       |

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

/// Japanese particles and English function words. Only whole tokens are
/// dropped: "and" goes, "android" stays.
const STOP_WORD_LIST: &[&str] = &[
    // Japanese particles
    "の", "に", "は", "を", "が", "で", "と", "から", "まで", "より", "も", "か", "や", "など",
    // English function words
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Is this (already lowercased) token a stop word?
#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Characters that survive normalization. Everything else becomes a separator.
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_alphanumeric()
        || c == '_'
        || matches!(c,
            '\u{3040}'..='\u{309F}' |  // Hiragana
            '\u{30A0}'..='\u{30FF}' |  // Katakana
            '\u{4E00}'..='\u{9FAF}'    // CJK ideographs
        )
}

/// Split text into normalized tokens, in order, duplicates kept.
///
/// Empty or whitespace-only input gives an empty vector. There's no minimum
/// length, so single-kanji tokens are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|token| !token.is_empty() && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Distinct tokens across several pieces of text.
pub fn unique_tokens<'a, I>(texts: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    texts.into_iter().flat_map(tokenize).collect()
}
