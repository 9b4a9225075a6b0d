// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Short excerpts around query matches, for result display.
//!
//! Per result, in order:
//! 1. Title: window around the first query token found (at most one)
//! 2. Description: same
//! 3. Content: up to three whole sentences mentioning any query token
//!
//! Windows are measured in characters, never bytes, so an excerpt can't cut a
//! multi-byte character in half.

use crate::config::HighlightConfig;
use crate::tokenizer::tokenize;
use crate::types::SearchResult;

/// Sentence terminators, ASCII and full-width.
const SENTENCE_ENDS: &[char] = &['.', '!', '?', '。', '！', '？'];

/// Case-insensitive search, returning the match as a char range of `haystack`.
///
/// Lowercasing can change length ("İ" lowercases to two chars), so every
/// lowered char remembers which original char it came from.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return None;
    }

    let lowered: Vec<(usize, char)> = haystack
        .chars()
        .enumerate()
        .flat_map(|(i, c)| c.to_lowercase().map(move |lc| (i, lc)))
        .collect();

    lowered
        .windows(needle.len())
        .position(|window| window.iter().map(|&(_, c)| c).eq(needle.iter().copied()))
        .map(|start| {
            let first = lowered[start].0;
            let last = lowered[start + needle.len() - 1].0;
            (first, last + 1)
        })
}

/// Excerpt around the first token (in query order) that occurs in `text`.
pub fn field_excerpt(text: &str, tokens: &[String], context_chars: usize) -> Option<String> {
    tokens.iter().find_map(|token| {
        let (start, end) = find_case_insensitive(text, token)?;
        let from = start.saturating_sub(context_chars);
        let to = end + context_chars;
        Some(text.chars().skip(from).take(to - from).collect())
    })
}

/// Up to `max` trimmed sentences of `content` that mention any token.
pub fn matching_sentences(content: &str, tokens: &[String], max: usize) -> Vec<String> {
    content
        .split(SENTENCE_ENDS)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            tokens.iter().any(|token| lowered.contains(token.as_str()))
        })
        .take(max)
        .map(str::to_string)
        .collect()
}

/// Highlights for one result.
pub fn highlights_for(result: &SearchResult, tokens: &[String], config: &HighlightConfig) -> Vec<String> {
    let mut highlights = Vec::new();
    if let Some(excerpt) = field_excerpt(&result.title, tokens, config.context_chars) {
        highlights.push(excerpt);
    }
    if let Some(excerpt) = field_excerpt(&result.description, tokens, config.context_chars) {
        highlights.push(excerpt);
    }
    highlights.extend(matching_sentences(
        &result.content,
        tokens,
        config.max_content_sentences,
    ));
    highlights
}

/// Populate `highlights` on every result from the raw query.
pub fn generate_highlights(results: &mut [SearchResult], query: &str, config: &HighlightConfig) {
    let tokens = tokenize(query);
    for result in results.iter_mut() {
        result.highlights = highlights_for(result, &tokens, config);
    }
}
