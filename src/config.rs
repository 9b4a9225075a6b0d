// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine tuning knobs.
//!
//! The defaults reproduce the portal's original ranking: title ×3,
//! description ×2, content ×1, tags ×2, categories ×1.5, normalized by
//! ten points per query token. Fuzzy matching allows `max(1, ⌊0.3·len⌋)` edits.
//!
//! Every field has a default, so a JSON config only needs the keys it changes:
//!
//! ```json
//! { "weights": { "title": 5.0 }, "limits": { "maxDocumentBytes": 65536 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::scoring::{
    CATEGORY_WEIGHT, CONTENT_WEIGHT, DESCRIPTION_WEIGHT, MAX_TOKEN_WEIGHT, TAG_WEIGHT,
    TITLE_WEIGHT,
};

/// Per-field multipliers applied to occurrence counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub content: f64,
    /// Applied to each tag separately.
    pub tag: f64,
    /// Applied to each category separately.
    pub category: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: TITLE_WEIGHT,
            description: DESCRIPTION_WEIGHT,
            content: CONTENT_WEIGHT,
            tag: TAG_WEIGHT,
            category: CATEGORY_WEIGHT,
        }
    }
}

/// Edit-distance budget for fuzzy matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuzzyConfig {
    /// Allowed edits per query-token character, floored.
    pub distance_ratio: f64,
    /// Floor on the allowed edits, so short tokens still tolerate a typo.
    pub min_distance: usize,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            distance_ratio: 0.3,
            min_distance: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightConfig {
    /// Characters kept on each side of a title/description match.
    pub context_chars: usize,
    /// Maximum number of content sentences returned.
    pub max_content_sentences: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            context_chars: 20,
            max_content_sentences: 3,
        }
    }
}

/// Guards against unbounded memory growth from oversized input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceLimits {
    /// Maximum UTF-8 size of a document's searchable text.
    pub max_document_bytes: usize,
    /// Maximum length of a single token, in characters.
    pub max_token_chars: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_document_bytes: 4 * 1024 * 1024,
            max_token_chars: 1024,
        }
    }
}

/// Everything configurable about a `ContentSearchEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub weights: FieldWeights,
    /// Normalization divisor per query token.
    pub max_token_weight: f64,
    /// Clamp normalized scores into `[0, 1]`.
    pub clamp_scores: bool,
    pub fuzzy: FuzzyConfig,
    pub highlights: HighlightConfig,
    pub limits: ResourceLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            max_token_weight: MAX_TOKEN_WEIGHT,
            clamp_scores: true,
            fuzzy: FuzzyConfig::default(),
            highlights: HighlightConfig::default(),
            limits: ResourceLimits::default(),
        }
    }
}
