// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory content search for a knowledge portal.
//!
//! An inverted index over titles, descriptions, bodies, tags and categories,
//! with exact, substring and typo-tolerant matching, weighted ranking,
//! structured filters, pagination and highlight excerpts. Japanese and Latin
//! text both work; kana and kanji runs are kept whole and matched by substring.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ tokenizer.rs │──▶│   index/     │──▶│   search/    │──▶│  scoring/    │
//! │ (tokenize,   │   │ (IndexStore, │   │ (matcher,    │   │ (weights,    │
//! │  stop words) │   │  Inverted)   │   │  filter,     │   │  ranking)    │
//! └──────────────┘   └──────────────┘   │  highlight)  │   └──────────────┘
//!                           ▲           └──────────────┘
//!                           │                  ▲
//!                    ┌──────┴──────────────────┴─────┐
//!                    │ engine.rs (ContentSearchEngine)│
//!                    └───────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use kensaku::{ContentSearchEngine, IndexedDocument, SearchOptions, SortBy, SortOrder};
//!
//! let mut engine = ContentSearchEngine::new();
//! engine.add_content(
//!     IndexedDocument::new("1")
//!         .with_title("React入門ガイド")
//!         .with_tags(["React", "JavaScript"]),
//! ).unwrap();
//! engine.add_content(
//!     IndexedDocument::new("2")
//!         .with_title("Next.js実践講座")
//!         .with_tags(["Next.js", "React"]),
//! ).unwrap();
//!
//! let results = engine.search(
//!     &SearchOptions::new("React").with_sort(SortBy::Relevance, SortOrder::Desc),
//! );
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].id, "1");
//! ```

pub mod config;
mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
#[cfg(feature = "parallel")]
mod sync;
pub mod testing;
pub mod tokenizer;
mod types;

pub use config::{EngineConfig, FieldWeights, FuzzyConfig, HighlightConfig, ResourceLimits};
pub use engine::ContentSearchEngine;
pub use error::{Result, SearchError};
pub use fuzzy::{fuzzy_threshold, levenshtein_distance, levenshtein_within};
pub use search::matcher::MatchMode;
#[cfg(feature = "parallel")]
pub use sync::SharedSearchEngine;
pub use tokenizer::{is_stop_word, tokenize};
pub use types::{
    DateRange, IndexSnapshot, IndexStats, IndexedDocument, Metadata, SearchFilters,
    SearchOptions, SearchPage, SearchResult, SortBy, SortOrder, DEFAULT_LIMIT,
};
