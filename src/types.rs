// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows in and out of the engine.
//!
//! Callers hand us `IndexedDocument`s and `SearchOptions`, and get back
//! `SearchResult`s. Everything serializes as camelCase JSON so the shapes match
//! what web handlers already send around.
//!
//! | Type              | Direction | Purpose                                  |
//! |-------------------|-----------|------------------------------------------|
//! | `IndexedDocument` | in        | One searchable content item              |
//! | `SearchOptions`   | in        | Query, filters, sort, page               |
//! | `SearchFilters`   | in        | Structured constraints (AND of ORs)      |
//! | `SearchResult`    | out       | Scored, highlighted hit                  |
//! | `SearchPage`      | out       | One page of hits plus the total          |
//! | `IndexStats`      | out       | Document/token counts                    |
//! | `IndexSnapshot`   | in/out    | Full state for hand-off to a store       |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Open key-value bag attached to every document.
///
/// The engine only looks at a handful of keys: `difficulty`, `type`, `author`,
/// `createdAt`, `updatedAt` and `views`. Everything else rides along untouched.
pub type Metadata = serde_json::Map<String, Value>;

// =============================================================================
// DOCUMENTS
// =============================================================================

/// A content item as the caller wants it indexed.
///
/// `id` is the index key and must be unique. `content_id` points at the logical
/// content item and may differ (e.g. one item indexed once per locale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedDocument {
    pub id: String,
    pub content_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl IndexedDocument {
    /// A blank document whose `content_id` equals its `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            content_id: id.clone(),
            id,
            title: String::new(),
            description: String::new(),
            content: String::new(),
            tags: Vec::new(),
            categories: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = content_id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Every piece of text that feeds the inverted index, in field order.
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.content.as_str(),
        ]
        .into_iter()
        .chain(self.tags.iter().map(String::as_str))
        .chain(self.categories.iter().map(String::as_str))
    }

    /// Total UTF-8 size of the searchable text.
    pub fn text_bytes(&self) -> usize {
        self.searchable_text().map(str::len).sum()
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One search hit. Built fresh for every call and never touched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Index key of the matching document.
    pub id: String,
    pub content_id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    /// Relevance in `[0, 1]`; always 0 in browse mode.
    pub score: f64,
    /// Title excerpt, description excerpt, then up to three content sentences.
    pub highlights: Vec<String>,
    pub metadata: Metadata,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

impl SearchResult {
    /// Unscored, unhighlighted stub for a candidate document.
    pub fn from_document(doc: &IndexedDocument) -> Self {
        Self {
            id: doc.id.clone(),
            content_id: doc.content_id.clone(),
            title: doc.title.clone(),
            description: doc.description.clone(),
            content: doc.content.clone(),
            score: 0.0,
            highlights: Vec::new(),
            metadata: doc.metadata.clone(),
            tags: doc.tags.clone(),
            categories: doc.categories.clone(),
        }
    }
}

/// A page of results together with the number of hits before slicing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub total: usize,
    pub results: Vec<SearchResult>,
}

// =============================================================================
// QUERIES
// =============================================================================

/// Inclusive date window for the `dateRange` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Structured constraints. A document must satisfy every non-empty field and,
/// within a field, at least one of the listed values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub date_range: Option<DateRange>,
    pub difficulty: Vec<String>,
    #[serde(rename = "type")]
    pub content_type: Vec<String>,
    pub author: Vec<String>,
}

impl SearchFilters {
    /// True when no field constrains anything.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.tags.is_empty()
            && self.date_range.is_none()
            && self.difficulty.is_empty()
            && self.content_type.is_empty()
            && self.author.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Date,
    /// Case-folded code-point order, not locale collation: kana and kanji
    /// sort by Unicode value.
    Title,
    Popularity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "date" => Ok(SortBy::Date),
            "title" => Ok(SortBy::Title),
            "popularity" => Ok(SortBy::Popularity),
            other => Err(format!(
                "unknown sort key '{}' (expected relevance, date, title or popularity)",
                other
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}' (expected asc or desc)", other)),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortBy::Relevance => "relevance",
            SortBy::Date => "date",
            SortBy::Title => "title",
            SortBy::Popularity => "popularity",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Default page size when the caller doesn't ask for one.
pub const DEFAULT_LIMIT: usize = 20;

/// Everything a single search call needs.
///
/// An empty `query` switches to browse mode: every document that passes the
/// filters comes back, sorted and paged, with score 0 and no highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub query: String,
    pub filters: Option<SearchFilters>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub limit: usize,
    pub offset: usize,
    pub fuzzy: bool,
    pub exact_match: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: None,
            sort_by: SortBy::Relevance,
            sort_order: SortOrder::Desc,
            limit: DEFAULT_LIMIT,
            offset: 0,
            fuzzy: false,
            exact_match: false,
        }
    }
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    /// Browse mode: the query has nothing but whitespace in it.
    pub fn is_browse(&self) -> bool {
        self.query.trim().is_empty()
    }
}

// =============================================================================
// INDEX STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub total_content: usize,
    pub total_tokens: usize,
    pub average_tokens_per_content: f64,
}

/// Full engine state: every document plus the token → ids mapping.
///
/// Token keys and id lists are sorted, so two exports of the same state are
/// byte-identical once serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSnapshot {
    pub index: Vec<IndexedDocument>,
    pub inverted_index: BTreeMap<String, Vec<String>>,
}
