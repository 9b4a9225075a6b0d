// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kensaku command-line interface.
//!
//! Four subcommands: `index` builds a snapshot from a JSON array of
//! documents, `search` queries a snapshot, `stats` summarizes one and
//! `suggest` completes a prefix against its vocabulary.

pub mod display;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde_json::Value;

use kensaku::scoring::ranking::parse_date;
use kensaku::{DateRange, SearchFilters, SearchOptions, SortBy, SortOrder, DEFAULT_LIMIT};

#[derive(Parser)]
#[command(
    name = "kensaku",
    about = "In-memory content search over JSON document snapshots",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a snapshot from a JSON array of documents
    Index {
        /// JSON file holding an array of documents
        #[arg(short, long)]
        input: String,

        /// Where to write the snapshot
        #[arg(short, long)]
        output: String,

        /// Engine configuration (JSON); limits apply while indexing
        #[arg(long)]
        config: Option<String>,
    },

    /// Search a snapshot and display ranked results
    Search {
        /// Path to snapshot file
        snapshot: String,

        /// Search query; empty lists every document
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Number of ranked results to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Tolerate typos (edit distance scales with token length)
        #[arg(long)]
        fuzzy: bool,

        /// Whole-token matches only; wins over --fuzzy
        #[arg(long)]
        exact: bool,

        /// relevance, date, title or popularity
        #[arg(long, default_value = "relevance")]
        sort: SortBy,

        /// asc or desc
        #[arg(long, default_value = "desc")]
        order: SortOrder,

        /// Keep documents in any of these categories (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Keep documents with any of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Keep documents with any of these difficulty levels (repeatable)
        #[arg(long)]
        difficulty: Vec<String>,

        /// Keep documents of any of these content types (repeatable)
        #[arg(long = "type")]
        content_type: Vec<String>,

        /// Keep documents by any of these authors (repeatable)
        #[arg(long)]
        author: Vec<String>,

        /// Earliest creation date, inclusive
        #[arg(long, value_parser = parse_cli_date)]
        from: Option<DateTime<Utc>>,

        /// Latest creation date, inclusive
        #[arg(long, value_parser = parse_cli_date)]
        to: Option<DateTime<Utc>>,

        /// Engine configuration (JSON) used for ranking and highlights
        #[arg(long)]
        config: Option<String>,

        /// Print the result page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print document and token counts for a snapshot
    Stats {
        /// Path to snapshot file
        snapshot: String,
    },

    /// Complete a prefix against the snapshot vocabulary
    Suggest {
        /// Path to snapshot file
        snapshot: String,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of completions
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

/// Accepts the same date shapes as document metadata.
fn parse_cli_date(s: &str) -> Result<DateTime<Utc>, String> {
    parse_date(&Value::String(s.to_string()))
        .ok_or_else(|| format!("unrecognized date '{}'", s))
}

/// Filter arguments of the `search` subcommand.
#[derive(Debug, Default)]
pub struct FilterArgs {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub difficulty: Vec<String>,
    pub content_type: Vec<String>,
    pub author: Vec<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl FilterArgs {
    /// `None` when nothing was asked for. A one-sided date bound leaves the
    /// other side open.
    pub fn into_filters(self) -> Option<SearchFilters> {
        let date_range = match (self.from, self.to) {
            (None, None) => None,
            (start, end) => Some(DateRange {
                start: start.unwrap_or(DateTime::<Utc>::MIN_UTC),
                end: end.unwrap_or(DateTime::<Utc>::MAX_UTC),
            }),
        };
        let filters = SearchFilters {
            categories: self.categories,
            tags: self.tags,
            date_range,
            difficulty: self.difficulty,
            content_type: self.content_type,
            author: self.author,
        };
        (!filters.is_empty()).then_some(filters)
    }
}

/// Assemble search options from parsed arguments.
#[allow(clippy::too_many_arguments)]
pub fn build_options(
    query: String,
    limit: usize,
    offset: usize,
    fuzzy: bool,
    exact: bool,
    sort: SortBy,
    order: SortOrder,
    filters: FilterArgs,
) -> SearchOptions {
    let mut options = SearchOptions::new(query)
        .with_limit(limit)
        .with_offset(offset)
        .with_fuzzy(fuzzy)
        .with_exact_match(exact)
        .with_sort(sort, order);
    options.filters = filters.into_filters();
    options
}
