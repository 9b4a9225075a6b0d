// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public face of the crate.
//!
//! `ContentSearchEngine` owns its documents and index outright. Build one per
//! tenant, hand it to whatever service layer needs it, and mutate it through
//! `&mut self`. There's no global instance and no interior locking; share it
//! across threads with `SharedSearchEngine` or your own lock.

use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{Result, SearchError};
use crate::index::IndexStore;
use crate::search::{run_search, suggest};
use crate::tokenizer::unique_tokens;
use crate::types::{
    IndexSnapshot, IndexStats, IndexedDocument, SearchOptions, SearchPage, SearchResult,
};

/// In-memory content search: inverted index, fuzzy matching, weighted
/// ranking, filters and highlights.
///
/// ```
/// use kensaku::{ContentSearchEngine, IndexedDocument, SearchOptions};
///
/// let mut engine = ContentSearchEngine::new();
/// engine
///     .add_content(IndexedDocument::new("1").with_title("React入門ガイド"))
///     .unwrap();
///
/// let results = engine.search(&SearchOptions::new("react"));
/// assert_eq!(results[0].id, "1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentSearchEngine {
    config: EngineConfig,
    store: IndexStore,
}

impl ContentSearchEngine {
    /// Empty engine with the default ranking.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            store: IndexStore::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Index `doc`, fully replacing any document with the same id.
    ///
    /// Fails, leaving the index untouched, if the document breaks a resource
    /// limit.
    pub fn add_content(&mut self, doc: IndexedDocument) -> Result<()> {
        let limits = self.config.limits;

        let bytes = doc.text_bytes();
        if bytes > limits.max_document_bytes {
            warn!(id = %doc.id, bytes, "document exceeds size limit");
            return Err(SearchError::DocumentTooLarge {
                id: doc.id,
                bytes,
                limit: limits.max_document_bytes,
            });
        }

        let tokens = unique_tokens(doc.searchable_text());
        if let Some(chars) = tokens
            .iter()
            .map(|token| token.chars().count())
            .find(|&chars| chars > limits.max_token_chars)
        {
            warn!(id = %doc.id, chars, "document contains an oversized token");
            return Err(SearchError::TokenTooLong {
                id: doc.id,
                chars,
                limit: limits.max_token_chars,
            });
        }

        self.store.upsert_with_tokens(doc, tokens);
        Ok(())
    }

    /// Replace the document with `doc.id`, dropping every token of the old
    /// version. Indexes `doc` even if the id wasn't present.
    pub fn update_content(&mut self, doc: IndexedDocument) -> Result<()> {
        if !self.store.contains(&doc.id) {
            debug!(id = %doc.id, "update for unknown id, indexing as new");
        }
        self.add_content(doc)
    }

    /// Remove a document. Unknown ids are a no-op and return `None`.
    pub fn remove_content(&mut self, id: &str) -> Option<IndexedDocument> {
        let removed = self.store.remove(id);
        debug!(id, removed = removed.is_some(), "remove content");
        removed
    }

    /// Ranked results for `options`. Never fails: an empty query browses
    /// everything, a query with no usable tokens returns nothing.
    pub fn search(&self, options: &SearchOptions) -> Vec<SearchResult> {
        self.search_page(options).results
    }

    /// Like `search`, plus the number of hits before pagination.
    pub fn search_page(&self, options: &SearchOptions) -> SearchPage {
        run_search(&self.store, &self.config, options)
    }

    /// Vocabulary completions for `prefix`, most common first.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        suggest(self.store.inverted(), prefix, limit)
    }

    pub fn get_content(&self, id: &str) -> Option<&IndexedDocument> {
        self.store.get(id).map(|stored| &stored.document)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get_index_stats(&self) -> IndexStats {
        self.store.stats()
    }

    pub fn clear_index(&mut self) {
        self.store.clear();
        info!("index cleared");
    }

    /// Full state, suitable for handing to an external store.
    pub fn export_index(&self) -> IndexSnapshot {
        self.store.export()
    }

    /// Replace all state with `snapshot`.
    ///
    /// The snapshot is validated before anything is touched, so a bad one
    /// leaves the current index intact.
    pub fn import_index(&mut self, snapshot: IndexSnapshot) -> Result<()> {
        let store = IndexStore::from_snapshot(snapshot)?;
        self.store = store;
        info!(
            documents = self.store.len(),
            tokens = self.store.inverted().len(),
            "index imported"
        );
        Ok(())
    }

    /// Read-only view of the token → ids mapping.
    pub fn inverted_index(&self) -> &crate::index::InvertedIndex {
        self.store.inverted()
    }
}
