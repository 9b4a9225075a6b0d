// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sharing one engine across threads.
//!
//! The engine itself has no locks. This handle wraps it in a reader-writer
//! lock: searches run concurrently, mutations get exclusive access. Cloning
//! the handle shares the same engine.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::ContentSearchEngine;
use crate::error::Result;
use crate::types::{
    IndexSnapshot, IndexStats, IndexedDocument, SearchOptions, SearchPage, SearchResult,
};

#[derive(Debug, Clone, Default)]
pub struct SharedSearchEngine {
    inner: Arc<RwLock<ContentSearchEngine>>,
}

impl SharedSearchEngine {
    pub fn new(engine: ContentSearchEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn add_content(&self, doc: IndexedDocument) -> Result<()> {
        self.inner.write().add_content(doc)
    }

    pub fn update_content(&self, doc: IndexedDocument) -> Result<()> {
        self.inner.write().update_content(doc)
    }

    pub fn remove_content(&self, id: &str) -> Option<IndexedDocument> {
        self.inner.write().remove_content(id)
    }

    pub fn search(&self, options: &SearchOptions) -> Vec<SearchResult> {
        self.inner.read().search(options)
    }

    pub fn search_page(&self, options: &SearchOptions) -> SearchPage {
        self.inner.read().search_page(options)
    }

    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.inner.read().suggest(prefix, limit)
    }

    /// Owned copy; a borrow can't outlive the read guard.
    pub fn get_content(&self, id: &str) -> Option<IndexedDocument> {
        self.inner.read().get_content(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn get_index_stats(&self) -> IndexStats {
        self.inner.read().get_index_stats()
    }

    pub fn clear_index(&self) {
        self.inner.write().clear_index();
    }

    pub fn export_index(&self) -> IndexSnapshot {
        self.inner.read().export_index()
    }

    pub fn import_index(&self, snapshot: IndexSnapshot) -> Result<()> {
        self.inner.write().import_index(snapshot)
    }

    /// Run `f` with shared access, for reads the handle doesn't forward.
    pub fn read<R>(&self, f: impl FnOnce(&ContentSearchEngine) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access, e.g. to apply a batch atomically.
    pub fn write<R>(&self, f: impl FnOnce(&mut ContentSearchEngine) -> R) -> R {
        f(&mut self.inner.write())
    }
}
