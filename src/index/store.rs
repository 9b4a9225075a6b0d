// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document store, kept in lockstep with the inverted index.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use super::InvertedIndex;
use crate::error::{Result, SearchError};
use crate::tokenizer::unique_tokens;
use crate::types::{IndexSnapshot, IndexStats, IndexedDocument};

/// A document together with the exact token set it put into the index.
///
/// Keeping the set means removal never has to re-tokenize, and can't miss a
/// token if tokenization rules ever change between add and remove.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub document: IndexedDocument,
    pub tokens: BTreeSet<String>,
}

/// Id → document, plus the inverted index built from those documents.
#[derive(Debug, Clone, Default)]
pub struct IndexStore {
    documents: BTreeMap<String, StoredDocument>,
    inverted: InvertedIndex,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `doc`, fully replacing any previous document with the same id.
    pub fn upsert(&mut self, doc: IndexedDocument) {
        let tokens = unique_tokens(doc.searchable_text());
        self.upsert_with_tokens(doc, tokens);
    }

    /// Insert with a token set computed by the caller.
    pub(crate) fn upsert_with_tokens(&mut self, doc: IndexedDocument, tokens: BTreeSet<String>) {
        let replaced = self.remove(&doc.id).is_some();
        self.inverted.insert(&doc.id, &tokens);
        debug!(
            id = %doc.id,
            tokens = tokens.len(),
            replaced,
            "indexed document"
        );
        self.documents.insert(
            doc.id.clone(),
            StoredDocument {
                document: doc,
                tokens,
            },
        );
    }

    /// Delete a document and its postings. Returns the removed document.
    pub fn remove(&mut self, id: &str) -> Option<IndexedDocument> {
        let stored = self.documents.remove(id)?;
        self.inverted.remove(id, &stored.tokens);
        Some(stored.document)
    }

    pub fn get(&self, id: &str) -> Option<&StoredDocument> {
        self.documents.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    /// Documents in id order.
    pub fn documents(&self) -> impl Iterator<Item = &IndexedDocument> {
        self.documents.values().map(|stored| &stored.document)
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn clear(&mut self) {
        self.documents.clear();
        self.inverted.clear();
    }

    pub fn stats(&self) -> IndexStats {
        let total_content = self.documents.len();
        let total_tokens = self.inverted.len();
        let average_tokens_per_content = if total_content == 0 {
            0.0
        } else {
            total_tokens as f64 / total_content as f64
        };
        IndexStats {
            total_content,
            total_tokens,
            average_tokens_per_content,
        }
    }

    pub fn export(&self) -> IndexSnapshot {
        IndexSnapshot {
            index: self.documents().cloned().collect(),
            inverted_index: self.inverted.to_map(),
        }
    }

    /// Build a store from a snapshot, validating it first.
    ///
    /// Per-document token sets are recovered by inverting the snapshot's
    /// postings, so the restored index is exactly the exported one, even if
    /// it was produced under different tokenization rules.
    pub fn from_snapshot(snapshot: IndexSnapshot) -> Result<Self> {
        validate_snapshot(&snapshot)?;

        let mut tokens_by_doc: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
        for (token, ids) in &snapshot.inverted_index {
            for id in ids {
                tokens_by_doc
                    .entry(id.as_str())
                    .or_default()
                    .insert(token.clone());
            }
        }

        let mut store = IndexStore::new();
        for doc in &snapshot.index {
            let tokens = tokens_by_doc.remove(doc.id.as_str()).unwrap_or_default();
            store.inverted.insert(&doc.id, &tokens);
            store.documents.insert(
                doc.id.clone(),
                StoredDocument {
                    document: doc.clone(),
                    tokens,
                },
            );
        }
        Ok(store)
    }
}

/// Reject snapshots that can't describe a consistent index.
fn validate_snapshot(snapshot: &IndexSnapshot) -> Result<()> {
    let mut ids: BTreeSet<&str> = BTreeSet::new();
    for doc in &snapshot.index {
        if !ids.insert(doc.id.as_str()) {
            return Err(invalid(format!("duplicate document id '{}'", doc.id)));
        }
    }

    for (token, postings) in &snapshot.inverted_index {
        if token.is_empty() {
            return Err(invalid("empty token key".to_string()));
        }
        if postings.is_empty() {
            return Err(invalid(format!("token '{}' has no document ids", token)));
        }
        if let Some(unknown) = postings.iter().find(|id| !ids.contains(id.as_str())) {
            return Err(invalid(format!(
                "token '{}' references unknown document '{}'",
                token, unknown
            )));
        }
    }
    Ok(())
}

fn invalid(reason: String) -> SearchError {
    warn!(%reason, "rejected index snapshot");
    SearchError::InvalidSnapshot(reason)
}
