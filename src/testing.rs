// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::engine::ContentSearchEngine;
use crate::types::IndexedDocument;

/// A document with just an id and a title.
pub fn make_doc(id: &str, title: &str) -> IndexedDocument {
    IndexedDocument::new(id).with_title(title)
}

/// A document with title and body text.
pub fn make_doc_with_content(id: &str, title: &str, content: &str) -> IndexedDocument {
    IndexedDocument::new(id).with_title(title).with_content(content)
}

/// The three-document portal fixture: two React courses and a TypeScript one.
pub fn portal_fixture() -> Vec<IndexedDocument> {
    vec![
        IndexedDocument::new("1")
            .with_title("React入門ガイド")
            .with_description("Reactの基礎を学ぶ")
            .with_content("Reactはコンポーネントベースのライブラリです。フックを使います。")
            .with_tags(["React", "JavaScript"])
            .with_categories(["プログラミング"])
            .with_meta("difficulty", "beginner")
            .with_meta("type", "article")
            .with_meta("author", "tanaka")
            .with_meta("createdAt", "2024-01-15T09:00:00Z")
            .with_meta("views", 1200),
        IndexedDocument::new("2")
            .with_title("Next.js実践講座")
            .with_description("SSRとルーティング")
            .with_content("Next.jsでアプリを作ります。サーバーレンダリングを学びます。")
            .with_tags(["Next.js", "React"])
            .with_meta("difficulty", "intermediate")
            .with_meta("type", "course")
            .with_meta("author", "suzuki")
            .with_meta("createdAt", "2024-03-02T09:00:00Z")
            .with_meta("views", 800),
        IndexedDocument::new("3")
            .with_title("TypeScript完全ガイド")
            .with_description("型で安全に")
            .with_content("TypeScriptは型付きのJavaScriptです。")
            .with_tags(["TypeScript"])
            .with_meta("difficulty", "advanced")
            .with_meta("type", "article")
            .with_meta("author", "tanaka")
            .with_meta("updatedAt", "2023-11-20")
            .with_meta("views", 2500),
    ]
}

/// An engine preloaded with `docs`. Panics if any document is rejected.
pub fn engine_with(docs: impl IntoIterator<Item = IndexedDocument>) -> ContentSearchEngine {
    let mut engine = ContentSearchEngine::new();
    for doc in docs {
        let id = doc.id.clone();
        if let Err(e) = engine.add_content(doc) {
            panic!("fixture document '{}' rejected: {}", id, e);
        }
    }
    engine
}
