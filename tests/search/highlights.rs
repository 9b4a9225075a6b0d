//! Highlight excerpts attached to returned results.

use super::common::{make_doc_with_content, portal_engine};
use kensaku::{ContentSearchEngine, EngineConfig, HighlightConfig, IndexedDocument, SearchOptions};

#[test]
fn test_portal_highlights() {
    let engine = portal_engine();
    let results = engine.search(&SearchOptions::new("react"));
    let first = &results[0];
    assert_eq!(first.id, "1");
    assert_eq!(
        first.highlights,
        vec![
            "React入門ガイド",
            "Reactの基礎を学ぶ",
            "Reactはコンポーネントベースのライブラリです",
        ]
    );

    // Matched only through a tag: nothing to excerpt.
    assert!(results[1].highlights.is_empty());
}

#[test]
fn test_title_window() {
    let mut engine = ContentSearchEngine::new();
    let title = format!("{} compiler {}", "a".repeat(40), "b".repeat(40));
    engine.add_content(IndexedDocument::new("1").with_title(&title)).unwrap();

    let results = engine.search(&SearchOptions::new("compiler"));
    let excerpt = &results[0].highlights[0];
    assert_eq!(
        excerpt,
        &format!("{} compiler {}", "a".repeat(19), "b".repeat(19))
    );
}

#[test]
fn test_content_sentences_capped() {
    let mut engine = ContentSearchEngine::new();
    engine
        .add_content(make_doc_with_content(
            "1",
            "notes",
            "Rust one. Other. Rust two! Rust three? Rust four.",
        ))
        .unwrap();
    let results = engine.search(&SearchOptions::new("rust"));
    assert_eq!(
        results[0].highlights,
        vec!["Rust one", "Rust two", "Rust three"]
    );
}

#[test]
fn test_configurable_sentence_count() {
    let config = EngineConfig {
        highlights: HighlightConfig {
            max_content_sentences: 1,
            ..HighlightConfig::default()
        },
        ..EngineConfig::default()
    };
    let mut engine = ContentSearchEngine::with_config(config);
    engine
        .add_content(make_doc_with_content("1", "notes", "Rust one. Rust two."))
        .unwrap();
    let results = engine.search(&SearchOptions::new("rust"));
    assert_eq!(results[0].highlights, vec!["Rust one"]);
}

#[test]
fn test_only_returned_page_is_highlighted() {
    let engine = portal_engine();
    let results = engine.search(&SearchOptions::new("react").with_offset(1));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "2");
}
