//! Export/import of full engine state.

use super::common::{assert_index_consistent, make_doc, portal_engine, search_ids};
use kensaku::{ContentSearchEngine, IndexSnapshot, SearchError, SearchOptions};
use serde_json::{json, Value};

#[test]
fn test_roundtrip_preserves_search() {
    let original = portal_engine();
    let mut restored = ContentSearchEngine::new();
    restored.import_index(original.export_index()).unwrap();

    assert_eq!(restored.export_index(), original.export_index());
    assert_eq!(
        restored.search(&SearchOptions::new("react")),
        original.search(&SearchOptions::new("react"))
    );
    assert_index_consistent(&restored);
}

#[test]
fn test_json_shape() {
    let engine = portal_engine();
    let value = serde_json::to_value(engine.export_index()).unwrap();

    assert_eq!(value["index"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["index"][0]["contentId"], json!("1"));
    assert_eq!(value["invertedIndex"]["react"], json!(["1", "2"]));
}

#[test]
fn test_import_from_json_text() {
    let raw = r#"{
        "index": [
            { "id": "x", "contentId": "x", "title": "Hello World", "tags": ["greeting"] }
        ],
        "invertedIndex": { "hello": ["x"], "world": ["x"], "greeting": ["x"] }
    }"#;
    let snapshot: IndexSnapshot = serde_json::from_str(raw).unwrap();
    let mut engine = ContentSearchEngine::new();
    engine.import_index(snapshot).unwrap();

    assert_eq!(search_ids(&engine, "hello"), vec!["x"]);
    assert_eq!(engine.get_index_stats().total_tokens, 3);
}

#[test]
fn test_import_replaces_state() {
    let mut engine = ContentSearchEngine::new();
    engine.add_content(make_doc("old", "legacy")).unwrap();
    engine.import_index(portal_engine().export_index()).unwrap();

    assert!(!engine.contains("old"));
    assert!(search_ids(&engine, "legacy").is_empty());
    assert_eq!(engine.len(), 3);
}

#[test]
fn test_import_then_mutate() {
    let mut engine = ContentSearchEngine::new();
    engine.import_index(portal_engine().export_index()).unwrap();
    engine.remove_content("1");

    assert_eq!(search_ids(&engine, "react"), vec!["2"]);
    assert_index_consistent(&engine);
}

fn rejects(value: Value) -> SearchError {
    let snapshot: IndexSnapshot = serde_json::from_value(value).unwrap();
    let mut engine = portal_engine();
    let before = engine.export_index();
    let err = engine.import_index(snapshot).unwrap_err();
    assert_eq!(engine.export_index(), before, "failed import changed state");
    err
}

#[test]
fn test_rejects_duplicate_ids() {
    let err = rejects(json!({
        "index": [{ "id": "a", "contentId": "a" }, { "id": "a", "contentId": "a" }],
        "invertedIndex": {}
    }));
    assert_eq!(err.code(), "invalid_snapshot");
}

#[test]
fn test_rejects_unknown_postings() {
    let err = rejects(json!({
        "index": [{ "id": "a", "contentId": "a" }],
        "invertedIndex": { "ghost": ["b"] }
    }));
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn test_rejects_empty_postings() {
    let err = rejects(json!({
        "index": [{ "id": "a", "contentId": "a" }],
        "invertedIndex": { "lonely": [] }
    }));
    assert!(matches!(err, SearchError::InvalidSnapshot(_)));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let parsed: Result<IndexSnapshot, _> = serde_json::from_str(r#"{ "index": 5 }"#);
    assert!(parsed.is_err());
}
