//! Structured filters: AND across fields, OR within a field.

use super::common::{ids, make_doc, portal_engine};
use chrono::{TimeZone, Utc};
use kensaku::{ContentSearchEngine, DateRange, IndexedDocument, SearchFilters, SearchOptions};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn browse(engine: &ContentSearchEngine, filters: SearchFilters) -> Vec<String> {
    engine
        .search(&SearchOptions::new("").with_filters(filters))
        .into_iter()
        .map(|r| r.id)
        .collect()
}

#[test]
fn test_tags_are_or_within_field() {
    let engine = portal_engine();
    let filters = SearchFilters {
        tags: strings(&["TypeScript", "Next.js"]),
        ..Default::default()
    };
    let mut found = browse(&engine, filters);
    found.sort();
    assert_eq!(found, vec!["2", "3"]);
}

#[test]
fn test_fields_are_and_combined() {
    let engine = portal_engine();
    let filters = SearchFilters {
        tags: strings(&["TypeScript", "React"]),
        author: strings(&["tanaka"]),
        ..Default::default()
    };
    let mut found = browse(&engine, filters);
    found.sort();
    assert_eq!(found, vec!["1", "3"]);

    let narrower = SearchFilters {
        tags: strings(&["TypeScript", "React"]),
        author: strings(&["tanaka"]),
        difficulty: strings(&["advanced"]),
        ..Default::default()
    };
    assert_eq!(browse(&engine, narrower), vec!["3"]);
}

#[test]
fn test_categories_exclude_uncategorized() {
    let engine = portal_engine();
    let filters = SearchFilters {
        categories: strings(&["プログラミング"]),
        ..Default::default()
    };
    assert_eq!(browse(&engine, filters), vec!["1"]);
}

#[test]
fn test_tag_match_is_exact_string() {
    let engine = portal_engine();
    let filters = SearchFilters {
        tags: strings(&["react"]),
        ..Default::default()
    };
    assert!(browse(&engine, filters).is_empty());
}

#[test]
fn test_content_type_filter() {
    let engine = portal_engine();
    let results = engine.search(
        &SearchOptions::new("react").with_filters(SearchFilters {
            content_type: strings(&["course"]),
            ..Default::default()
        }),
    );
    assert_eq!(ids(&results), vec!["2"]);
}

#[test]
fn test_date_range_uses_updated_at_fallback() {
    let engine = portal_engine();
    let range = DateRange {
        start: Utc.with_ymd_and_hms(2023, 11, 1, 0, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap(),
    };
    let filters = SearchFilters {
        date_range: Some(range),
        ..Default::default()
    };
    assert_eq!(browse(&engine, filters), vec!["3"]);
}

#[test]
fn test_date_range_is_inclusive() {
    let engine = portal_engine();
    let exact = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let filters = SearchFilters {
        date_range: Some(DateRange {
            start: exact,
            end: exact,
        }),
        ..Default::default()
    };
    assert_eq!(browse(&engine, filters), vec!["1"]);
}

#[test]
fn test_missing_metadata_excludes() {
    let mut engine = portal_engine();
    engine.add_content(make_doc("4", "anonymous react notes")).unwrap();

    let filters = SearchFilters {
        author: strings(&["tanaka", "suzuki"]),
        ..Default::default()
    };
    let mut found = browse(&engine, filters);
    found.sort();
    assert_eq!(found, vec!["1", "2", "3"]);

    let dated = SearchFilters {
        date_range: Some(DateRange {
            start: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap(),
        }),
        ..Default::default()
    };
    assert_eq!(browse(&engine, dated).len(), 3);
}

#[test]
fn test_empty_filters_impose_nothing() {
    let engine = portal_engine();
    assert_eq!(browse(&engine, SearchFilters::default()).len(), 3);
}

#[test]
fn test_numeric_metadata_matches_as_text() {
    let mut engine = ContentSearchEngine::new();
    engine
        .add_content(IndexedDocument::new("a").with_title("level").with_meta("difficulty", 3))
        .unwrap();
    let filters = SearchFilters {
        difficulty: strings(&["3"]),
        ..Default::default()
    };
    assert_eq!(browse(&engine, filters), vec!["a"]);
}
