//! Offset/limit slicing of the sorted result list.

use super::common::{ids, numbered_engine, portal_engine};
use kensaku::{SearchOptions, SortBy, SortOrder, DEFAULT_LIMIT};

#[test]
fn test_page_is_slice_of_full_order() {
    let engine = numbered_engine();
    let base = SearchOptions::new("guide").with_sort(SortBy::Popularity, SortOrder::Desc);

    let full = engine.search(&base.clone().with_limit(100));
    let page = engine.search(&base.with_offset(2).with_limit(2));

    assert_eq!(ids(&page), ids(&full[2..4]));
    assert_eq!(ids(&page), vec!["doc3", "doc2"]);
}

#[test]
fn test_browse_pages_too() {
    let engine = numbered_engine();
    let options = SearchOptions::new("")
        .with_sort(SortBy::Date, SortOrder::Asc)
        .with_offset(3)
        .with_limit(10);
    let page = engine.search_page(&options);
    assert_eq!(page.total, 5);
    assert_eq!(ids(&page.results), vec!["doc4", "doc5"]);
}

#[test]
fn test_offset_past_end_is_empty() {
    let engine = portal_engine();
    let page = engine.search_page(&SearchOptions::new("react").with_offset(10));
    assert!(page.results.is_empty());
    assert_eq!(page.total, 2);
}

#[test]
fn test_zero_limit_is_empty() {
    let engine = portal_engine();
    assert!(engine.search(&SearchOptions::new("").with_limit(0)).is_empty());
}

#[test]
fn test_default_limit() {
    let engine = kensaku::testing::engine_with(
        (0..DEFAULT_LIMIT + 5).map(|i| kensaku::testing::make_doc(&format!("{:03}", i), "bulk")),
    );
    let page = engine.search_page(&SearchOptions::new("bulk"));
    assert_eq!(page.results.len(), DEFAULT_LIMIT);
    assert_eq!(page.total, DEFAULT_LIMIT + 5);
}
