//! Sort orders and score behavior.

use super::common::{ids, make_doc, numbered_engine, portal_engine};
use kensaku::{ContentSearchEngine, SearchOptions, SortBy, SortOrder};

fn sorted(engine: &ContentSearchEngine, query: &str, by: SortBy, order: SortOrder) -> Vec<String> {
    engine
        .search(&SearchOptions::new(query).with_sort(by, order))
        .into_iter()
        .map(|r| r.id)
        .collect()
}

#[test]
fn test_relevance_descending_by_default() {
    let engine = portal_engine();
    let results = engine.search(&SearchOptions::new("react"));
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_relevance_ascending() {
    let engine = portal_engine();
    assert_eq!(
        sorted(&engine, "react", SortBy::Relevance, SortOrder::Asc),
        vec!["2", "1"]
    );
}

#[test]
fn test_date_sort_falls_back_to_updated_at() {
    let engine = portal_engine();
    assert_eq!(
        sorted(&engine, "", SortBy::Date, SortOrder::Desc),
        vec!["2", "1", "3"]
    );
    assert_eq!(
        sorted(&engine, "", SortBy::Date, SortOrder::Asc),
        vec!["3", "1", "2"]
    );
}

#[test]
fn test_title_sort_ignores_case() {
    let engine = portal_engine();
    assert_eq!(
        sorted(&engine, "", SortBy::Title, SortOrder::Asc),
        vec!["2", "1", "3"]
    );
}

#[test]
fn test_popularity_sort() {
    let engine = portal_engine();
    assert_eq!(
        sorted(&engine, "", SortBy::Popularity, SortOrder::Desc),
        vec!["3", "1", "2"]
    );
}

#[test]
fn test_missing_views_count_as_zero() {
    let mut engine = numbered_engine();
    engine.add_content(make_doc("unviewed", "guide extra")).unwrap();
    let order = sorted(&engine, "guide", SortBy::Popularity, SortOrder::Asc);
    assert_eq!(order[0], "unviewed");
    assert_eq!(order.last().map(String::as_str), Some("doc5"));
}

#[test]
fn test_scores_are_normalized() {
    let mut engine = ContentSearchEngine::new();
    engine
        .add_content(make_doc("loud", "rust rust rust rust rust rust"))
        .unwrap();
    engine.add_content(make_doc("quiet", "rust")).unwrap();

    let results = engine.search(&SearchOptions::new("rust"));
    assert_eq!(ids(&results), vec!["loud", "quiet"]);
    assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.score)));
    assert_eq!(results[0].score, 1.0);
}

#[test]
fn test_more_tokens_dilute_score() {
    let mut engine = ContentSearchEngine::new();
    engine.add_content(make_doc("a", "rust")).unwrap();

    let single = engine.search(&SearchOptions::new("rust"))[0].score;
    let double = engine.search(&SearchOptions::new("rust zig"))[0].score;
    assert!((single - 0.3).abs() < 1e-9);
    assert!((double - 0.15).abs() < 1e-9);
}

#[test]
fn test_ties_keep_id_order() {
    let mut engine = ContentSearchEngine::new();
    for id in ["c", "a", "b"] {
        engine.add_content(make_doc(id, "same title")).unwrap();
    }
    assert_eq!(
        sorted(&engine, "same", SortBy::Relevance, SortOrder::Desc),
        vec!["a", "b", "c"]
    );
}
