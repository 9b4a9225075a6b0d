//! Search invariants over random corpora and queries.

use std::collections::BTreeSet;

use super::{corpus_strategy, mixed_word_strategy, text_strategy};
use kensaku::{ContentSearchEngine, IndexedDocument, SearchOptions, SortBy, SortOrder};
use proptest::prelude::*;

fn engine_from(corpus: Vec<IndexedDocument>) -> ContentSearchEngine {
    let mut engine = ContentSearchEngine::new();
    for d in corpus {
        engine.add_content(d).unwrap();
    }
    engine
}

fn sort_strategy() -> impl Strategy<Value = (SortBy, SortOrder)> {
    (
        prop::sample::select(vec![
            SortBy::Relevance,
            SortBy::Date,
            SortBy::Title,
            SortBy::Popularity,
        ]),
        prop::sample::select(vec![SortOrder::Asc, SortOrder::Desc]),
    )
}

proptest! {
    /// Property: scores stay in [0, 1], ids are unique, limit is respected.
    #[test]
    fn prop_results_well_formed(
        corpus in corpus_strategy(),
        query in text_strategy(),
        fuzzy in any::<bool>(),
        exact in any::<bool>(),
        limit in 0usize..10,
    ) {
        let engine = engine_from(corpus);
        let options = SearchOptions::new(query)
            .with_fuzzy(fuzzy)
            .with_exact_match(exact)
            .with_limit(limit);
        let page = engine.search_page(&options);

        prop_assert!(page.results.len() <= limit);
        prop_assert!(page.results.len() <= page.total);
        let unique: BTreeSet<_> = page.results.iter().map(|r| &r.id).collect();
        prop_assert_eq!(unique.len(), page.results.len());
        for r in &page.results {
            prop_assert!((0.0..=1.0).contains(&r.score), "score {}", r.score);
            prop_assert!(engine.contains(&r.id));
        }
    }

    /// Property: any page is the matching slice of the unpaged order.
    #[test]
    fn prop_pagination_is_slicing(
        corpus in corpus_strategy(),
        query in text_strategy(),
        (sort_by, sort_order) in sort_strategy(),
        offset in 0usize..6,
        limit in 0usize..6,
    ) {
        let engine = engine_from(corpus);
        let base = SearchOptions::new(query).with_sort(sort_by, sort_order);
        let full: Vec<String> = engine
            .search(&base.clone().with_limit(usize::MAX))
            .into_iter()
            .map(|r| r.id)
            .collect();
        let page: Vec<String> = engine
            .search(&base.with_offset(offset).with_limit(limit))
            .into_iter()
            .map(|r| r.id)
            .collect();

        let expected: Vec<String> = full.into_iter().skip(offset).take(limit).collect();
        prop_assert_eq!(page, expected);
    }

    /// Property: exact hits are a subset of partial hits.
    #[test]
    fn prop_exact_within_partial(corpus in corpus_strategy(), word in mixed_word_strategy()) {
        let engine = engine_from(corpus);
        let unbounded = |options: SearchOptions| -> BTreeSet<String> {
            engine
                .search(&options.with_limit(usize::MAX))
                .into_iter()
                .map(|r| r.id)
                .collect()
        };
        let exact = unbounded(SearchOptions::new(word.clone()).with_exact_match(true));
        let partial = unbounded(SearchOptions::new(word.clone()));
        let fuzzy = unbounded(SearchOptions::new(word).with_fuzzy(true));

        prop_assert!(exact.is_subset(&partial));
        prop_assert!(exact.is_subset(&fuzzy));
    }

    /// Property: any word taken from a document's title finds that document.
    #[test]
    fn prop_indexed_word_is_found(corpus in corpus_strategy()) {
        let engine = engine_from(corpus);
        for doc in engine.export_index().index {
            for word in kensaku::tokenize(&doc.title) {
                let hits = engine.search(
                    &SearchOptions::new(word.clone()).with_limit(usize::MAX),
                );
                prop_assert!(
                    hits.iter().any(|r| r.id == doc.id),
                    "'{}' did not find {}", word, doc.id
                );
            }
        }
    }

    /// Property: browse returns every document, unscored.
    #[test]
    fn prop_browse_lists_everything(corpus in corpus_strategy()) {
        let engine = engine_from(corpus);
        let page = engine.search_page(&SearchOptions::new("").with_limit(usize::MAX));
        prop_assert_eq!(page.total, engine.len());
        prop_assert!(page.results.iter().all(|r| r.score == 0.0 && r.highlights.is_empty()));
    }
}
