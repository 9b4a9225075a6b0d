//! Index bookkeeping under arbitrary mutation sequences.

use super::common::assert_index_consistent;
use super::{corpus_strategy, document_strategy, op_strategy, Op};
use kensaku::ContentSearchEngine;
use proptest::prelude::*;

fn apply(engine: &mut ContentSearchEngine, op: Op) {
    match op {
        Op::Add(doc) => engine.add_content(doc).unwrap(),
        Op::Update(doc) => engine.update_content(doc).unwrap(),
        Op::Remove(id) => {
            engine.remove_content(&format!("d{}", id));
        }
    }
}

proptest! {
    /// Property: after any sequence of mutations, every posting is live and
    /// stats agree with the index.
    #[test]
    fn prop_index_consistent_after_ops(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let mut engine = ContentSearchEngine::new();
        for op in ops {
            apply(&mut engine, op);
        }
        assert_index_consistent(&engine);
    }

    /// Property: adding the same document twice leaves the same state as once.
    #[test]
    fn prop_add_is_idempotent(corpus in corpus_strategy(), doc in document_strategy()) {
        let mut once = ContentSearchEngine::new();
        for d in corpus.iter().cloned() {
            once.add_content(d).unwrap();
        }
        let mut twice = once.clone();

        once.add_content(doc.clone()).unwrap();
        twice.add_content(doc.clone()).unwrap();
        twice.add_content(doc).unwrap();

        prop_assert_eq!(once.export_index(), twice.export_index());
    }

    /// Property: the state after add-then-remove equals the state without the
    /// document at all.
    #[test]
    fn prop_remove_undoes_add(corpus in corpus_strategy(), doc in document_strategy()) {
        let mut without = ContentSearchEngine::new();
        for d in corpus.iter().filter(|d| d.id != doc.id).cloned() {
            without.add_content(d).unwrap();
        }
        let mut with = without.clone();
        with.add_content(doc.clone()).unwrap();
        with.remove_content(&doc.id);

        prop_assert_eq!(with.export_index(), without.export_index());
    }

    /// Property: export then import reproduces the exact state.
    #[test]
    fn prop_snapshot_roundtrip(corpus in corpus_strategy()) {
        let mut engine = ContentSearchEngine::new();
        for d in corpus {
            engine.add_content(d).unwrap();
        }
        let json = serde_json::to_string(&engine.export_index()).unwrap();

        let mut restored = ContentSearchEngine::new();
        restored.import_index(serde_json::from_str(&json).unwrap()).unwrap();
        prop_assert_eq!(restored.export_index(), engine.export_index());
        assert_index_consistent(&restored);
    }
}
