// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snapshot import.
//!
//! Arbitrary JSON either imports into a consistent index or is rejected
//! without touching the engine's existing state.

#![no_main]

use kensaku::testing::{engine_with, portal_fixture};
use kensaku::{IndexSnapshot, SearchOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(snapshot) = serde_json::from_slice::<IndexSnapshot>(data) else {
        return;
    };

    let mut engine = engine_with(portal_fixture());
    let before = engine.export_index();

    match engine.import_index(snapshot) {
        Ok(()) => {
            // Postings only name live documents
            for (token, ids) in engine.inverted_index().iter() {
                assert!(!ids.is_empty(), "empty postings for {:?}", token);
                for id in ids {
                    assert!(engine.contains(id), "{:?} names missing {:?}", token, id);
                }
            }
            let exported = engine.export_index();
            let mut again = engine_with(Vec::new());
            again.import_index(exported.clone()).unwrap();
            assert_eq!(again.export_index(), exported);
            let _ = engine.search(&SearchOptions::new(""));
        }
        Err(_) => assert_eq!(engine.export_index(), before),
    }
});
