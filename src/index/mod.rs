// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index state: the documents and the token → ids mapping built from them.
//!
//! Two structures, always mutated together:
//! - **Document store**: id → document plus the tokens it contributed
//! - **Inverted index**: token → ids of documents containing it
//!
//! # Invariants
//!
//! 1. **NO_EMPTY_POSTINGS**: a token whose id set becomes empty is deleted
//! 2. **POSTINGS_MATCH_DOCS**: `id ∈ postings(t)` iff document `id` stores token `t`
//! 3. **REPLACE_NOT_MERGE**: re-adding an id drops every token of the old version

mod inverted;
mod store;

pub use inverted::*;
pub use store::*;
