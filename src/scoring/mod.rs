// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! `core` turns occurrence counts into a weighted relevance score. `ranking`
//! orders results by whichever key the caller asked for.

mod core;
pub mod ranking;

pub use core::*;
