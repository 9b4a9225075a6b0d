// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors the engine can report.
//!
//! Query paths never fail: a bad query degrades to browse mode or an empty
//! result list. Errors only come from mutations that would break a resource
//! limit and from snapshots that don't describe a consistent index.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("document '{id}' is {bytes} bytes, limit is {limit}")]
    DocumentTooLarge { id: String, bytes: usize, limit: usize },

    #[error("document '{id}' produced a {chars}-char token, limit is {limit}")]
    TokenTooLong { id: String, chars: usize, limit: usize },

    #[error("invalid index snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Short machine-readable code, handy for HTTP layers mapping errors to responses.
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::DocumentTooLarge { .. } => "document_too_large",
            SearchError::TokenTooLong { .. } => "token_too_long",
            SearchError::InvalidSnapshot(_) => "invalid_snapshot",
        }
    }
}
