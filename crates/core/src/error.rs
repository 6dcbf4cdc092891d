// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-core operations.

use thiserror::Error;

/// All possible errors that can occur in kb-core operations.
///
/// The projection engine itself never fails; these cover the boundaries
/// around it (mode parsing, board documents, selection persistence).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid grouping mode: '{0}'\n  hint: valid modes are: status, user, priority")]
    InvalidGrouping(String),

    #[error("invalid ordering mode: '{0}'\n  hint: valid modes are: priority, title")]
    InvalidOrdering(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for kb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
