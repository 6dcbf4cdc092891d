// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the kbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'kb init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("no board data configured\n  hint: pass --data <file> (or '-' for stdin), or set 'data' in .kb/config.toml")]
    NoBoardData,

    #[error("invalid grouping mode: '{0}'\n  hint: valid modes are: status, user, priority")]
    InvalidGrouping(String),

    #[error("invalid ordering mode: '{0}'\n  hint: valid modes are: priority, title")]
    InvalidOrdering(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for kbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<kb_core::Error> for Error {
    fn from(e: kb_core::Error) -> Self {
        match e {
            kb_core::Error::InvalidGrouping(s) => Error::InvalidGrouping(s),
            kb_core::Error::InvalidOrdering(s) => Error::InvalidOrdering(s),
            kb_core::Error::Io(e) => Error::Io(e),
            kb_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
