// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing.
//!
//! `TestContext` creates a temporary project with an initialized `.kb/`
//! directory whose config points at `board.json` in the project root.
//!
//! ```rust,ignore
//! use crate::commands::testing::{TestContext, SAMPLE_BOARD};
//!
//! #[test]
//! fn test_some_command() {
//!     let ctx = TestContext::new().with_board(SAMPLE_BOARD);
//!     let output = capture(|out| show::run_impl(out, Some(&ctx.work_dir), ...));
//! }
//! ```

use std::path::{Path, PathBuf};

use kb_core::{MemorySelectionStore, SelectionStore};
use tempfile::TempDir;

use crate::config::init_work_dir;
use crate::error::Result;

use super::*;

/// Two Todo tickets assigned to Alice, one urgent, one medium.
pub const SAMPLE_BOARD: &str = r#"{
  "tickets": [
    {"id": "1", "title": "B", "status": "Todo", "priority": 4, "userId": "1", "tag": ["x"]},
    {"id": "2", "title": "A", "status": "Todo", "priority": 2, "userId": "1", "tag": ["y"]}
  ],
  "users": [{"id": "1", "name": "Alice", "available": true}]
}"#;

/// Test context providing a temporary project directory.
pub struct TestContext {
    pub root: PathBuf,
    pub work_dir: PathBuf,
    _temp_dir: TempDir, // Keep alive for duration of test
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create an initialized project configured to read `board.json`.
    pub fn new() -> Self {
        Self::with_data(Some("board.json"))
    }

    /// Create an initialized project with an optional data file setting.
    pub fn with_data(data: Option<&str>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let work_dir = init_work_dir(&root, data).expect("Failed to init .kb");
        TestContext {
            root,
            work_dir,
            _temp_dir: temp_dir,
        }
    }

    /// Write the configured board document.
    pub fn with_board(self, json: &str) -> Self {
        std::fs::write(self.board_path(), json).unwrap();
        self
    }

    pub fn board_path(&self) -> PathBuf {
        self.root.join("board.json")
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// The selection currently saved in `.kb/view.json`.
    pub fn saved(&self) -> Option<kb_core::ViewSelection> {
        open_store(&self.work_dir).load_selection().unwrap()
    }
}

/// Run a command writing into a buffer and return what it wrote.
pub fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn saved_selection_defaults_without_work_dir() {
    assert_eq!(saved_selection(None), kb_core::ViewSelection::default());
}

#[test]
fn board_source_requires_data() {
    assert!(matches!(
        board_source(None, None),
        Err(crate::error::Error::NoBoardData)
    ));

    let ctx = TestContext::with_data(None);
    assert!(matches!(
        board_source(None, Some(ctx.work_dir())),
        Err(crate::error::Error::NoBoardData)
    ));
}

#[test]
fn board_source_prefers_explicit_path() {
    let ctx = TestContext::new();
    let other = ctx.root.join("other.json");
    std::fs::write(&other, SAMPLE_BOARD).unwrap();

    let source = board_source(other.to_str(), Some(ctx.work_dir())).unwrap();
    let board = source.fetch_board().unwrap();
    assert_eq!(board.tickets.len(), 2);
}

#[test]
fn board_source_uses_configured_file() {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    let source = board_source(None, Some(ctx.work_dir())).unwrap();
    assert_eq!(source.fetch_board().unwrap().users.len(), 1);
}

#[test]
fn missing_board_leaves_view_loading() {
    let ctx = TestContext::new();
    let source = board_source(None, Some(ctx.work_dir())).unwrap();
    let mut view = kb_core::BoardView::new(MemorySelectionStore::new());
    load_board(&mut view, source.as_ref());
    assert!(view.is_loading());
}
