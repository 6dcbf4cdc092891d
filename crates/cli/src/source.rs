// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board data sources.
//!
//! The board document is a JSON object `{"tickets": [...], "users": [...]}`.
//! A source that cannot be read or parsed yields no data; the board then
//! renders empty instead of failing.

use std::cell::RefCell;
use std::io::Read;
use std::path::{Path, PathBuf};

use kb_core::{BoardData, BoardSource};

use crate::error::Result;

/// Reads the board document from a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BoardData> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(BoardData::from_json(&content)?)
    }
}

impl BoardSource for JsonFileSource {
    fn fetch_board(&self) -> Option<BoardData> {
        match self.read() {
            Ok(board) => Some(report_warnings(board)),
            Err(e) => {
                tracing::warn!("failed to load board from {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// Reads the board document from any reader (e.g. stdin), once.
pub struct JsonReaderSource<R> {
    reader: RefCell<Option<R>>,
}

impl<R: Read> JsonReaderSource<R> {
    pub fn new(reader: R) -> Self {
        JsonReaderSource {
            reader: RefCell::new(Some(reader)),
        }
    }

    fn read(&self) -> Option<Result<BoardData>> {
        let mut reader = self.reader.borrow_mut().take()?;
        Some(read_board(&mut reader))
    }
}

fn read_board(reader: &mut impl Read) -> Result<BoardData> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(BoardData::from_json(&content)?)
}

impl<R: Read> BoardSource for JsonReaderSource<R> {
    /// Consumes the reader; later calls return `None`.
    fn fetch_board(&self) -> Option<BoardData> {
        match self.read()? {
            Ok(board) => Some(report_warnings(board)),
            Err(e) => {
                tracing::warn!("failed to read board from input: {}", e);
                None
            }
        }
    }
}

/// Logs recoverable problems in a freshly loaded board.
fn report_warnings(board: BoardData) -> BoardData {
    for (id, warning) in board.ticket_warnings() {
        tracing::warn!(ticket = %id, "{}", warning);
    }
    for id in board.duplicate_user_ids() {
        tracing::warn!(user = %id, "duplicate user id, first entry wins");
    }
    board
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
