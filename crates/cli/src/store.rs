// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed persistence for the view selection.
//!
//! The record is a small JSON object, `{"grouping": "...", "ordering": "..."}`.

use std::fs;
use std::path::{Path, PathBuf};

use kb_core::{SelectionStore, ViewRecord, ViewSelection};

/// Stores the view selection in a JSON file (normally `.kb/view.json`).
#[derive(Debug, Clone)]
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSelectionStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for FileSelectionStore {
    /// A missing file means nothing was saved yet.
    fn load_selection(&self) -> kb_core::Result<Option<ViewSelection>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: ViewRecord = serde_json::from_str(&content)?;
        Ok(Some(record.into_selection()))
    }

    fn save_selection(&mut self, selection: &ViewSelection) -> kb_core::Result<()> {
        let record = ViewRecord::from(*selection);
        let content = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), %selection, "saved view selection");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
