// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod select;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod view;

use std::io::Write;
use std::path::Path;

use kb_core::{BoardSource, BoardView, SelectionStore, ViewSelection};

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::config::{get_data_path, get_view_path, Config};
use crate::display::{format_board, format_board_json};
use crate::error::{Error, Result};
use crate::source::{JsonFileSource, JsonReaderSource};
use crate::store::FileSelectionStore;

/// `--data` value that reads the board document from stdin.
pub const STDIN_DATA: &str = "-";

/// Helper to open the selection store of a `.kb/` directory.
pub fn open_store(work_dir: &Path) -> FileSelectionStore {
    FileSelectionStore::new(get_view_path(work_dir))
}

/// The saved selection, or the defaults when there is no `.kb/` directory.
pub fn saved_selection(work_dir: Option<&Path>) -> ViewSelection {
    match work_dir {
        Some(dir) => BoardView::new(open_store(dir)).selection(),
        None => ViewSelection::default(),
    }
}

/// Pick the board source: an explicit `--data` argument wins over the
/// configured data file.
pub fn board_source(data: Option<&str>, work_dir: Option<&Path>) -> Result<Box<dyn BoardSource>> {
    match data {
        Some(STDIN_DATA) => return Ok(Box::new(JsonReaderSource::new(std::io::stdin()))),
        Some(path) => return Ok(Box::new(JsonFileSource::new(path))),
        None => {}
    }
    let work_dir = work_dir.ok_or(Error::NoBoardData)?;
    let config = Config::load(work_dir)?;
    let path = get_data_path(work_dir, &config).ok_or(Error::NoBoardData)?;
    Ok(Box::new(JsonFileSource::new(path)))
}

/// Fetch the board once. A source without data leaves the view loading.
pub fn load_board<S: SelectionStore>(view: &mut BoardView<S>, source: &dyn BoardSource) {
    crate::time_phase!("board::load", { view.load(source) });
}

/// Write the current projection in the requested format.
pub fn render<S: SelectionStore>(
    out: &mut impl Write,
    view: &BoardView<S>,
    format: OutputFormat,
    palette: &Palette,
) -> Result<()> {
    let rendered = crate::time_phase!("board::render", {
        match format {
            OutputFormat::Text => format_board(view, palette),
            OutputFormat::Json => format_board_json(view)?,
        }
    });
    writeln!(out, "{}", rendered)?;
    Ok(())
}
