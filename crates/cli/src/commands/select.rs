// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `kb group` and `kb order`: change one half of the saved selection.

use std::io::Write;
use std::path::Path;

use kb_core::BoardView;

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::config::{find_work_dir, get_data_path, Config};
use crate::error::Result;
use crate::source::JsonFileSource;

use super::{load_board, open_store, render};

/// Which half of the selection a command changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Grouping,
    Ordering,
}

pub fn group(mode: &str) -> Result<()> {
    run(Axis::Grouping, mode)
}

pub fn order(mode: &str) -> Result<()> {
    run(Axis::Ordering, mode)
}

fn run(axis: Axis, mode: &str) -> Result<()> {
    let work_dir = find_work_dir()?;
    let stdout = std::io::stdout();
    run_impl(&mut stdout.lock(), &work_dir, axis, mode, &Palette::detect())
}

/// Internal implementation that accepts the work dir for testing.
///
/// Renders the board when a data file is configured, otherwise prints the
/// new selection.
pub(crate) fn run_impl(
    out: &mut impl Write,
    work_dir: &Path,
    axis: Axis,
    mode: &str,
    palette: &Palette,
) -> Result<()> {
    let config = Config::load(work_dir)?;
    let mut view = BoardView::new(open_store(work_dir));
    if let Some(path) = get_data_path(work_dir, &config) {
        load_board(&mut view, &JsonFileSource::new(path));
    }

    match axis {
        Axis::Grouping => view.select_grouping(mode)?,
        Axis::Ordering => view.select_ordering(mode)?,
    }

    if config.data.is_some() {
        render(out, &view, OutputFormat::Text, palette)
    } else {
        writeln!(out, "{}", view.selection())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
