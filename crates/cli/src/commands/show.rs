// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use kb_core::{BoardSource, BoardView, GroupingMode, MemorySelectionStore, OrderingMode};

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::config::find_work_dir;
use crate::error::Result;

use super::{board_source, load_board, render, saved_selection};

/// One-off overrides of the saved selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides<'a> {
    pub grouping: Option<&'a str>,
    pub ordering: Option<&'a str>,
}

pub fn run(
    data: Option<String>,
    group: Option<String>,
    order: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let work_dir = find_work_dir().ok();
    let overrides = Overrides {
        grouping: group.as_deref(),
        ordering: order.as_deref(),
    };
    let source = board_source(data.as_deref(), work_dir.as_deref())?;
    let stdout = std::io::stdout();
    run_impl(
        &mut stdout.lock(),
        work_dir.as_deref(),
        source.as_ref(),
        overrides,
        format,
        &Palette::detect(),
    )
}

/// Internal implementation that accepts its collaborators for testing.
///
/// The saved selection is read but never written: overrides apply to this
/// render only.
pub(crate) fn run_impl(
    out: &mut impl Write,
    work_dir: Option<&Path>,
    source: &dyn BoardSource,
    overrides: Overrides<'_>,
    format: OutputFormat,
    palette: &Palette,
) -> Result<()> {
    let mut selection = saved_selection(work_dir);
    if let Some(raw) = overrides.grouping {
        selection.grouping = raw.parse::<GroupingMode>()?;
    }
    if let Some(raw) = overrides.ordering {
        selection.ordering = raw.parse::<OrderingMode>()?;
    }

    let mut view = BoardView::with_selection(MemorySelectionStore::new(), selection);
    load_board(&mut view, source);
    render(out, &view, format, palette)
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
