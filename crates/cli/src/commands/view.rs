// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use kb_core::SelectionStore;

use crate::config::find_work_dir;
use crate::error::Result;

use super::open_store;

pub fn run() -> Result<()> {
    let work_dir = find_work_dir()?;
    let stdout = std::io::stdout();
    run_impl(&mut stdout.lock(), &work_dir)
}

/// Prints the saved selection. Unlike rendering, a corrupt record is an error
/// here so it can be noticed and fixed.
pub(crate) fn run_impl(out: &mut impl Write, work_dir: &Path) -> Result<()> {
    let selection = open_store(work_dir).load_selection()?.unwrap_or_default();
    writeln!(out, "{}", selection)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
