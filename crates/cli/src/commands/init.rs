// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::config::{get_data_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(data: Option<String>) -> Result<()> {
    let target_path = std::env::current_dir()?;
    let stdout = std::io::stdout();
    run_impl(&mut stdout.lock(), &target_path, data.as_deref())
}

/// Internal implementation that accepts the target path for testing.
pub(crate) fn run_impl(out: &mut impl Write, path: &Path, data: Option<&str>) -> Result<()> {
    let work_dir = init_work_dir(path, data)?;

    writeln!(out, "Initialized board at {}", work_dir.display())?;
    if let Some(data) = data {
        writeln!(out, "Data: {}", data)?;
        let config = Config::new(Some(data.to_string()));
        if let Some(data_path) = get_data_path(&work_dir, &config) {
            if !data_path.exists() {
                tracing::warn!("board document {} does not exist yet", data_path.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
