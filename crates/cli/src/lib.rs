// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kbrs - the library behind the `kb` kanban board CLI.
//!
//! The board document (tickets and users) is read from a JSON file or stdin
//! and projected into columns by [`kb_core`]. The last-used view selection is
//! kept per project in `.kb/view.json`.
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration (`.kb/config.toml`)
//! - [`FileSelectionStore`] - Persists the view selection between runs
//! - [`JsonFileSource`] / [`JsonReaderSource`] - Board data sources
//! - [`Error`] - Error types for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use kb_core::BoardView;
//! use kbrs::{find_work_dir, get_view_path, FileSelectionStore, JsonFileSource};
//!
//! let work_dir = find_work_dir()?;
//! let mut view = BoardView::new(FileSelectionStore::new(get_view_path(&work_dir)));
//! view.load(&JsonFileSource::new("board.json"));
//! view.select_grouping("user")?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
mod help;
pub mod timings;

pub mod config;
pub mod error;
pub mod source;
pub mod store;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, get_data_path, get_view_path, init_work_dir, Config};
pub use error::{Error, Result};
pub use source::{JsonFileSource, JsonReaderSource};
pub use store::FileSelectionStore;

use tracing_subscriber::EnvFilter;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { data } => commands::init::run(data),
        Command::Show {
            data,
            group,
            order,
            format,
        } => commands::show::run(data, group, order, format),
        Command::Group { mode } => commands::select::group(&mode),
        Command::Order { mode } => commands::select::order(&mode),
        Command::View => commands::view::run(),
    }
}

/// Build the log filter from `KB_LOG`, falling back to the default when the
/// variable is unset or not a valid directive.
pub fn log_filter() -> EnvFilter {
    env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(env::DEFAULT_LOG_FILTER))
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
