// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.kb/config.toml` and includes:
//! - `data`: Optional path to the board document (relative to the project root or absolute)
//!
//! The last-used view selection lives next to it in `.kb/view.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".kb";
const CONFIG_FILE_NAME: &str = "config.toml";
const VIEW_FILE_NAME: &str = "view.json";

/// Project configuration stored in `.kb/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Board document to load when `--data` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl Config {
    /// Creates a config pointing at the given board document.
    pub fn new(data: Option<String>) -> Self {
        Config { data }
    }

    /// Loads configuration from the given `.kb/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.kb/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .kb directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    find_work_dir_from(&current)
}

/// Find the .kb directory by walking up from `start`
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Resolve the configured board document path, if any.
///
/// Relative paths are taken from the project root (the parent of `.kb/`).
pub fn get_data_path(work_dir: &Path, config: &Config) -> Option<PathBuf> {
    let data = config.data.as_deref()?;
    let data_path = Path::new(data);
    if data_path.is_absolute() {
        Some(data_path.to_path_buf())
    } else {
        Some(work_dir.parent().unwrap_or(work_dir).join(data_path))
    }
}

/// Path of the persisted view selection.
pub fn get_view_path(work_dir: &Path) -> PathBuf {
    work_dir.join(VIEW_FILE_NAME)
}

/// Initialize a new .kb directory at the given path
pub fn init_work_dir(path: &Path, data: Option<&str>) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;

    let config = Config::new(data.map(String::from));
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
