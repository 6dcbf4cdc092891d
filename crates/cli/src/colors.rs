// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for board output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

/// ANSI 256-color codes for board output
pub mod codes {
    /// Column headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Tags: light grey
    pub const LITERAL: u8 = 250;
    /// Ticket ids and counts: medium grey
    pub const CONTEXT: u8 = 245;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    pub const CONTEXT_START: &str = "\x1b[38;5;245m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if crate::env::no_color() {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if crate::env::force_color() {
        return true;
    }

    // Default: enable colors only if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Apply header color (column titles) to text.
pub fn header(text: &str) -> String {
    format!("{}{}{}", fg256(codes::HEADER), text, RESET)
}

/// Apply literal color (tags) to text.
pub fn literal(text: &str) -> String {
    format!("{}{}{}", fg256(codes::LITERAL), text, RESET)
}

/// Apply context color (ids, counts) to text.
pub fn context(text: &str) -> String {
    format!("{}{}{}", fg256(codes::CONTEXT), text, RESET)
}

/// A painter that either colors text or passes it through.
///
/// Rendering code takes one of these so output is identical across
/// terminals and pipes apart from the escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// Palette matching the current terminal and environment.
    pub fn detect() -> Self {
        Palette::new(should_colorize())
    }

    pub fn plain() -> Self {
        Palette::new(false)
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, header)
    }

    pub fn literal(&self, text: &str) -> String {
        self.paint(text, literal)
    }

    pub fn context(&self, text: &str) -> String {
        self.paint(text, context)
    }

    fn paint(&self, text: &str, color: fn(&str) -> String) -> String {
        if self.enabled {
            color(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
