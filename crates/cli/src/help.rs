// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::{Ansi256Color, Color, Style, Styles};

fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Generate clap Styles for help output using the board palette.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_board}
  {show}   Render the board
  {group}  Change and save the grouping mode
  {order}  Change and save the ordering mode
  {view}   Print the saved view selection

{header_setup}
  {init}   Initialize a board in this directory
",
        header_board = colors::header("Board:"),
        header_setup = colors::header("Setup:"),
        show = colors::literal("show"),
        group = colors::literal("group"),
        order = colors::literal("order"),
        view = colors::literal("view"),
        init = colors::literal("init"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    format!(
        "\
{}
  kb init --data board.json   Point the board at a data file
  kb show                     Render columns by status
  kb group user               Switch to one column per user
  kb order title              Sort cards by title
  kb show -g priority         Peek at another grouping without saving",
        colors::header("Get started:")
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
