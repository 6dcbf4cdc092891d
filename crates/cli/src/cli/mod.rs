// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::help;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for rendering the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "kb")]
#[command(version)]
#[command(about = "A kanban board viewer that groups and orders tickets into columns")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a board in the current directory
    #[command(after_help = "Examples:\n  \
        kb init                      Create .kb/ without a data file\n  \
        kb init --data board.json    Remember the board document to load")]
    Init {
        /// Board document to load by default (relative to this directory)
        #[arg(long)]
        data: Option<String>,
    },

    /// Render the board with the saved view selection
    #[command(after_help = "Examples:\n  \
        kb show                          Render with the saved selection\n  \
        kb show -g user -o title         Override for this run only\n  \
        cat board.json | kb show --data -  Read the board from stdin\n  \
        kb show --format json            Machine-readable output")]
    Show {
        /// Board document, or '-' for stdin (defaults to the configured data file)
        #[arg(long, short)]
        data: Option<String>,

        /// Grouping mode for this run (status, user, priority)
        #[arg(long = "group", short = 'g')]
        group: Option<String>,

        /// Ordering mode for this run (priority, title)
        #[arg(long = "order", short = 'o')]
        order: Option<String>,

        /// Output format (text, json)
        #[arg(long, short = 'f', value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Change and save the grouping mode, then render
    #[command(arg_required_else_help = true)]
    Group {
        /// Grouping mode (status, user, priority)
        mode: String,
    },

    /// Change and save the ordering mode, then render
    #[command(arg_required_else_help = true)]
    Order {
        /// Ordering mode (priority, title)
        mode: String,
    },

    /// Print the saved view selection
    View,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
