// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;

#[test]
fn init_without_data() {
    let cli = Cli::try_parse_from(["kb", "init"]).unwrap();
    match cli.command {
        Command::Init { data } => assert!(data.is_none()),
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn init_with_data() {
    let cli = Cli::try_parse_from(["kb", "init", "--data", "board.json"]).unwrap();
    match cli.command {
        Command::Init { data } => assert_eq!(data.as_deref(), Some("board.json")),
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn command_is_required() {
    assert!(Cli::try_parse_from(["kb"]).is_err());
}
