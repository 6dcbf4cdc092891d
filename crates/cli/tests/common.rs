// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Two Todo tickets assigned to Alice, one urgent, one medium.
pub const SAMPLE_BOARD: &str = r#"{
  "tickets": [
    {"id": 1, "title": "B", "status": "Todo", "priority": 4, "userId": 1, "tag": ["x"]},
    {"id": 2, "title": "A", "status": "Todo", "priority": 2, "userId": 1, "tag": ["y"]}
  ],
  "users": [{"id": 1, "name": "Alice", "available": true}]
}"#;

/// The `kb` binary with a plain, quiet environment.
pub fn kb() -> Command {
    let mut cmd = cargo_bin_cmd!("kb");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("KB_LOG")
        .env_remove("KB_TIMINGS");
    cmd
}

/// Write a board document into `temp` and return its path.
pub fn write_board(temp: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, json).unwrap();
    path
}

/// Helper to create an initialized temp directory reading `board.json`.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_board(&temp, "board.json", SAMPLE_BOARD);
    kb().arg("init")
        .arg("--data")
        .arg("board.json")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Run `kb show` in `temp` and return stdout.
pub fn show(temp: &TempDir, args: &[&str]) -> String {
    let output = kb()
        .arg("show")
        .args(args)
        .current_dir(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}
