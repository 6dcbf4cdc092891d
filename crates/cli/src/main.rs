// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use kbrs::Cli;

fn main() {
    let cli = Cli::parse();
    kbrs::init_logging();
    if let Err(e) = kbrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
