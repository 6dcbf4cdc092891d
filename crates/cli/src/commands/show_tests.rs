// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{capture, TestContext, SAMPLE_BOARD};
use crate::commands::{board_source, open_store};
use crate::error::Error;
use kb_core::{SelectionStore, ViewSelection};

fn show(ctx: &TestContext, overrides: Overrides<'_>, format: OutputFormat) -> String {
    let source = board_source(None, Some(ctx.work_dir())).unwrap();
    capture(|out| {
        run_impl(
            out,
            Some(ctx.work_dir()),
            source.as_ref(),
            overrides,
            format,
            &Palette::plain(),
        )
    })
}

#[test]
fn renders_saved_selection() {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    let output = show(&ctx, Overrides::default(), OutputFormat::Text);

    assert!(output.contains("◌ Todo 2\n  1 🔴 B [x] (🟢A)\n  2 🟢 A [y] (🟢A)"));
    assert!(output.ends_with("❌ Canceled 0\n"));
}

#[test]
fn overrides_apply_without_saving() {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    let overrides = Overrides {
        grouping: Some("user"),
        ordering: Some("title"),
    };
    let output = show(&ctx, overrides, OutputFormat::Text);

    similar_asserts::assert_eq!(output, "👤 Alice 2\n  2 🟢 A [y] (🟢A)\n  1 🔴 B [x] (🟢A)\n");
    assert_eq!(ctx.saved(), None);
}

#[test]
fn uses_persisted_selection() {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    open_store(ctx.work_dir())
        .save_selection(&ViewSelection::new(
            GroupingMode::Priority,
            OrderingMode::Priority,
        ))
        .unwrap();

    let output = show(&ctx, Overrides::default(), OutputFormat::Text);
    assert!(output.starts_with("⚫ No priority 0\n\n🔴 Urgent 1\n"));
}

#[test]
fn invalid_override_is_rejected() {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    let source = board_source(None, Some(ctx.work_dir())).unwrap();
    let mut out = Vec::new();
    let result = run_impl(
        &mut out,
        Some(ctx.work_dir()),
        source.as_ref(),
        Overrides {
            grouping: Some("weekday"),
            ordering: None,
        },
        OutputFormat::Text,
        &Palette::plain(),
    );

    assert!(matches!(result, Err(Error::InvalidGrouping(ref s)) if s == "weekday"));
    assert!(out.is_empty());
}

#[test]
fn json_output() {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    let output = show(&ctx, Overrides::default(), OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["grouping"], "status");
    assert_eq!(json["groups"][1]["count"], 2);
}

#[test]
fn missing_board_renders_loading() {
    let ctx = TestContext::new();
    let output = show(&ctx, Overrides::default(), OutputFormat::Text);
    assert_eq!(output, "Loading...\n");
}

#[test]
fn no_users_renders_loading() {
    let ctx = TestContext::new().with_board(r#"{"tickets": [{"id": 1, "title": "T", "status": "Todo"}]}"#);
    let output = show(&ctx, Overrides::default(), OutputFormat::Text);
    assert_eq!(output, "Loading...\n");
}
