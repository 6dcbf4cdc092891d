// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{capture, TestContext, SAMPLE_BOARD};
use crate::error::Error;
use kb_core::{GroupingMode, OrderingMode, ViewSelection};
use yare::parameterized;

fn select(ctx: &TestContext, axis: Axis, mode: &str) -> String {
    capture(|out| run_impl(out, ctx.work_dir(), axis, mode, &Palette::plain()))
}

#[parameterized(
    status = { "status", GroupingMode::Status },
    user = { "user", GroupingMode::User },
    priority = { "priority", GroupingMode::Priority },
    padded = { " User ", GroupingMode::User },
)]
fn grouping_is_saved(mode: &str, expected: GroupingMode) {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    select(&ctx, Axis::Grouping, mode);

    // Saving only happens when the selection changes.
    let expected_saved = (expected != GroupingMode::Status)
        .then(|| ViewSelection::new(expected, OrderingMode::Priority));
    assert_eq!(ctx.saved(), expected_saved);
}

#[test]
fn ordering_is_saved_and_grouping_kept() {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    select(&ctx, Axis::Grouping, "priority");
    select(&ctx, Axis::Ordering, "title");

    assert_eq!(
        ctx.saved(),
        Some(ViewSelection::new(GroupingMode::Priority, OrderingMode::Title))
    );
}

#[test]
fn renders_board_after_change() {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    let output = select(&ctx, Axis::Ordering, "title");
    assert!(output.contains("◌ Todo 2\n  2 🟢 A [y] (🟢A)\n  1 🔴 B [x] (🟢A)"));
}

#[test]
fn prints_selection_without_data() {
    let ctx = TestContext::with_data(None);
    let output = select(&ctx, Axis::Grouping, "user");
    assert_eq!(output, "grouping=user ordering=priority\n");
}

#[test]
fn invalid_mode_keeps_saved_selection() {
    let ctx = TestContext::new().with_board(SAMPLE_BOARD);
    select(&ctx, Axis::Grouping, "user");

    let mut out = Vec::new();
    let result = run_impl(
        &mut out,
        ctx.work_dir(),
        Axis::Ordering,
        "newest",
        &Palette::plain(),
    );

    assert!(matches!(result, Err(Error::InvalidOrdering(_))));
    assert_eq!(
        ctx.saved(),
        Some(ViewSelection::new(GroupingMode::User, OrderingMode::Priority))
    );
}
