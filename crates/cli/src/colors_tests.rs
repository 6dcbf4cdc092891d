// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

/// Expected escape sequence for a color code
fn expected_fg(code: u8) -> String {
    format!("\x1b[38;5;{}m", code)
}

// =============================================================================
// Color code constants
// =============================================================================

#[test]
fn color_codes_are_stable() {
    assert_eq!(codes::HEADER, 74, "Header should be pastel cyan/steel blue");
    assert_eq!(codes::LITERAL, 250, "Literal should be light grey");
    assert_eq!(codes::CONTEXT, 245, "Context should be medium grey");
}

#[test]
fn escape_constants_match_codes() {
    assert_eq!(codes::HEADER_START, expected_fg(codes::HEADER));
    assert_eq!(codes::LITERAL_START, expected_fg(codes::LITERAL));
    assert_eq!(codes::CONTEXT_START, expected_fg(codes::CONTEXT));
    assert_eq!(codes::RESET, RESET);
}

#[test]
fn fg256_produces_correct_escape_sequence() {
    assert_eq!(fg256(0), "\x1b[38;5;0m");
    assert_eq!(fg256(74), "\x1b[38;5;74m");
    assert_eq!(fg256(255), "\x1b[38;5;255m");
}

// =============================================================================
// Color helpers
// =============================================================================

#[test]
fn header_wraps_text() {
    assert_eq!(header("Todo"), format!("{}Todo{}", codes::HEADER_START, RESET));
}

#[test]
fn context_wraps_text() {
    assert_eq!(context("3"), format!("{}3{}", codes::CONTEXT_START, RESET));
}

#[test]
fn literal_wraps_text() {
    assert_eq!(literal("bug"), format!("{}bug{}", codes::LITERAL_START, RESET));
}

// =============================================================================
// Palette
// =============================================================================

#[test]
fn plain_palette_passes_text_through() {
    let palette = Palette::plain();
    assert_eq!(palette.header("Todo"), "Todo");
    assert_eq!(palette.context("CAM-1"), "CAM-1");
    assert_eq!(palette.literal("bug"), "bug");
}

#[test]
fn enabled_palette_colors_text() {
    let palette = Palette::new(true);
    assert_eq!(palette.header("Todo"), header("Todo"));
    assert_eq!(palette.context("CAM-1"), context("CAM-1"));
    assert_eq!(palette.literal("bug"), literal("bug"));
}
