// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-friendly text ordering for titles and user names.

use std::cmp::Ordering;

/// Compares two strings the way a reader expects a sorted list to look.
///
/// Case is ignored first ("apple" sorts next to "Apple", not after "Zebra");
/// strings equal under case folding fall back to plain code point order so
/// the result is still a total order.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "collate_tests.rs"]
mod tests;
