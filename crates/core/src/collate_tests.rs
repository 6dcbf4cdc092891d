// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    plain = { "A", "B", Ordering::Less },
    equal = { "Same", "Same", Ordering::Equal },
    case_ignored_first = { "apple", "Banana", Ordering::Less },
    upper_after_lower_word = { "Zebra", "apple", Ordering::Greater },
    prefix_first = { "Task", "Task 2", Ordering::Less },
    empty_first = { "", "a", Ordering::Less },
    accented_lowercase = { "Élan", "élan", Ordering::Less },
)]
fn compare_text_orders(a: &str, b: &str, expected: Ordering) {
    assert_eq!(compare_text(a, b), expected);
}

#[test]
fn compare_text_is_antisymmetric() {
    let words = ["alpha", "Alpha", "beta", "Beta", "", "ß", "10", "9"];
    for a in words {
        for b in words {
            assert_eq!(compare_text(a, b), compare_text(b, a).reverse(), "{a} vs {b}");
        }
    }
}

#[test]
fn compare_text_case_variants_are_distinct() {
    assert_ne!(compare_text("abc", "ABC"), Ordering::Equal);
}
