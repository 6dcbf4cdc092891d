// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Performance timing instrumentation for debugging.
//!
//! Enable with `KB_TIMINGS=1` environment variable.
//! Output goes to stderr in format: `[timings] phase::name XXms`

use std::time::Instant;

/// Print a timing result to stderr if timings are enabled.
#[inline]
pub fn print_timing(phase: &str, start: Instant) {
    if crate::env::kb_timings() {
        let elapsed = start.elapsed();
        eprintln!("[timings] {} {}ms", phase, elapsed.as_millis());
    }
}

/// Macro for timing a block of code.
///
/// Usage:
/// ```rust,ignore
/// let loaded = time_phase!("board::load", { view.load(&source) });
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::print_timing($phase, __start);
        __result
    }};
}
