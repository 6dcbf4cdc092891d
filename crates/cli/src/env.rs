// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Default log filter when `KB_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the `KB_LOG` filter directive, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::KB_LOG).ok().filter(|v| !v.is_empty())
}

/// Returns `true` if `KB_TIMINGS` is set (any value).
pub fn kb_timings() -> bool {
    std::env::var(vars::KB_TIMINGS).is_ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
