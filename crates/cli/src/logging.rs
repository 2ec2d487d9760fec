// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup. Logs go to stderr so reports written to
//! stdout stay clean.

use doscan_engine::env;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "debug";

/// Filter directive: `DOSCAN_LOG`, then `--verbose`, then `warn`.
pub fn directive(from_env: Option<String>, verbose: bool) -> String {
    match from_env {
        Some(directive) => directive,
        None if verbose => VERBOSE_DIRECTIVE.to_string(),
        None => DEFAULT_DIRECTIVE.to_string(),
    }
}

pub fn init(verbose: bool) {
    let directive = directive(env::log_filter(), verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("warning: ignoring invalid DOSCAN_LOG {directive:?}: {e}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
