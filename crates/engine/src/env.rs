// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::time::Duration;

/// Per-command timeout override (`DOSCAN_TIMEOUT_SECS`).
pub fn timeout() -> Option<Duration> {
    std::env::var("DOSCAN_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

/// Parallel worker count override (`DOSCAN_JOBS`).
pub fn jobs() -> Option<usize> {
    std::env::var("DOSCAN_JOBS").ok().and_then(|s| s.trim().parse::<usize>().ok()).filter(|n| *n > 0)
}

/// Log filter directive (`DOSCAN_LOG`), e.g. `debug` or `doscan_engine=trace`.
pub fn log_filter() -> Option<String> {
    std::env::var("DOSCAN_LOG").ok().filter(|s| !s.trim().is_empty())
}

/// Color preference: `NO_COLOR` (any value) disables, `COLOR=always|1`
/// forces, otherwise `None` (decide by terminal).
pub fn color() -> Option<bool> {
    if std::env::var_os("NO_COLOR").is_some() {
        return Some(false);
    }
    match std::env::var("COLOR").ok()?.as_str() {
        "always" | "1" | "true" => Some(true),
        "never" | "0" | "false" => Some(false),
        _ => None,
    }
}

/// Values read from the environment for settings resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub timeout: Option<Duration>,
    pub jobs: Option<usize>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self { timeout: timeout(), jobs: jobs() }
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
