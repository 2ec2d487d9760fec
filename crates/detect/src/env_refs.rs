// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables referenced by command text.

use doscan_core::{meta, Command};
use regex::Regex;
use std::sync::LazyLock;

/// `$NAME` or `${NAME...}`.
#[allow(clippy::expect_used)]
static ENV_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("constant regex pattern is valid")
});

/// Variable names referenced by `text`, deduplicated in first-use order.
pub fn referenced_env(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in ENV_REF.captures_iter(text) {
        let Some(name) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        if !names.iter().any(|n| n == name.as_str()) {
            names.push(name.as_str().to_string());
        }
    }
    names
}

/// Record the command's referenced variables in `required_env`, keeping any
/// the parser already attached.
pub(crate) fn annotate(command: Command) -> Command {
    let mut names = referenced_env(command.raw_text());
    for existing in command.required_env() {
        if !names.iter().any(|n| n == existing) {
            names.push(existing.to_string());
        }
    }
    command.with_meta(meta::REQUIRED_ENV, names.join(","))
}

#[cfg(test)]
#[path = "env_refs_tests.rs"]
mod tests;
