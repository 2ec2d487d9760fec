// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Justfiles: `just <recipe>` per public recipe.

use super::{command_at, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};
use regex::Regex;
use std::sync::LazyLock;

const NAMES: &[&str] = &["justfile", "Justfile", ".justfile"];

/// Lines starting with these words are settings, not recipes.
const KEYWORDS: &[&str] = &["set", "export", "alias", "import", "mod"];

/// `[@]name [params...]:` at column zero, not followed by `=`.
#[allow(clippy::expect_used)]
static RECIPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@?([A-Za-z_][A-Za-z0-9_-]*)(?:\s+[^:]*)?:(?:[^=]|$)")
        .expect("constant regex pattern is valid")
});

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    NAMES.contains(&src.file_name())
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src)
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();
    let mut private_attr = false;

    for (idx, line) in src.content().lines().enumerate() {
        if line.starts_with([' ', '\t']) || line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            private_attr |= line.contains("private");
            continue;
        }
        let private = std::mem::take(&mut private_attr);
        let first = line.split_whitespace().next().unwrap_or("");
        if KEYWORDS.contains(&first) || line.contains(":=") {
            continue;
        }
        let Some(caps) = RECIPE.captures(line) else {
            continue;
        };
        let name = &caps[1];
        if private || name.starts_with('_') {
            continue;
        }
        let raw = format!("just {}", quote(name));
        commands.extend(command_at(raw, CommandType::JustRecipe, src, name, idx + 1));
    }
    Ok(commands)
}

#[cfg(test)]
#[path = "justfile_tests.rs"]
mod tests;
