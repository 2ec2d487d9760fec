// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Makefiles: one `make <target>` per explicit target.

use super::{command_at, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};

const NAMES: &[&str] = &["Makefile", "makefile", "GNUmakefile"];

/// Directives that look like rules but are not.
const DIRECTIVES: &[&str] =
    &["include", "-include", "sinclude", "ifeq", "ifneq", "ifdef", "ifndef", "else", "endif", "export", "unexport", "override", "vpath"];

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    NAMES.contains(&src.file_name()) || src.extension() == "mk"
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src)
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let prefix = if src.extension() == "mk" {
        format!("make -f {}", quote(src.file_name()))
    } else {
        "make".to_string()
    };

    let mut seen: Vec<String> = Vec::new();
    let mut commands = Vec::new();
    let mut in_define = false;
    let mut continued = false;

    for (idx, line) in src.content().lines().enumerate() {
        let was_continued = continued;
        continued = line.ends_with('\\');
        if was_continued || line.starts_with('\t') {
            continue;
        }
        let trimmed = line.trim();
        if in_define {
            in_define = trimmed != "endef";
            continue;
        }
        if trimmed.starts_with("define ") || trimmed == "define" {
            in_define = true;
            continue;
        }
        for target in rule_targets(line) {
            if seen.iter().any(|t| t == target) {
                continue;
            }
            seen.push(target.to_string());
            let raw = format!("{prefix} {}", quote(target));
            commands.extend(command_at(raw, CommandType::MakeTarget, src, target, idx + 1));
        }
    }
    Ok(commands)
}

/// Explicit targets declared by a rule line, if it is one.
fn rule_targets(line: &str) -> Vec<&str> {
    let line = line.split('#').next().unwrap_or("");
    if line.trim().is_empty() || line.starts_with(' ') {
        return Vec::new();
    }
    let first_word = line.split_whitespace().next().unwrap_or("");
    if DIRECTIVES.contains(&first_word) {
        return Vec::new();
    }
    let Some(colon) = line.find(':') else {
        return Vec::new();
    };
    let (head, rest) = line.split_at(colon);
    // `VAR := x`, `VAR ::= x`, and `VAR = a:b` are assignments.
    if rest[1..].starts_with('=') || rest[1..].starts_with(":=") || head.contains('=') {
        return Vec::new();
    }
    head.split_whitespace()
        .filter(|t| !t.starts_with('.') && !t.contains('%') && !t.contains('$'))
        .collect()
}

#[cfg(test)]
#[path = "makefile_tests.rs"]
mod tests;
