// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell scripts: run through the interpreter named by the shebang.

use super::{command, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    matches!(src.extension(), "sh" | "bash")
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src) && interpreter(src).is_some()
}

/// `bash` or `sh`, from the shebang when present, else the extension.
fn interpreter(src: &Source<'_>) -> Option<&'static str> {
    let first = src.content().lines().next().unwrap_or("");
    let Some(shebang) = first.strip_prefix("#!") else {
        return Some(if src.extension() == "bash" { "bash" } else { "sh" });
    };
    // `/usr/bin/env bash` names the interpreter as its last word.
    let program = shebang.split_whitespace().rfind(|w| !w.starts_with('-'))?;
    match program.rsplit('/').next()? {
        "bash" => Some("bash"),
        "sh" | "dash" => Some("sh"),
        _ => None,
    }
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let Some(shell) = interpreter(src) else {
        return Err(ParseError::shape("shebang names a non-POSIX interpreter"));
    };
    let raw = format!("{shell} {}", quote(src.file_name()));
    Ok(command(raw, CommandType::ShellScript, src, src.file_name()).into_iter().collect())
}

#[cfg(test)]
#[path = "shell_script_tests.rs"]
mod tests;
