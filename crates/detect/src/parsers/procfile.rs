// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Procfiles: one command per `name: command` line.

use super::command_at;
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    let name = src.file_name();
    name == "Procfile" || name.starts_with("Procfile.")
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src)
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();
    for (idx, line) in src.content().lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((name, process)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let valid_name = !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
        if valid_name {
            commands.extend(command_at(process.trim(), CommandType::ProcfileProcess, src, name, idx + 1));
        }
    }
    Ok(commands)
}

#[cfg(test)]
#[path = "procfile_tests.rs"]
mod tests;
