// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pyproject.toml`: poetry scripts, pdm scripts, and taskipy tasks.

use super::{command, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};

/// `(table path, runner)` pairs, in emission order.
const RUNNERS: &[(&[&str], &str)] = &[
    (&["tool", "poetry", "scripts"], "poetry run"),
    (&["tool", "pdm", "scripts"], "pdm run"),
    (&["tool", "taskipy", "tasks"], "task"),
];

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    src.file_name() == "pyproject.toml"
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src)
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let doc: toml::Table = toml::from_str(src.content())?;
    let mut commands = Vec::new();
    for (path, runner) in RUNNERS {
        let Some(table) = lookup(&doc, path) else {
            continue;
        };
        for name in table.keys() {
            // pdm reserves `_` for options shared by every script
            if name == "_" {
                continue;
            }
            let raw = format!("{runner} {}", quote(name));
            commands.extend(command(raw, CommandType::PythonScript, src, name));
        }
    }
    Ok(commands)
}

fn lookup<'t>(doc: &'t toml::Table, path: &[&str]) -> Option<&'t toml::Table> {
    let mut table = doc;
    for key in path {
        table = table.get(*key)?.as_table()?;
    }
    Some(table)
}

#[cfg(test)]
#[path = "pyproject_tests.rs"]
mod tests;
