// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! go-task Taskfiles: `task <name>` per task under `tasks`.

use super::{command, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};
use serde_yaml::Value;

const NAMES: &[&str] = &["Taskfile.yml", "Taskfile.yaml", "taskfile.yml", "taskfile.yaml"];

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    NAMES.contains(&src.file_name())
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src)
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let doc = src.yaml()?;
    let Some(tasks) = doc.get("tasks") else {
        return Ok(Vec::new());
    };
    let Some(tasks) = tasks.as_mapping() else {
        return Err(ParseError::shape("`tasks` is not a mapping"));
    };

    let mut commands = Vec::new();
    for (name, task) in tasks {
        let Some(name) = name.as_str() else {
            continue;
        };
        // Internal tasks cannot be invoked from the command line.
        if task.get("internal").and_then(Value::as_bool) == Some(true) {
            continue;
        }
        let raw = format!("task {}", quote(name));
        commands.extend(command(raw, CommandType::GoTask, src, name));
    }
    Ok(commands)
}

#[cfg(test)]
#[path = "taskfile_tests.rs"]
mod tests;
