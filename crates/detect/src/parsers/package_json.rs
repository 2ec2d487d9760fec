// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `package.json`: one `<pm> run <script>` per declared script.

use super::{command_at, line_of, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};
use std::path::Path;

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    src.file_name() == "package.json"
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src) && src.content().trim_start().starts_with('{')
}

/// Package manager implied by the lock file beside the manifest.
fn package_manager(dir: &Path) -> (&'static str, CommandType) {
    if dir.join("pnpm-lock.yaml").is_file() {
        ("pnpm", CommandType::PnpmScript)
    } else if dir.join("yarn.lock").is_file() {
        ("yarn", CommandType::YarnScript)
    } else {
        ("npm", CommandType::NpmScript)
    }
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let manifest: serde_json::Value = serde_json::from_str(src.content())?;
    let Some(root) = manifest.as_object() else {
        return Err(ParseError::shape("package.json root is not an object"));
    };
    let Some(scripts) = root.get("scripts") else {
        return Ok(Vec::new());
    };
    let Some(scripts) = scripts.as_object() else {
        return Err(ParseError::shape("`scripts` is not an object"));
    };

    let (pm, ty) = package_manager(src.dir());
    let mut commands = Vec::new();
    for (name, body) in scripts {
        if body.as_str().is_none_or(|s| s.trim().is_empty()) {
            continue;
        }
        let key = format!("\"{name}\"");
        let line = line_of(src.content(), |l| l.trim_start().starts_with(&key)).unwrap_or(1);
        let raw = format!("{pm} run {}", quote(name));
        commands.extend(command_at(raw, ty, src, name, line));
    }
    Ok(commands)
}

#[cfg(test)]
#[path = "package_json_tests.rs"]
mod tests;
