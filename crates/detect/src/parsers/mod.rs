// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One module per supported file format.
//!
//! Each module exposes `matches_name(&Source)`, a cheap filename check that
//! decides whether the file is worth reading, `claims(&Source)`, the full
//! shape predicate, and `parse(&Source)`.

pub(crate) mod ansible;
pub(crate) mod cargo;
pub(crate) mod compose;
pub(crate) mod dockerfile;
pub(crate) mod github_actions;
pub(crate) mod gitlab_ci;
pub(crate) mod justfile;
pub(crate) mod makefile;
pub(crate) mod package_json;
pub(crate) mod procfile;
pub(crate) mod pyproject;
pub(crate) mod requirements;
pub(crate) mod shell_script;
pub(crate) mod taskfile;
pub(crate) mod terraform;

use crate::source::Source;
use doscan_core::{meta, Command, CommandType};
use std::borrow::Cow;

/// Build a command from `src`, dropping it when its text is empty.
pub(crate) fn command(raw: impl Into<String>, ty: CommandType, src: &Source<'_>, name: &str) -> Option<Command> {
    match Command::new(raw, ty, src.path(), name) {
        Ok(command) => Some(command),
        Err(e) => {
            tracing::debug!(error = %e, "dropping empty command");
            None
        }
    }
}

/// Like [`command`], recording the 1-based declaration line.
pub(crate) fn command_at(
    raw: impl Into<String>,
    ty: CommandType,
    src: &Source<'_>,
    name: &str,
    line: usize,
) -> Option<Command> {
    command(raw, ty, src, name).map(|c| c.with_meta(meta::LINE, line.to_string()))
}

/// Quote `arg` for `sh` when it holds anything beyond plain word characters.
pub(crate) fn quote(arg: &str) -> Cow<'_, str> {
    let plain = !arg.is_empty()
        && arg.chars().all(|c| c.is_ascii_alphanumeric() || "_-./:@%+=,".contains(c));
    if plain {
        Cow::Borrowed(arg)
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
    }
}

/// 1-based line of the first line in `content` satisfying `pred`.
pub(crate) fn line_of(content: &str, pred: impl Fn(&str) -> bool) -> Option<usize> {
    content.lines().position(pred).map(|i| i + 1)
}

/// String value of `key` in a YAML mapping.
pub(crate) fn yaml_str<'v>(value: &'v serde_yaml::Value, key: &str) -> Option<&'v str> {
    value.get(key).and_then(serde_yaml::Value::as_str)
}

/// Script lines from a YAML value that is either a string or a (possibly
/// nested) sequence of strings.
pub(crate) fn yaml_lines(value: &serde_yaml::Value) -> Vec<String> {
    match value {
        serde_yaml::Value::String(s) => vec![s.clone()],
        serde_yaml::Value::Sequence(items) => items.iter().flat_map(yaml_lines).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
