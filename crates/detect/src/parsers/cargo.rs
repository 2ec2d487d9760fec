// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `Cargo.toml`: build and test the package or workspace.

use super::command;
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};

const SUBCOMMANDS: &[&str] = &["build", "test"];

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    src.file_name() == "Cargo.toml"
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src)
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let manifest: toml::Table = toml::from_str(src.content())?;
    if !manifest.contains_key("package") && !manifest.contains_key("workspace") {
        return Ok(Vec::new());
    }
    Ok(SUBCOMMANDS
        .iter()
        .filter_map(|sub| command(format!("cargo {sub}"), CommandType::CargoCommand, src, sub))
        .collect())
}

#[cfg(test)]
#[path = "cargo_tests.rs"]
mod tests;
