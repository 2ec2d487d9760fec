// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `requirements*.txt`: a single `pip install -r <file>`.

use super::{command, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    let name = src.file_name();
    name.starts_with("requirements") && name.ends_with(".txt")
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src)
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let has_requirements = src.content().lines().map(str::trim).any(|l| !l.is_empty() && !l.starts_with('#'));
    if !has_requirements {
        return Ok(Vec::new());
    }
    let raw = format!("pip install -r {}", quote(src.file_name()));
    Ok(command(raw, CommandType::PipRequirements, src, src.file_name()).into_iter().collect())
}

#[cfg(test)]
#[path = "requirements_tests.rs"]
mod tests;
