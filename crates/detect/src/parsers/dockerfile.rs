// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dockerfiles: `docker build` with the file's directory as context.

use super::{command, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{Command, CommandType};

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    let name = src.file_name();
    name == "Dockerfile" || name.starts_with("Dockerfile.") || name.ends_with(".dockerfile")
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src) && has_from(src.content())
}

fn has_from(content: &str) -> bool {
    content.lines().map(str::trim_start).any(|l| {
        l.get(..5).is_some_and(|head| head.eq_ignore_ascii_case("FROM "))
    })
}

/// Image tag derived from the build context directory name.
fn image_tag(src: &Source<'_>) -> String {
    let dir_name = src.dir().file_name().and_then(|n| n.to_str()).unwrap_or("");
    let tag: String = dir_name
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '-' })
        .collect();
    let tag = tag.trim_matches(|c: char| !c.is_ascii_alphanumeric());
    if tag.is_empty() {
        "app".to_string()
    } else {
        tag.to_string()
    }
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    if !has_from(src.content()) {
        return Err(ParseError::shape("no FROM instruction"));
    }
    let raw = format!("docker build -f {} -t {} .", quote(src.file_name()), image_tag(src));
    Ok(command(raw, CommandType::DockerfileBuild, src, src.file_name()).into_iter().collect())
}

#[cfg(test)]
#[path = "dockerfile_tests.rs"]
mod tests;
