// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GitLab CI: one command per `before_script`/`script` line of each job.

use super::{command, yaml_lines, yaml_str};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{meta, Command, CommandType};

/// Top-level keys that configure the pipeline rather than define jobs.
const RESERVED: &[&str] = &[
    "image", "services", "stages", "types", "before_script", "after_script", "variables",
    "cache", "include", "default", "workflow",
];

const DEFAULT_STAGE: &str = "test";

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    src.file_name() == ".gitlab-ci.yml"
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src)
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let doc = src.yaml()?;
    let Some(root) = doc.as_mapping() else {
        return Err(ParseError::shape("root is not a mapping"));
    };

    let mut commands = Vec::new();
    for (name, job) in root {
        let Some(name) = name.as_str() else {
            continue;
        };
        if name.starts_with('.') || RESERVED.contains(&name) || !job.is_mapping() {
            continue;
        }
        let stage = yaml_str(job, "stage").unwrap_or(DEFAULT_STAGE);
        let lines = ["before_script", "script"]
            .iter()
            .filter_map(|key| job.get(*key))
            .flat_map(yaml_lines);
        for line in lines {
            commands.extend(
                command(line.trim(), CommandType::GitlabCiScript, src, name)
                    .map(|c| c.with_meta(meta::JOB, name).with_meta(meta::STAGE, stage)),
            );
        }
    }
    Ok(commands)
}

#[cfg(test)]
#[path = "gitlab_ci_tests.rs"]
mod tests;
