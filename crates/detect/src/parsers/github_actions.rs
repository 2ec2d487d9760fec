// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub Actions workflows: one command per step `run` script.

use super::{command, yaml_str};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{meta, Command, CommandType};
use serde_yaml::Value;
use std::path::Path;

/// Repository root for a workflow at `<root>/.github/workflows/<file>`.
fn repo_root<'p>(path: &'p Path) -> Option<&'p Path> {
    let workflows = path.parent()?;
    let github = workflows.parent()?;
    let named = |p: &Path, name: &str| p.file_name().is_some_and(|n| n == name);
    (named(workflows, "workflows") && named(github, ".github")).then(|| github.parent()).flatten()
}

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    src.is_yaml() && repo_root(src.path()).is_some()
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src) && src.yaml().is_ok_and(|doc| doc.get("jobs").is_some_and(Value::is_mapping))
}

/// `defaults.run.working-directory` of a job or workflow.
fn default_working_dir(value: &Value) -> Option<&str> {
    value.get("defaults").and_then(|d| d.get("run")).and_then(|r| yaml_str(r, "working-directory"))
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let doc = src.yaml()?;
    let Some(jobs) = doc.get("jobs").and_then(Value::as_mapping) else {
        return Err(ParseError::shape("no `jobs` mapping"));
    };
    let root = repo_root(src.path()).unwrap_or(src.dir());
    let workflow_dir = default_working_dir(doc);

    let mut commands = Vec::new();
    for (job_id, job) in jobs {
        let Some(job_id) = job_id.as_str() else {
            continue;
        };
        let Some(steps) = job.get("steps").and_then(Value::as_sequence) else {
            continue;
        };
        let job_dir = default_working_dir(job).or(workflow_dir);

        for (idx, step) in steps.iter().enumerate() {
            let Some(script) = yaml_str(step, "run") else {
                continue;
            };
            if script.contains("${{") {
                tracing::debug!(job = job_id, step = idx + 1, "skipping step with workflow expression");
                continue;
            }
            let name = match yaml_str(step, "name") {
                Some(name) => format!("{job_id} / {name}"),
                None => format!("{job_id} / step {}", idx + 1),
            };
            let dir = match yaml_str(step, "working-directory").or(job_dir) {
                Some(rel) => root.join(rel),
                None => root.to_path_buf(),
            };
            commands.extend(
                command(script.trim_end(), CommandType::GithubActionsStep, src, &name)
                    .map(|c| c.with_working_directory(dir).with_meta(meta::JOB, job_id)),
            );
        }
    }
    Ok(commands)
}

#[cfg(test)]
#[path = "github_actions_tests.rs"]
mod tests;
