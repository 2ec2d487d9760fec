// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings and pipeline construction shared by the subcommands.

use anyhow::{Context, Result};
use doscan_core::IgnoreSet;
use doscan_detect::FileScanner;
use doscan_engine::env::EnvOverrides;
use doscan_engine::{
    CliOverrides, CommandValidator, Executor, Pipeline, ProcessRunner, ProjectConfig, Settings,
};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// Canonical project root: `path` when given, else the working directory.
pub fn project_root(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("cannot determine the working directory")?,
    };
    let root = path
        .canonicalize()
        .with_context(|| format!("project path {} is not accessible", path.display()))?;
    if !root.is_dir() {
        anyhow::bail!("project path {} is not a directory", root.display());
    }
    Ok(root)
}

/// Resolve settings for `root` from its config file, the environment and `cli`.
pub fn settings(root: &Path, cli: CliOverrides) -> Result<Settings> {
    let config = ProjectConfig::load(root)?;
    Ok(Settings::resolve(root, config, &EnvOverrides::from_env(), cli))
}

pub fn pipeline(settings: &Settings, dry_run: bool) -> Result<Pipeline<ProcessRunner>> {
    let ignore = IgnoreSet::new(settings.ignore_entries()?);
    tracing::debug!(entries = ignore.len(), path = %settings.ignore_file.display(), "loaded ignore entries");
    let scanner = FileScanner::new(&settings.include, &settings.exclude, ignore)?;
    let validator = CommandValidator::new(settings.deny_list()?);
    let executor = Executor::new(ProcessRunner::new())
        .with_timeout(settings.timeout)
        .with_env(settings.env.clone());
    Ok(Pipeline::new(scanner, validator, executor).with_jobs(settings.jobs).dry_run(dry_run))
}

/// Token cancelled on the first Ctrl-C. Running commands are killed and
/// the partial report is still written.
pub fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, stopping scan");
            eprintln!("interrupted: finishing report with the commands run so far");
            trigger.cancel();
        }
    });
    token
}

/// Parse a `KEY=VALUE` argument.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("invalid value '{s}': must be KEY=VALUE"))?;
    if key.is_empty() {
        return Err(format!("invalid value '{s}': KEY must not be empty"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
