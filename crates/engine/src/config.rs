// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration (`.doscan.toml`) and settings resolution.
//!
//! Precedence: command-line flag, then environment variable, then the
//! project file, then built-in defaults.

use crate::deny::{DenyList, DenyListError, DenyRuleSpec};
use crate::env::EnvOverrides;
use crate::executor::DEFAULT_TIMEOUT;
use crate::ignore_file::{IgnoreFile, IgnoreFileError, IGNORE_FILE_NAME};
use doscan_core::IgnoreEntry;
use doscan_detect::DEFAULT_EXCLUDES;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".doscan.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config {}: `{key}` {reason}", path.display())]
    InvalidValue { path: PathBuf, key: &'static str, reason: &'static str },
    #[error(transparent)]
    Deny(#[from] DenyListError),
    #[error(transparent)]
    IgnoreFile(#[from] IgnoreFileError),
}

/// Contents of `.doscan.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub timeout_secs: Option<u64>,
    pub jobs: Option<usize>,
    /// Relative to the project root.
    pub ignore_file: Option<PathBuf>,
    pub deny: Vec<DenyRuleSpec>,
    /// Glob-style command signatures to ignore.
    pub ignore_patterns: Vec<String>,
    pub env: BTreeMap<String, String>,
}

impl ProjectConfig {
    /// Load `<root>/.doscan.toml`; a missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loading project config");
                Self::parse(&content, &path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        let invalid = |key, reason| ConfigError::InvalidValue { path: path.to_path_buf(), key, reason };
        if config.timeout_secs == Some(0) {
            return Err(invalid("timeout_secs", "must be at least 1"));
        }
        if config.jobs == Some(0) {
            return Err(invalid("jobs", "must be at least 1"));
        }
        Ok(config)
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Replaces the config file's list when non-empty.
    pub include: Vec<String>,
    /// Added to the config file's list.
    pub exclude: Vec<String>,
    pub timeout: Option<Duration>,
    pub jobs: Option<usize>,
    pub ignore_file: Option<PathBuf>,
    /// Merged over the config file's `env` table.
    pub env: Vec<(String, String)>,
    pub no_default_excludes: bool,
}

/// Fully resolved settings for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub timeout: Duration,
    pub jobs: usize,
    pub ignore_file: PathBuf,
    pub env: Vec<(String, String)>,
    pub deny: Vec<DenyRuleSpec>,
    pub ignore_patterns: Vec<String>,
}

impl Settings {
    pub fn resolve(root: &Path, config: ProjectConfig, env: &EnvOverrides, cli: CliOverrides) -> Self {
        let include = if cli.include.is_empty() { config.include } else { cli.include };

        let mut exclude: Vec<String> = if cli.no_default_excludes {
            Vec::new()
        } else {
            DEFAULT_EXCLUDES.iter().map(|p| (*p).to_string()).collect()
        };
        exclude.extend(config.exclude);
        exclude.extend(cli.exclude);

        let timeout = cli
            .timeout
            .or(env.timeout)
            .or(config.timeout_secs.map(Duration::from_secs))
            .unwrap_or(DEFAULT_TIMEOUT);
        let jobs = cli.jobs.or(env.jobs).or(config.jobs).unwrap_or(1).max(1);

        let ignore_file = cli
            .ignore_file
            .or_else(|| config.ignore_file.map(|p| root.join(p)))
            .unwrap_or_else(|| root.join(IGNORE_FILE_NAME));

        let mut merged = config.env;
        merged.extend(cli.env);

        Self {
            root: root.to_path_buf(),
            include,
            exclude,
            timeout,
            jobs,
            ignore_file,
            env: merged.into_iter().collect(),
            deny: config.deny,
            ignore_patterns: config.ignore_patterns,
        }
    }

    /// Built-in rules plus the configured extras.
    pub fn deny_list(&self) -> Result<DenyList, ConfigError> {
        Ok(DenyList::default().extend(&self.deny)?)
    }

    /// Ignore-file entries followed by configured patterns.
    pub fn ignore_entries(&self) -> Result<Vec<IgnoreEntry>, ConfigError> {
        let mut entries = IgnoreFile::load(&self.ignore_file)?;
        entries.extend(self.ignore_patterns.iter().map(IgnoreEntry::pattern));
        Ok(entries)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
