// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Detected command and its originating ecosystem.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Well-known metadata keys attached by parsers.
pub mod meta {
    /// Comma-separated environment variables referenced by the command.
    pub const REQUIRED_ENV: &str = "required_env";
    /// Ansible inventory path used by the command.
    pub const INVENTORY: &str = "inventory";
    /// CI job the command was declared in.
    pub const JOB: &str = "job";
    /// CI stage of the declaring job.
    pub const STAGE: &str = "stage";
    /// Compose service the command targets.
    pub const SERVICE: &str = "service";
    /// 1-based declaration line in the source file.
    pub const LINE: &str = "line";
    /// Terraform module directory.
    pub const MODULE_DIR: &str = "module_dir";
}

/// Ecosystem a command was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandType {
    MakeTarget,
    NpmScript,
    YarnScript,
    PnpmScript,
    CargoCommand,
    PythonScript,
    PipRequirements,
    DockerfileBuild,
    DockerComposeService,
    AnsiblePlaybook,
    AnsibleVault,
    AnsibleInventory,
    AnsibleGalaxy,
    GithubActionsStep,
    GitlabCiScript,
    JustRecipe,
    GoTask,
    TerraformCommand,
    ProcfileProcess,
    ShellScript,
    GenericShell,
}

crate::simple_display! {
    CommandType {
        MakeTarget => "make-target",
        NpmScript => "npm-script",
        YarnScript => "yarn-script",
        PnpmScript => "pnpm-script",
        CargoCommand => "cargo-command",
        PythonScript => "python-script",
        PipRequirements => "pip-requirements",
        DockerfileBuild => "dockerfile-build",
        DockerComposeService => "docker-compose-service",
        AnsiblePlaybook => "ansible-playbook",
        AnsibleVault => "ansible-vault",
        AnsibleInventory => "ansible-inventory",
        AnsibleGalaxy => "ansible-galaxy",
        GithubActionsStep => "github-actions-step",
        GitlabCiScript => "gitlab-ci-script",
        JustRecipe => "just-recipe",
        GoTask => "go-task",
        TerraformCommand => "terraform-command",
        ProcfileProcess => "procfile-process",
        ShellScript => "shell-script",
        GenericShell => "generic-shell",
    }
}

impl CommandType {
    /// Human-readable label used as the description prefix.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MakeTarget => "Make target",
            Self::NpmScript => "NPM script",
            Self::YarnScript => "Yarn script",
            Self::PnpmScript => "PNPM script",
            Self::CargoCommand => "Cargo command",
            Self::PythonScript => "Python script",
            Self::PipRequirements => "Pip requirements",
            Self::DockerfileBuild => "Docker build",
            Self::DockerComposeService => "Docker Compose",
            Self::AnsiblePlaybook => "Ansible playbook",
            Self::AnsibleVault => "Ansible vault",
            Self::AnsibleInventory => "Ansible inventory",
            Self::AnsibleGalaxy => "Ansible galaxy",
            Self::GithubActionsStep => "GitHub Actions step",
            Self::GitlabCiScript => "GitLab CI script",
            Self::JustRecipe => "Just recipe",
            Self::GoTask => "Task",
            Self::TerraformCommand => "Terraform",
            Self::ProcfileProcess => "Procfile process",
            Self::ShellScript => "Shell script",
            Self::GenericShell => "Shell command",
        }
    }

    /// Types whose commands mutate state shared across the project (lock
    /// files, installed packages, provider caches).
    pub fn has_global_side_effects(&self) -> bool {
        matches!(self, Self::PipRequirements | Self::AnsibleGalaxy | Self::TerraformCommand)
    }
}

/// Leading words of package-install invocations.
const INSTALL_PREFIXES: &[&str] = &[
    "npm install",
    "npm ci",
    "npm i ",
    "yarn install",
    "pnpm install",
    "pip install",
    "pip3 install",
    "poetry install",
    "pdm install",
    "cargo install",
    "bundle install",
    "composer install",
    "go mod download",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command text in {}", .source_path.display())]
    Empty { source_path: PathBuf },
}

/// A detected, potentially executable shell invocation plus its provenance.
///
/// Created by a parser during a scan and immutable afterwards; the `with_*`
/// methods consume the value and are meant for construction only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    raw_text: String,
    description: String,
    source_path: PathBuf,
    command_type: CommandType,
    working_directory: PathBuf,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, String>,
}

crate::builder! {
    pub struct CommandBuilder => Command {
        into {
            raw_text: String = "echo test",
            description: String = "Shell command - test",
            source_path: PathBuf = "/project/Makefile",
            working_directory: PathBuf = "/project",
        }
        set {
            command_type: CommandType = CommandType::GenericShell,
            metadata: BTreeMap<String, String> = BTreeMap::new(),
        }
    }
}

impl Command {
    /// Create a command whose working directory defaults to the source
    /// file's directory and whose description is `"<label> - <name>"`.
    pub fn new(
        raw_text: impl Into<String>,
        command_type: CommandType,
        source_path: impl Into<PathBuf>,
        name: &str,
    ) -> Result<Self, CommandError> {
        let raw_text = raw_text.into();
        let source_path = source_path.into();
        if raw_text.trim().is_empty() {
            return Err(CommandError::Empty { source_path });
        }
        let working_directory = source_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self {
            raw_text,
            description: format!("{} - {}", command_type.label(), name),
            source_path,
            command_type,
            working_directory,
            metadata: BTreeMap::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = dir.into();
        self
    }

    /// Attach a metadata entry. Empty values are dropped.
    pub fn with_meta(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.metadata.insert(key.to_string(), value);
        }
        self
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn command_type(&self) -> CommandType {
        self.command_type
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Environment variables the command references, in first-use order.
    pub fn required_env(&self) -> Vec<&str> {
        self.meta(meta::REQUIRED_ENV)
            .map(|v| v.split(',').filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Identity used for deduplication across parsers.
    pub fn key(&self) -> (&str, &Path) {
        (&self.raw_text, &self.source_path)
    }

    /// True if running this command may mutate state shared by other
    /// commands, so it must never run concurrently with anything else.
    pub fn has_global_side_effects(&self) -> bool {
        if self.command_type.has_global_side_effects() {
            return true;
        }
        let text = self.raw_text.trim_start();
        INSTALL_PREFIXES
            .iter()
            .any(|prefix| text.starts_with(prefix) || text == prefix.trim_end())
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
