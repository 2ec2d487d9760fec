// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of recognised file formats.

use crate::error::ParseError;
use crate::parsers::{
    ansible, cargo, compose, dockerfile, github_actions, gitlab_ci, justfile, makefile,
    package_json, procfile, pyproject, requirements, shell_script, taskfile, terraform,
};
use crate::source::Source;
use doscan_core::Command;

/// A file format that can yield commands.
///
/// Adding a format means adding a variant here and a module under
/// `parsers`; existing formats are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Makefile,
    PackageJson,
    Pyproject,
    Requirements,
    Cargo,
    Dockerfile,
    DockerCompose,
    AnsiblePlaybook,
    GithubActions,
    GitlabCi,
    Justfile,
    Taskfile,
    Terraform,
    Procfile,
    ShellScript,
}

doscan_core::simple_display! {
    Format {
        Makefile => "makefile",
        PackageJson => "package-json",
        Pyproject => "pyproject",
        Requirements => "requirements",
        Cargo => "cargo",
        Dockerfile => "dockerfile",
        DockerCompose => "docker-compose",
        AnsiblePlaybook => "ansible-playbook",
        GithubActions => "github-actions",
        GitlabCi => "gitlab-ci",
        Justfile => "justfile",
        Taskfile => "taskfile",
        Terraform => "terraform",
        Procfile => "procfile",
        ShellScript => "shell-script",
    }
}

impl Format {
    pub const ALL: [Format; 15] = [
        Self::Makefile,
        Self::PackageJson,
        Self::Pyproject,
        Self::Requirements,
        Self::Cargo,
        Self::Dockerfile,
        Self::DockerCompose,
        Self::AnsiblePlaybook,
        Self::GithubActions,
        Self::GitlabCi,
        Self::Justfile,
        Self::Taskfile,
        Self::Terraform,
        Self::Procfile,
        Self::ShellScript,
    ];

    /// Cheap check on the path alone: is the file worth reading?
    pub fn matches_name(self, src: &Source<'_>) -> bool {
        match self {
            Self::Makefile => makefile::matches_name(src),
            Self::PackageJson => package_json::matches_name(src),
            Self::Pyproject => pyproject::matches_name(src),
            Self::Requirements => requirements::matches_name(src),
            Self::Cargo => cargo::matches_name(src),
            Self::Dockerfile => dockerfile::matches_name(src),
            Self::DockerCompose => compose::matches_name(src),
            Self::AnsiblePlaybook => ansible::matches_name(src),
            Self::GithubActions => github_actions::matches_name(src),
            Self::GitlabCi => gitlab_ci::matches_name(src),
            Self::Justfile => justfile::matches_name(src),
            Self::Taskfile => taskfile::matches_name(src),
            Self::Terraform => terraform::matches_name(src),
            Self::Procfile => procfile::matches_name(src),
            Self::ShellScript => shell_script::matches_name(src),
        }
    }

    /// File-shape predicate, which may sniff content.
    pub fn claims(self, src: &Source<'_>) -> bool {
        match self {
            Self::Makefile => makefile::claims(src),
            Self::PackageJson => package_json::claims(src),
            Self::Pyproject => pyproject::claims(src),
            Self::Requirements => requirements::claims(src),
            Self::Cargo => cargo::claims(src),
            Self::Dockerfile => dockerfile::claims(src),
            Self::DockerCompose => compose::claims(src),
            Self::AnsiblePlaybook => ansible::claims(src),
            Self::GithubActions => github_actions::claims(src),
            Self::GitlabCi => gitlab_ci::claims(src),
            Self::Justfile => justfile::claims(src),
            Self::Taskfile => taskfile::claims(src),
            Self::Terraform => terraform::claims(src),
            Self::Procfile => procfile::claims(src),
            Self::ShellScript => shell_script::claims(src),
        }
    }

    pub fn parse(self, src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
        match self {
            Self::Makefile => makefile::parse(src),
            Self::PackageJson => package_json::parse(src),
            Self::Pyproject => pyproject::parse(src),
            Self::Requirements => requirements::parse(src),
            Self::Cargo => cargo::parse(src),
            Self::Dockerfile => dockerfile::parse(src),
            Self::DockerCompose => compose::parse(src),
            Self::AnsiblePlaybook => ansible::parse(src),
            Self::GithubActions => github_actions::parse(src),
            Self::GitlabCi => gitlab_ci::parse(src),
            Self::Justfile => justfile::parse(src),
            Self::Taskfile => taskfile::parse(src),
            Self::Terraform => terraform::parse(src),
            Self::Procfile => procfile::parse(src),
            Self::ShellScript => shell_script::parse(src),
        }
    }
}
