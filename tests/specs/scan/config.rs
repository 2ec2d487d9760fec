//! `.doscan.toml` and the built-in excludes.

use crate::prelude::*;

#[test]
fn default_excludes_skip_dependency_trees() {
    let temp = Project::empty();
    temp.file("Procfile", "web: true\n");
    temp.file("node_modules/pkg/Procfile", "broken: exit 3\n");

    temp.doscan().args(&["scan"]).passes();
    temp.doscan().args(&["scan", "--no-default-excludes"]).exits(1);
}

#[test]
fn config_excludes_apply() {
    let temp = Project::empty();
    temp.file(".doscan.toml", "exclude = [\"legacy/**\"]\n");
    temp.file("legacy/Procfile", "broken: exit 3\n");
    temp.file("Procfile", "web: true\n");

    temp.doscan().args(&["scan"]).passes();
}

#[test]
fn include_limits_scanned_files() {
    let temp = Project::empty();
    temp.file("a/Procfile", "web: true\n");
    temp.file("b/Procfile", "broken: exit 3\n");

    temp.doscan().args(&["scan", "--include", "a/**"]).passes();
}

#[test]
fn config_env_reaches_commands() {
    let temp = Project::empty();
    temp.file(".doscan.toml", "[env]\nSTAGE = \"test\"\n");
    temp.file("Procfile", "check: test \"$STAGE\" = test\n");

    temp.doscan().args(&["scan"]).passes();
}

#[test]
fn config_ignore_patterns_suppress_commands() {
    let temp = Project::empty();
    temp.file(".doscan.toml", "ignore_patterns = [\"exit *\"]\n");
    temp.file("Procfile", "broken: exit 3\n");

    temp.doscan().args(&["scan"]).passes();
}
