//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("scan").stdout_has("ignore");
}

#[test]
fn scan_help_lists_flags() {
    cli()
        .args(&["scan", "--help"])
        .passes()
        .stdout_has("--dry-run")
        .stdout_has("--add-failed-to-ignore")
        .stdout_has("--format");
}

#[test]
fn ignore_help_shows_subcommands() {
    cli().args(&["ignore", "--help"]).passes().stdout_has("add").stdout_has("list");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn no_args_prints_usage() {
    cli().fails().stderr_has("Usage:");
}
