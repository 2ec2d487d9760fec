//! Fatal errors exit with code 2 and never produce a report.

use crate::prelude::*;

#[test]
fn missing_project_path_is_fatal() {
    let temp = Project::empty();
    temp.doscan().args(&["scan", "does-not-exist"]).exits(2).stderr_has("not accessible");
}

#[test]
fn unknown_config_key_is_fatal() {
    let temp = Project::empty();
    temp.file(".doscan.toml", "colour = true\n").file("Procfile", "web: true\n");
    temp.doscan().args(&["scan"]).exits(2).stderr_has(".doscan.toml");
}

#[test]
fn zero_timeout_in_config_is_fatal() {
    let temp = Project::empty();
    temp.file(".doscan.toml", "timeout_secs = 0\n");
    temp.doscan().args(&["scan"]).exits(2).stderr_has("timeout_secs");
}

#[test]
fn unwritable_report_path_is_fatal() {
    let temp = Project::empty();
    temp.file("Procfile", "web: true\n");
    temp.doscan().args(&["scan", "--output", "missing-dir/report.md"]).exits(2).stderr_has("report");
}

#[test]
fn bad_include_glob_is_fatal() {
    let temp = Project::empty();
    temp.doscan().args(&["scan", "--include", "["]).exits(2).stderr_has("invalid glob");
}
