//! `doscan list` shows verdicts without running anything.

use crate::prelude::*;

#[test]
fn list_shows_each_verdict() {
    let temp = Project::empty();
    temp.file("Procfile", "web: touch marker\nnuke: rm -rf /\n");

    temp.doscan()
        .args(&["list"])
        .passes()
        .stdout_has("run")
        .stdout_has("touch marker")
        .stdout_has("unsafe")
        .stdout_has("2 command(s): 1 runnable, 1 skipped (1 unsafe)");
    assert!(!temp.exists("marker"));
}

#[test]
fn list_json_is_machine_readable() {
    let temp = Project::empty();
    temp.file("Procfile", "web: true\n");
    temp.file(".doignore", "# not needed here\ntrue\n");

    let run = temp.doscan().args(&["list", "--json"]).passes();
    let rows = run.stdout_json();
    assert_eq!(rows[0]["command"], "true");
    assert_eq!(rows[0]["verdict"], "ignored");
    assert_eq!(rows[0]["reason"], "ignored: not needed here");
    assert_eq!(rows[0]["source"], "Procfile");
}

#[test]
fn list_reports_empty_projects() {
    let temp = Project::empty();
    temp.doscan().args(&["list"]).passes().stdout_has("No commands detected");
}

#[test]
fn list_flags_commands_with_bad_syntax() {
    let temp = Project::empty();
    temp.file("Procfile", "web: echo 'unterminated\n");

    let run = temp.doscan().args(&["list", "--json"]).passes();
    let rows = run.stdout_json();
    assert_eq!(rows[0]["verdict"], "unusable");
    assert!(rows[0]["reason"].as_str().unwrap().starts_with("invalid shell syntax"));
}
