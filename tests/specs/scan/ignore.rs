//! The ignore file suppresses known failures.

use crate::prelude::*;

#[test]
fn ignored_failure_does_not_fail_the_scan() {
    let temp = Project::empty();
    temp.file("Procfile", "web: true\nbroken: exit 3\n");
    temp.file(".doignore", "# flaky on CI\nexit 3\n");

    let run = temp.doscan().args(&["scan", "--format", "json"]).passes();
    let json = run.stdout_json();
    assert_eq!(json["total_failed"], 0);
    assert_eq!(json["summary"]["skipped"], 1);
}

#[test]
fn ignore_file_does_not_hide_unsafe_commands() {
    let temp = Project::empty();
    temp.file("Procfile", "nuke: rm -rf /\n");
    temp.file(".doignore", "rm -rf /\n");

    let run = temp.doscan().args(&["scan", "--format", "json"]).passes();
    assert_eq!(run.stdout_json()["unsafe_commands"][0]["command"], "rm -rf /");
}

#[test]
fn failures_are_appended_on_request() {
    let temp = Project::empty();
    temp.file("Procfile", "web: true\nbroken: exit 3\n");

    temp.doscan()
        .args(&["scan", "--add-failed-to-ignore"])
        .exits(1)
        .stderr_has("added 1 failed command(s)");

    let ignore = temp.read(".doignore");
    assert!(ignore.contains("# exit code 3\nexit 3\n"), "got:\n{ignore}");

    temp.doscan().args(&["scan"]).passes();
    temp.doscan().args(&["scan", "--add-failed-to-ignore"]).passes();
    assert_eq_diff!(temp.read(".doignore"), ignore);
}

#[test]
fn custom_ignore_file_is_honoured() {
    let temp = Project::empty();
    temp.file("Procfile", "broken: exit 3\n");
    temp.file("ci/known-failures", "exit 3\n");

    temp.doscan().args(&["scan"]).exits(1);
    temp.doscan().args(&["scan", "--ignore-file", "ci/known-failures"]).passes();
}
