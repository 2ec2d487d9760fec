//! Dry runs detect and validate without executing anything.

use crate::prelude::*;

#[test]
fn dry_run_executes_nothing() {
    let temp = Project::empty();
    temp.file("Procfile", "touch: touch marker\nbroken: exit 3\n");

    temp.doscan()
        .args(&["scan", "--dry-run"])
        .passes()
        .stdout_has("## Would run")
        .stdout_has("touch marker")
        .stdout_has("- **Would run:** 2");
    assert!(!temp.exists("marker"));
}

#[test]
fn dry_run_json_marks_commands_not_run() {
    let temp = Project::empty();
    temp.file("Procfile", "web: true\n");

    let run = temp.doscan().args(&["scan", "--dry-run", "--format", "json"]).passes();
    let json = run.stdout_json();
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["commands"][0]["status"], "not_run");
    assert_eq!(json["summary"]["attempted"], 0);
}
