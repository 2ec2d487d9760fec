//! Unsafe commands are reported and never executed.

use crate::prelude::*;

#[test]
fn unsafe_command_is_reported_not_run() {
    let temp = Project::empty();
    temp.file("Procfile", "web: true\nnuke: rm -rf / && touch ran-nuke\n");

    let run = temp.doscan().args(&["scan", "--format", "json"]).passes();
    let json = run.stdout_json();
    assert_eq!(json["total_failed"], 0);
    assert_eq!(json["unsafe_commands"][0]["rule"], "rm-rf-root");
    assert_eq!(json["summary"]["unsafe"], 1);
    assert!(!temp.exists("ran-nuke"));
}

#[test]
fn strict_mode_fails_on_unsafe_commands() {
    let temp = Project::empty();
    temp.file("Procfile", "push: git push --force origin main\n");

    temp.doscan().args(&["scan", "--strict"]).exits(1).stderr_has("1 unsafe command(s) detected");
}

#[test]
fn configured_deny_rules_block_commands() {
    let temp = Project::empty();
    temp.file(
        ".doscan.toml",
        r#"
[[deny]]
id = "no-deploy"
pattern = "deploy"
reason = "talks to production"
"#,
    );
    temp.file("Procfile", "release: echo deploy > deployed\n");

    let run = temp.doscan().args(&["scan", "--format", "json"]).passes();
    assert_eq!(run.stdout_json()["unsafe_commands"][0]["reason"], "talks to production");
    assert!(!temp.exists("deployed"));
}

#[test]
fn markdown_lists_unsafe_commands_separately() {
    let temp = Project::empty();
    temp.file("Procfile", "nuke: rm -rf /\n");

    temp.doscan()
        .args(&["scan"])
        .passes()
        .stdout_has("## Unsafe commands (not run)")
        .stdout_has("No failed commands.");
}
