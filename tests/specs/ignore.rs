//! `doscan ignore add` and `doscan ignore list`.

use crate::prelude::*;

#[test]
fn add_then_list() {
    let temp = Project::empty();

    temp.doscan()
        .args(&["ignore", "add", "make deploy", "--reason", "needs credentials"])
        .passes()
        .stdout_has("ignored make deploy");
    temp.doscan().args(&["ignore", "list"]).passes().stdout_has("make deploy  # needs credentials");

    let content = temp.read(".doignore");
    assert!(content.starts_with("# doscan ignore file\n"), "got:\n{content}");
    assert!(content.ends_with("# needs credentials\nmake deploy\n"), "got:\n{content}");
}

#[test]
fn adding_twice_keeps_one_entry() {
    let temp = Project::empty();
    temp.doscan().args(&["ignore", "add", "npm run e2e"]).passes();
    temp.doscan().args(&["ignore", "add", "npm run e2e"]).passes().stdout_has("already ignored");

    assert_eq!(temp.read(".doignore").matches("npm run e2e").count(), 1);
}

#[test]
fn added_command_is_skipped_by_scan() {
    let temp = Project::empty();
    temp.file("Procfile", "broken: exit 3\n");

    temp.doscan().args(&["scan"]).exits(1);
    temp.doscan().args(&["ignore", "add", "exit 3"]).passes();
    temp.doscan().args(&["scan"]).passes();
}

#[test]
fn list_includes_config_patterns() {
    let temp = Project::empty();
    temp.file(".doscan.toml", "ignore_patterns = [\"docker compose *\"]\n");

    temp.doscan().args(&["ignore", "list"]).passes().stdout_has("pattern docker compose *");
}

#[test]
fn list_without_entries() {
    let temp = Project::empty();
    temp.doscan().args(&["ignore", "list"]).passes().stdout_has("No ignore entries");
}
