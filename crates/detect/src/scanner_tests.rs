// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testutil::{raws, Project};
use doscan_core::IgnoreEntry;

fn scanner(include: &[&str], exclude: &[&str]) -> FileScanner {
    let own = |p: &[&str]| p.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    FileScanner::new(&own(include), &own(exclude), IgnoreSet::default()).unwrap()
}

fn fixture() -> Project {
    let project = Project::new();
    project.file("package.json", r#"{"scripts": {"test": "echo test", "build": "false"}}"#);
    project.file("Makefile", "install:\n\t@true\n");
    project.file("svc/Procfile", "web: ./serve\n");
    project.file("node_modules/dep/package.json", r#"{"scripts": {"postinstall": "x"}}"#);
    project
}

#[test]
fn walks_depth_first_in_name_order() {
    let project = fixture();
    let scanner = scanner(&[], &[]);
    let commands: Vec<_> = scanner.scan(project.root()).unwrap().collect();
    assert_eq!(
        raws(&commands),
        vec!["make install", "npm run postinstall", "npm run test", "npm run build", "./serve"]
    );
}

#[test]
fn default_excludes_prune_dependency_trees() {
    let project = fixture();
    let excludes: Vec<String> = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
    let scanner = FileScanner::new(&[], &excludes, IgnoreSet::default()).unwrap();
    let commands: Vec<_> = scanner.scan(project.root()).unwrap().collect();
    assert_eq!(raws(&commands), vec!["make install", "npm run test", "npm run build", "./serve"]);
}

#[yare::parameterized(
    by_name        = { &["Makefile"], &[], vec!["make install"] },
    by_glob        = { &["svc/*"], &[], vec!["./serve"] },
    exclude_wins   = { &["*"], &["package.json"], vec!["make install", "./serve"] },
    exclude_dir    = { &[], &["svc", "node_modules"], vec!["make install", "npm run test", "npm run build"] },
)]
fn filters(include: &[&str], exclude: &[&str], expected: Vec<&str>) {
    let project = fixture();
    let commands: Vec<_> = scanner(include, exclude).scan(project.root()).unwrap().collect();
    assert_eq!(raws(&commands), expected);
}

#[test]
fn ignored_commands_are_suppressed_not_yielded() {
    let project = fixture();
    let ignore = IgnoreSet::new([IgnoreEntry::exact("npm run build")]);
    let scanner = FileScanner::new(&[], &["node_modules".to_string()], ignore).unwrap();
    let mut scan = scanner.scan(project.root()).unwrap();
    let commands: Vec<_> = scan.by_ref().collect();

    assert!(!raws(&commands).contains(&"npm run build"));
    assert_eq!(raws(scan.suppressed()), vec!["npm run build"]);
}

#[test]
fn parse_failures_become_warnings() {
    let project = Project::new();
    project.file("package.json", "{ nope");
    project.file("Makefile", "all:\n");
    let scanner = scanner(&[], &[]);
    let mut scan = scanner.scan(project.root()).unwrap();
    let commands: Vec<_> = scan.by_ref().collect();

    assert_eq!(raws(&commands), vec!["make all"]);
    assert_eq!(scan.warnings().len(), 1);
    assert_eq!(scan.warnings()[0].path, project.root().join("package.json"));
}

#[test]
fn oversized_and_non_utf8_files_are_skipped() {
    let project = Project::new();
    let big = format!("all:\n{}", "#".repeat(MAX_FILE_SIZE as usize + 1));
    project.file("Makefile", &big);
    let path = project.root().join("sub/Makefile");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"all:\n\xff\xfe\n").unwrap();

    let scanner = scanner(&[], &[]);
    let mut scan = scanner.scan(project.root()).unwrap();
    assert_eq!(scan.by_ref().count(), 0);
    let (warnings, _) = scan.into_parts();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[1].message.contains("UTF-8"));
}

#[cfg(unix)]
#[test]
fn symlinks_are_not_followed() {
    let project = Project::new();
    project.file("real/Makefile", "all:\n");
    std::os::unix::fs::symlink(project.root().join("real"), project.root().join("link")).unwrap();
    std::os::unix::fs::symlink(project.root(), project.root().join("real/loop")).unwrap();

    let commands: Vec<_> = scanner(&[], &[]).scan(project.root()).unwrap().collect();
    assert_eq!(raws(&commands), vec!["make all"]);
}

#[test]
fn rescanning_starts_from_scratch() {
    let project = fixture();
    let scanner = scanner(&[], &["node_modules"]);
    let first: Vec<_> = scanner.scan(project.root()).unwrap().collect();
    let second: Vec<_> = scanner.scan(project.root()).unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn invalid_root_and_pattern_are_errors() {
    let project = Project::new();
    let missing = project.root().join("missing");
    assert!(matches!(scanner(&[], &[]).scan(&missing), Err(ScanError::InvalidRoot(_))));
    assert!(matches!(
        FileScanner::new(&["[".to_string()], &[], IgnoreSet::default()),
        Err(ScanError::InvalidPattern { .. })
    ));
}

const TF_MODULE: &str = "terraform {}\nprovider \"null\" {}\n";

#[test]
fn terraform_module_yields_commands_once() {
    let project = Project::new();
    project.file("infra/main.tf", TF_MODULE);
    project.file("infra/outputs.tf", "resource \"null_resource\" \"x\" {}\n");

    let commands: Vec<_> = scanner(&[], &[]).scan(project.root()).unwrap().collect();
    assert_eq!(raws(&commands), vec!["terraform init -backend=false", "terraform validate"]);
    assert_eq!(commands[0].source_path(), project.root().join("infra/main.tf"));
}

#[test]
fn terraform_module_survives_excluded_sibling() {
    let project = Project::new();
    project.file("infra/a_legacy.tf", "resource \"null_resource\" \"old\" {}\n");
    project.file("infra/main.tf", TF_MODULE);

    let commands: Vec<_> =
        scanner(&[], &["**/*_legacy.tf"]).scan(project.root()).unwrap().collect();
    assert_eq!(raws(&commands), vec!["terraform init -backend=false", "terraform validate"]);
    assert_eq!(commands[0].source_path(), project.root().join("infra/main.tf"));
}
