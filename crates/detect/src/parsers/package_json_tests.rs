// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testutil::{raws, Project};
use doscan_core::meta;

const MANIFEST: &str = r#"{
  "name": "demo",
  "scripts": {
    "test": "echo test",
    "build": "false",
    "empty": ""
  }
}"#;

#[test]
fn one_command_per_script_in_declaration_order() {
    let project = Project::new();
    project.file("package.json", MANIFEST);
    let commands = project.with_source("package.json", parse).unwrap();
    assert_eq!(raws(&commands), vec!["npm run test", "npm run build"]);
    assert_eq!(commands[0].description(), "NPM script - test");
    assert_eq!(commands[0].command_type(), CommandType::NpmScript);
    assert_eq!(commands[1].meta(meta::LINE), Some("5"));
}

#[yare::parameterized(
    yarn = { "yarn.lock", "yarn run test", CommandType::YarnScript },
    pnpm = { "pnpm-lock.yaml", "pnpm run test", CommandType::PnpmScript },
)]
fn lock_file_selects_package_manager(lock: &str, raw: &str, ty: CommandType) {
    let project = Project::new();
    project.file("package.json", r#"{"scripts": {"test": "jest"}}"#);
    project.file(lock, "");
    let commands = project.with_source("package.json", parse).unwrap();
    assert_eq!(raws(&commands), vec![raw]);
    assert_eq!(commands[0].command_type(), ty);
}

#[test]
fn no_scripts_yields_nothing() {
    let project = Project::new();
    project.file("package.json", r#"{"name": "x"}"#);
    assert!(project.with_source("package.json", parse).unwrap().is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    let project = Project::new();
    project.file("package.json", r#"{"scripts": {"#);
    assert!(matches!(project.with_source("package.json", parse), Err(ParseError::Json(_))));
}

#[test]
fn non_object_scripts_is_a_shape_error() {
    let project = Project::new();
    project.file("package.json", r#"{"scripts": ["build"]}"#);
    assert!(matches!(project.with_source("package.json", parse), Err(ParseError::Shape(_))));
}

#[test]
fn array_root_is_not_claimed() {
    let project = Project::new();
    project.file("package.json", "[1, 2]");
    assert!(!project.with_source("package.json", |src| claims(src)));
}
