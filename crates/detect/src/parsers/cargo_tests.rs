// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testutil::{raws, Project};

#[yare::parameterized(
    package   = { "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n" },
    workspace = { "[workspace]\nmembers = [\"crates/*\"]\n" },
)]
fn builds_and_tests(manifest: &str) {
    let project = Project::new();
    project.file("Cargo.toml", manifest);
    let commands = project.with_source("Cargo.toml", parse).unwrap();
    assert_eq!(raws(&commands), vec!["cargo build", "cargo test"]);
    assert_eq!(commands[1].description(), "Cargo command - test");
}

#[test]
fn manifest_without_package_yields_nothing() {
    let project = Project::new();
    project.file("Cargo.toml", "[patch.crates-io]\n");
    assert!(project.with_source("Cargo.toml", parse).unwrap().is_empty());
}
