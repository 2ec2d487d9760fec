// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testutil::{raws, Project};

#[test]
fn builds_with_directory_tag() {
    let project = Project::new();
    project.file("My_API Server/Dockerfile", "# syntax=docker/dockerfile:1\nFROM rust:1 AS build\n");
    let commands = project.with_source("My_API Server/Dockerfile", parse).unwrap();
    assert_eq!(raws(&commands), vec!["docker build -f Dockerfile -t my_api-server ."]);
    assert_eq!(commands[0].working_directory(), project.root().join("My_API Server"));
}

#[test]
fn variant_file_names_are_passed_with_dash_f() {
    let project = Project::new();
    project.file("svc/Dockerfile.dev", "from alpine\n");
    let commands = project.with_source("svc/Dockerfile.dev", parse).unwrap();
    assert_eq!(raws(&commands), vec!["docker build -f Dockerfile.dev -t svc ."]);
}

#[yare::parameterized(
    dockerfile = { "Dockerfile", "FROM alpine\n", true },
    suffixed   = { "Dockerfile.prod", "FROM alpine\n", true },
    extension  = { "api.dockerfile", "FROM alpine\n", true },
    no_from    = { "Dockerfile", "RUN echo hi\n", false },
    unrelated  = { "Dockerfile-notes.md", "FROM alpine\n", false },
)]
fn claims_when_named_and_has_from(name: &str, content: &str, expected: bool) {
    let project = Project::new();
    project.file(name, content);
    assert_eq!(project.with_source(name, |src| claims(src)), expected);
}
