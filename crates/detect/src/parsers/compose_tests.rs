// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testutil::{raws, Project};
use doscan_core::meta;

const COMPOSE: &str = "\
services:
  web:
    build: .
    ports: ['8080:80']
  db:
    image: postgres:16
";

#[test]
fn config_then_build_and_up_per_service() {
    let project = Project::new();
    project.file("docker-compose.yml", COMPOSE);
    let commands = project.with_source("docker-compose.yml", parse).unwrap();
    assert_eq!(
        raws(&commands),
        vec![
            "docker compose -f docker-compose.yml config --quiet",
            "docker compose -f docker-compose.yml build web",
            "docker compose -f docker-compose.yml up -d web",
            "docker compose -f docker-compose.yml up -d db",
        ]
    );
    assert_eq!(commands[0].meta(meta::SERVICE), None);
    assert_eq!(commands[2].meta(meta::SERVICE), Some("web"));
    assert_eq!(commands[3].description(), "Docker Compose - up db");
}

#[test]
fn any_yaml_with_services_mapping_is_claimed() {
    let project = Project::new();
    project.file("stack.yaml", COMPOSE);
    project.file("data.yaml", "services: [a, b]\n");
    assert!(project.with_source("stack.yaml", |src| claims(src)));
    assert!(!project.with_source("data.yaml", |src| claims(src)));
}

#[test]
fn malformed_conventional_file_is_claimed_and_errors() {
    let project = Project::new();
    project.file("compose.yaml", "services:\n  web: [\n");
    project.with_source("compose.yaml", |src| {
        assert!(claims(src));
        assert!(matches!(parse(src), Err(ParseError::Yaml(_))));
    });
}
