// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Docker Compose files: config check, then build and start per service.

use super::{command, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{meta, Command, CommandType};

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    src.is_yaml()
}

/// Conventional compose file names, claimed even when malformed.
fn conventional_name(src: &Source<'_>) -> bool {
    let name = src.file_name();
    src.is_yaml() && (name.starts_with("docker-compose") || name.starts_with("compose"))
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    if conventional_name(src) {
        return true;
    }
    src.is_yaml()
        && src
            .yaml()
            .is_ok_and(|doc| doc.get("services").is_some_and(serde_yaml::Value::is_mapping))
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let doc = src.yaml()?;
    let Some(services) = doc.get("services").and_then(serde_yaml::Value::as_mapping) else {
        return Err(ParseError::shape("no `services` mapping"));
    };

    let compose = format!("docker compose -f {}", quote(src.file_name()));
    let mut commands: Vec<Command> = Vec::new();
    commands.extend(command(
        format!("{compose} config --quiet"),
        CommandType::DockerComposeService,
        src,
        "config",
    ));

    for (name, service) in services {
        let Some(name) = name.as_str() else {
            continue;
        };
        let svc = quote(name);
        if service.get("build").is_some() {
            commands.extend(
                command(format!("{compose} build {svc}"), CommandType::DockerComposeService, src, &format!("build {name}"))
                    .map(|c| c.with_meta(meta::SERVICE, name)),
            );
        }
        commands.extend(
            command(format!("{compose} up -d {svc}"), CommandType::DockerComposeService, src, &format!("up {name}"))
                .map(|c| c.with_meta(meta::SERVICE, name)),
        );
    }
    Ok(commands)
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
