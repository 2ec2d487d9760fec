// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ansible playbooks, plus the inventory, vault and galaxy operations they
//! imply.

use super::{command, quote};
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{meta, Command, CommandType};
use serde_yaml::Value;
use std::path::Path;

/// Keys that make a mapping look like a play.
const PLAY_KEYS: &[&str] =
    &["hosts", "tasks", "roles", "import_playbook", "ansible.builtin.import_playbook"];

/// Inventory files looked for beside the playbook, in order.
const INVENTORY_NAMES: &[&str] =
    &["inventory", "inventory.ini", "inventory.yml", "hosts", "hosts.ini"];

const GALAXY_REQUIREMENTS: &[&str] = &["requirements.yml", "requirements.yaml"];

const VAULT_HEADER: &str = "$ANSIBLE_VAULT";

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    src.is_yaml()
}

fn is_play(value: &Value) -> bool {
    value.as_mapping().is_some_and(|m| PLAY_KEYS.iter().any(|k| m.contains_key(*k)))
}

fn plays(doc: &Value) -> Option<&Vec<Value>> {
    doc.as_sequence().filter(|plays| !plays.is_empty() && plays.iter().all(is_play))
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    src.is_yaml() && src.yaml().is_ok_and(|doc| plays(doc).is_some())
}

fn inventory(dir: &Path) -> Option<&'static str> {
    INVENTORY_NAMES.iter().copied().find(|name| dir.join(name).is_file())
}

/// Galaxy requirements file relative to the playbook directory.
fn galaxy_requirements(dir: &Path) -> Option<String> {
    for base in ["", "roles/"] {
        for name in GALAXY_REQUIREMENTS {
            let rel = format!("{base}{name}");
            if dir.join(&rel).is_file() {
                return Some(rel);
            }
        }
    }
    None
}

fn is_vault_encrypted(path: &Path) -> bool {
    std::fs::read_to_string(path).is_ok_and(|text| text.trim_start().starts_with(VAULT_HEADER))
}

/// Role names referenced by plays, `namespace.role` shaped only.
fn galaxy_roles(plays: &[Value]) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for play in plays {
        let Some(list) = play.get("roles").and_then(Value::as_sequence) else {
            continue;
        };
        for role in list {
            let name = role.as_str().or_else(|| role.get("role").and_then(Value::as_str));
            let Some(name) = name else {
                continue;
            };
            let galaxy_shaped = matches!(name.split_once('.'), Some((ns, r)) if !ns.is_empty() && !r.is_empty() && !r.contains('.'))
                && !name.contains('/');
            if galaxy_shaped && !roles.iter().any(|r| r == name) {
                roles.push(name.to_string());
            }
        }
    }
    roles
}

fn vars_files(plays: &[Value]) -> Vec<&str> {
    let mut files: Vec<&str> = Vec::new();
    for play in plays {
        let Some(list) = play.get("vars_files").and_then(Value::as_sequence) else {
            continue;
        };
        for file in list.iter().filter_map(Value::as_str) {
            if !files.contains(&file) {
                files.push(file);
            }
        }
    }
    files
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let doc = src.yaml()?;
    let Some(plays) = plays(doc) else {
        return Err(ParseError::shape("root is not a sequence of plays"));
    };
    let dir = src.dir();
    let file = quote(src.file_name());
    let inventory = inventory(dir);
    let mut commands = Vec::new();

    let raw = match inventory {
        Some(inv) => format!("ansible-playbook -i {} {file}", quote(inv)),
        None => format!("ansible-playbook {file}"),
    };
    let mut playbook = command(raw, CommandType::AnsiblePlaybook, src, src.file_name());
    if let Some(inv) = inventory {
        playbook = playbook.map(|c| c.with_meta(meta::INVENTORY, inv));
    }
    if src.content().contains("!vault") {
        playbook = playbook.map(|c| c.with_meta(meta::REQUIRED_ENV, "ANSIBLE_VAULT_PASSWORD_FILE"));
    }
    commands.extend(playbook);

    if let Some(inv) = inventory {
        let raw = format!("ansible-inventory -i {} --list", quote(inv));
        commands.extend(
            command(raw, CommandType::AnsibleInventory, src, inv).map(|c| c.with_meta(meta::INVENTORY, inv)),
        );
    }

    for vars in vars_files(plays) {
        if is_vault_encrypted(&dir.join(vars)) {
            let raw = format!("ansible-vault view {}", quote(vars));
            commands.extend(command(raw, CommandType::AnsibleVault, src, vars));
        }
    }

    if let Some(reqs) = galaxy_requirements(dir) {
        let raw = format!("ansible-galaxy install -r {}", quote(&reqs));
        commands.extend(command(raw, CommandType::AnsibleGalaxy, src, &reqs));
    } else {
        for role in galaxy_roles(plays) {
            let raw = format!("ansible-galaxy role install {}", quote(&role));
            commands.extend(command(raw, CommandType::AnsibleGalaxy, src, &role));
        }
    }
    Ok(commands)
}

#[cfg(test)]
#[path = "ansible_tests.rs"]
mod tests;
