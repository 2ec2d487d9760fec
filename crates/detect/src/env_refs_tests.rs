// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use doscan_core::CommandType;

#[yare::parameterized(
    none          = { "make build", &[] },
    plain         = { "echo $HOME", &["HOME"] },
    braced        = { "deploy ${STAGE:-dev}", &["STAGE"] },
    deduplicated  = { "echo $A $B $A", &["A", "B"] },
    make_variable = { "$(CC) -o out", &[] },
    escaped_make  = { "echo $$PATH", &["PATH"] },
)]
fn finds_references(text: &str, expected: &[&str]) {
    assert_eq!(referenced_env(text), expected);
}

#[test]
fn annotate_merges_with_parser_supplied_names() {
    let command = Command::new("ansible-playbook -e env=$ENV site.yml", CommandType::AnsiblePlaybook, "/p/site.yml", "site.yml")
        .unwrap()
        .with_meta(meta::REQUIRED_ENV, "ANSIBLE_VAULT_PASSWORD_FILE");
    let annotated = annotate(command);
    assert_eq!(annotated.required_env(), vec!["ENV", "ANSIBLE_VAULT_PASSWORD_FILE"]);
}

#[test]
fn annotate_leaves_metadata_empty_without_references() {
    let command = Command::new("make", CommandType::MakeTarget, "/p/Makefile", "all").unwrap();
    assert!(annotate(command).meta(meta::REQUIRED_ENV).is_none());
}
