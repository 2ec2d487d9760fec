// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testutil::{raws, Project};
use doscan_core::meta;

const JUSTFILE: &str = "\
set shell := [\"bash\", \"-c\"]
version := \"1.0\"
alias b := build

# Build everything
build:
    cargo build

@test filter='': build
    cargo test {{filter}}

_helper:
    echo private

[private]
hidden:
    echo hidden

[linux]
deploy target=\"prod\":
    ./deploy.sh {{target}}
";

#[test]
fn public_recipes_only() {
    let project = Project::new();
    project.file("justfile", JUSTFILE);
    let commands = project.with_source("justfile", parse).unwrap();
    assert_eq!(raws(&commands), vec!["just build", "just test", "just deploy"]);
    assert_eq!(commands[0].meta(meta::LINE), Some("6"));
    assert_eq!(commands[2].description(), "Just recipe - deploy");
}

#[yare::parameterized(
    lower  = { "justfile", true },
    upper  = { "Justfile", true },
    hidden = { ".justfile", true },
    other  = { "justfile.txt", false },
)]
fn claims_by_name(name: &str, expected: bool) {
    let project = Project::new();
    project.file(name, "build:\n");
    assert_eq!(project.with_source(name, |src| claims(src)), expected);
}
