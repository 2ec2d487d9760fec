// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terraform modules: `init` and `validate` once per module directory.
//!
//! Every qualifying `.tf` file yields the module's commands; the scanner
//! keeps only the first set per directory among the files it visits.

use super::command;
use crate::error::ParseError;
use crate::source::Source;
use doscan_core::{meta, Command, CommandType};

const BLOCKS: &[&str] = &["terraform", "provider", "resource", "module"];

pub(crate) fn matches_name(src: &Source<'_>) -> bool {
    src.extension() == "tf"
}

pub(crate) fn claims(src: &Source<'_>) -> bool {
    matches_name(src)
}

fn qualifies(body: &hcl::Body) -> bool {
    body.blocks().any(|block| BLOCKS.contains(&block.identifier()))
}

pub(crate) fn parse(src: &Source<'_>) -> Result<Vec<Command>, ParseError> {
    let body = hcl::parse(src.content())?;
    if !qualifies(&body) {
        return Ok(Vec::new());
    }
    let module_dir = src.dir().display().to_string();
    let commands = [("terraform init -backend=false", "init"), ("terraform validate", "validate")]
        .into_iter()
        .filter_map(|(raw, name)| command(raw, CommandType::TerraformCommand, src, name))
        .map(|c| c.with_meta(meta::MODULE_DIR, module_dir.as_str()))
        .collect();
    Ok(commands)
}

#[cfg(test)]
#[path = "terraform_tests.rs"]
mod tests;
