// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Command, CommandType, ExecutionResult, Outcome, ReportEntry};
use std::time::Duration;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core types.
pub mod strategies {
    use crate::CommandType;
    use proptest::prelude::*;

    pub fn arb_command_type() -> impl Strategy<Value = CommandType> {
        prop_oneof![
            Just(CommandType::MakeTarget),
            Just(CommandType::NpmScript),
            Just(CommandType::DockerComposeService),
            Just(CommandType::AnsiblePlaybook),
            Just(CommandType::GithubActionsStep),
            Just(CommandType::GenericShell),
        ]
    }

    /// Harmless filler text that contains no shell metacharacters.
    pub fn arb_word() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,12}"
    }
}

// ── Factory functions ───────────────────────────────────────────────────

pub fn command(text: &str, ty: CommandType, source: &str) -> Command {
    Command::builder().raw_text(text).command_type(ty).source_path(source).build()
}

pub fn exited(code: i32, stderr: &str, millis: u64) -> Outcome {
    Outcome::Executed(ExecutionResult::exited(
        code,
        String::new(),
        stderr.to_string(),
        Duration::from_millis(millis),
    ))
}

pub fn entry(command: Command, outcome: Outcome) -> ReportEntry {
    ReportEntry { command, outcome, remediation: Vec::new() }
}
