// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution results and per-command outcomes.

use crate::verdict::ValidationVerdict;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exit code reported when the command exceeded its timeout.
///
/// Real process exit codes are 0..=255 (signals map to `128 + n`), so the
/// negative sentinels never collide with a genuine result.
pub const EXIT_TIMED_OUT: i32 = -1;
/// Exit code reported when the process could not be started.
pub const EXIT_CRASHED: i32 = -2;
/// Exit code reported when the operator aborted the scan mid-command.
pub const EXIT_INTERRUPTED: i32 = -3;

/// Outcome of running one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    #[serde(with = "duration_secs")]
    pub duration: Duration,
    pub timed_out: bool,
    pub crashed: bool,
    #[serde(default)]
    pub interrupted: bool,
    /// OS-level error for crashed launches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionResult {
    pub fn exited(exit_code: i32, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            timed_out: false,
            crashed: false,
            interrupted: false,
            error: None,
        }
    }

    pub fn timed_out(stdout: String, stderr: String, duration: Duration) -> Self {
        Self { exit_code: EXIT_TIMED_OUT, timed_out: true, ..Self::exited(0, stdout, stderr, duration) }
    }

    pub fn crashed(error: impl Into<String>, duration: Duration) -> Self {
        Self {
            exit_code: EXIT_CRASHED,
            crashed: true,
            error: Some(error.into()),
            ..Self::exited(0, String::new(), String::new(), duration)
        }
    }

    pub fn interrupted(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: EXIT_INTERRUPTED,
            interrupted: true,
            ..Self::exited(0, stdout, stderr, duration)
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0 && !self.timed_out && !self.crashed && !self.interrupted
    }

    pub fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// Text most likely to explain a failure: stderr, else stdout, else the
    /// launch error.
    pub fn error_text(&self) -> &str {
        if !self.stderr.trim().is_empty() {
            &self.stderr
        } else if !self.stdout.trim().is_empty() {
            &self.stdout
        } else {
            self.error.as_deref().unwrap_or("")
        }
    }
}

/// What happened to a detected command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Executed(ExecutionResult),
    Skipped(ValidationVerdict),
    /// Dry run: the command would have been executed.
    NotRun,
}

impl Outcome {
    pub fn result(&self) -> Option<&ExecutionResult> {
        match self {
            Outcome::Executed(result) => Some(result),
            _ => None,
        }
    }

    pub fn verdict(&self) -> Option<&ValidationVerdict> {
        match self {
            Outcome::Skipped(verdict) => Some(verdict),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.result().is_some_and(ExecutionResult::failed)
    }

    pub fn is_unsafe(&self) -> bool {
        self.verdict().is_some_and(ValidationVerdict::is_unsafe)
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Ok(Duration::try_from_secs_f64(secs).unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
