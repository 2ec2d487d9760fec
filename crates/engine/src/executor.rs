// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executes validated commands through a [`Runner`].

use crate::runner::{RunSpec, Runner};
use doscan_core::{Command, ExecutionResult};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Per-command budget when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub struct Executor<R> {
    runner: R,
    spec: RunSpec,
}

impl<R: Runner> Executor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner, spec: RunSpec { timeout: DEFAULT_TIMEOUT, env: Vec::new() } }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.spec.timeout = timeout;
        self
    }

    /// Environment overrides merged over the inherited environment.
    pub fn with_env(mut self, env: Vec<(String, String)>) -> Self {
        self.spec.env = env;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.spec.timeout
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run one command. Never fails: launch problems, timeouts and
    /// cancellation are all reported through the result.
    pub async fn execute(&self, command: &Command, cancel: &CancellationToken) -> ExecutionResult {
        let span = tracing::info_span!(
            "doscan.exec",
            cmd = command.raw_text(),
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        let recorder = span.clone();

        async move {
            tracing::info!(
                source = %command.source_path().display(),
                cwd = %command.working_directory().display(),
                "running command"
            );
            let result = self.runner.run(command, &self.spec, cancel).await;
            let elapsed_ms = result.duration.as_millis() as u64;
            recorder.record("exit_code", result.exit_code);
            recorder.record("duration_ms", elapsed_ms);

            if result.timed_out {
                tracing::warn!(elapsed_ms, timeout_secs = self.spec.timeout.as_secs(), "command timed out");
            } else if result.crashed {
                tracing::warn!(elapsed_ms, error = result.error.as_deref().unwrap_or(""), "command failed to start");
            } else {
                tracing::info!(exit_code = result.exit_code, elapsed_ms, "command finished");
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
