// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The seam between the executor and whatever actually runs a command.

use async_trait::async_trait;
use doscan_core::{Command, ExecutionResult};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Per-run limits and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSpec {
    pub timeout: Duration,
    /// Overrides merged over the inherited environment.
    pub env: Vec<(String, String)>,
}

/// Runs one command to completion, timeout, or cancellation.
///
/// Implementations never fail: launch errors become crashed results.
#[async_trait]
pub trait Runner: Send + Sync + 'static {
    async fn run(&self, command: &Command, spec: &RunSpec, cancel: &CancellationToken) -> ExecutionResult;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{RunSpec, Runner};
    use async_trait::async_trait;
    use doscan_core::{Command, ExecutionResult};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    /// Recorded invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RunCall {
        pub raw_text: String,
        pub working_directory: PathBuf,
        pub spec: RunSpec,
    }

    #[derive(Default)]
    struct FakeRunnerState {
        calls: Vec<RunCall>,
        scripted: HashMap<String, ExecutionResult>,
        delay: Duration,
        running: usize,
        max_running: usize,
    }

    /// Fake runner for testing.
    ///
    /// Commands exit 0 with empty output unless a result was scripted for
    /// their exact text. A configured delay longer than the run's timeout
    /// yields a timed-out result; cancellation during the delay yields an
    /// interrupted one.
    #[derive(Clone, Default)]
    pub struct FakeRunner {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script the result returned for `raw_text`.
        pub fn respond(self, raw_text: &str, result: ExecutionResult) -> Self {
            self.inner.lock().scripted.insert(raw_text.to_string(), result);
            self
        }

        /// Script a plain exit code (and stderr) for `raw_text`.
        pub fn exit(self, raw_text: &str, code: i32, stderr: &str) -> Self {
            let result = ExecutionResult::exited(code, String::new(), stderr.to_string(), Duration::ZERO);
            self.respond(raw_text, result)
        }

        /// Simulated run time for every command.
        pub fn with_delay(self, delay: Duration) -> Self {
            self.inner.lock().delay = delay;
            self
        }

        /// Get all recorded invocations, in start order
        pub fn calls(&self) -> Vec<RunCall> {
            self.inner.lock().calls.clone()
        }

        /// Raw texts of recorded invocations, in start order
        pub fn ran(&self) -> Vec<String> {
            self.inner.lock().calls.iter().map(|c| c.raw_text.clone()).collect()
        }

        /// Highest number of commands observed running at once.
        pub fn max_concurrency(&self) -> usize {
            self.inner.lock().max_running
        }
    }

    #[async_trait]
    impl Runner for FakeRunner {
        async fn run(&self, command: &Command, spec: &RunSpec, cancel: &CancellationToken) -> ExecutionResult {
            let (delay, scripted) = {
                let mut state = self.inner.lock();
                state.calls.push(RunCall {
                    raw_text: command.raw_text().to_string(),
                    working_directory: command.working_directory().to_path_buf(),
                    spec: spec.clone(),
                });
                state.running += 1;
                state.max_running = state.max_running.max(state.running);
                (state.delay, state.scripted.get(command.raw_text()).cloned())
            };

            let result = tokio::select! {
                _ = tokio::time::sleep(delay.min(spec.timeout)) => {
                    if delay > spec.timeout {
                        ExecutionResult::timed_out(String::new(), String::new(), spec.timeout)
                    } else {
                        scripted.unwrap_or_else(|| {
                            ExecutionResult::exited(0, String::new(), String::new(), delay)
                        })
                    }
                }
                _ = cancel.cancelled() => {
                    ExecutionResult::interrupted(String::new(), String::new(), Duration::ZERO)
                }
            };

            self.inner.lock().running -= 1;
            result
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRunner, RunCall};
