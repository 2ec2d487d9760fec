// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real subprocess execution via `sh -c`.

use crate::runner::{RunSpec, Runner};
use async_trait::async_trait;
use doscan_core::{Command, ExecutionResult, EXIT_CRASHED};
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;
use parking_lot::Mutex;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Captured bytes kept per stream.
pub const OUTPUT_LIMIT: usize = 1024 * 1024;

/// Appended when a stream exceeded [`OUTPUT_LIMIT`].
pub const TRUNCATED_MARKER: &str = "\n[output truncated]";

/// Set for every command so tools don't wait for input.
const DEFAULT_ENV: &[(&str, &str)] = &[("CI", "true"), ("DEBIAN_FRONTEND", "noninteractive")];

/// How long output pipes may stay open after the shell exits, e.g. held by
/// a backgrounded child.
const DRAIN_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Default)]
struct Capture {
    bytes: Vec<u8>,
    truncated: bool,
}

impl Capture {
    fn push(&mut self, data: &[u8]) {
        let room = OUTPUT_LIMIT.saturating_sub(self.bytes.len());
        if data.len() > room {
            self.truncated = true;
        }
        self.bytes.extend_from_slice(&data[..data.len().min(room)]);
    }

    fn text(&self) -> String {
        let mut text = String::from_utf8_lossy(&self.bytes).into_owned();
        if self.truncated {
            text.push_str(TRUNCATED_MARKER);
        }
        text
    }
}

type Shared = Arc<Mutex<Capture>>;

/// Read `reader` to EOF into `sink`. Bytes past the limit are drained and
/// dropped so the child never blocks on a full pipe.
fn drain<R>(reader: Option<R>, sink: Shared) -> Option<JoinHandle<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut reader = reader?;
    Some(tokio::spawn(async move {
        let mut chunk = vec![0u8; 8192];
        loop {
            match reader.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => sink.lock().push(&chunk[..n]),
            }
        }
    }))
}

/// Exit code as a shell reports it: signal deaths become `128 + n`. A
/// status with neither counts as a crash.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().or_else(|| status.signal().map(|sig| 128 + sig)).unwrap_or(EXIT_CRASHED)
}

fn kill_group(pid: Option<u32>) {
    let Some(pid) = pid.and_then(|p| i32::try_from(p).ok()) else {
        return;
    };
    if let Err(e) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
        tracing::debug!(pid, error = %e, "process group already gone");
    }
}

enum End {
    Exited(std::io::Result<ExitStatus>),
    TimedOut,
    Cancelled,
}

/// Runs commands with `sh -c` in their own process group.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Runner for ProcessRunner {
    async fn run(&self, command: &Command, spec: &RunSpec, cancel: &CancellationToken) -> ExecutionResult {
        let started = Instant::now();
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c")
            .arg(command.raw_text())
            .current_dir(command.working_directory())
            .envs(DEFAULT_ENV.iter().copied())
            .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .process_group(0)
            .kill_on_drop(true);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!(
                    cwd = %command.working_directory().display(),
                    error = %e,
                    "failed to launch command"
                );
                return ExecutionResult::crashed(e.to_string(), started.elapsed());
            }
        };
        let pid = child.id();
        let stdout: Shared = Arc::default();
        let stderr: Shared = Arc::default();
        let readers: Vec<JoinHandle<()>> = [
            drain(child.stdout.take(), Arc::clone(&stdout)),
            drain(child.stderr.take(), Arc::clone(&stderr)),
        ]
        .into_iter()
        .flatten()
        .collect();

        let end = tokio::select! {
            status = child.wait() => End::Exited(status),
            _ = tokio::time::sleep(spec.timeout) => End::TimedOut,
            _ = cancel.cancelled() => End::Cancelled,
        };
        if !matches!(end, End::Exited(_)) {
            kill_group(pid);
            let _ = child.wait().await;
        }

        let drained = tokio::time::timeout(DRAIN_GRACE, futures_util::future::join_all(readers)).await;
        if drained.is_err() {
            // Stragglers in the group still hold the pipes open.
            kill_group(pid);
        }
        let duration = started.elapsed();
        let (out, err) = (stdout.lock().text(), stderr.lock().text());

        match end {
            End::Exited(Ok(status)) => ExecutionResult::exited(exit_code(status), out, err, duration),
            End::Exited(Err(e)) => ExecutionResult::crashed(e.to_string(), duration),
            End::TimedOut => ExecutionResult::timed_out(out, err, duration),
            End::Cancelled => ExecutionResult::interrupted(out, err, duration),
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
