// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering and output.
//!
//! Renderers are pure functions of a [`ScanReport`]. Writing the artifact is
//! the only filesystem access and happens in [`write_report`].

mod json;
mod markdown;
mod text;

pub use json::{CommandRecord, FailureRecord, JsonReport, UnsafeRecord};

use doscan_core::{ExecutionResult, Outcome, ScanReport, Severity};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Lines of captured output shown for a failure.
pub const EXCERPT_LINES: usize = 20;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown report format `{0}` (expected markdown, json or text)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
    Text,
}

doscan_core::simple_display! {
    ReportFormat {
        Markdown => "markdown",
        Json => "json",
        Text => "text",
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

impl ReportFormat {
    /// Format implied by an output file's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Renders a report in one encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator {
    format: ReportFormat,
    verbose: bool,
}

impl ReportGenerator {
    pub fn new(format: ReportFormat) -> Self {
        Self { format, verbose: false }
    }

    /// Also list ignored and unusable commands.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn render(&self, report: &ScanReport) -> Result<String, ReportError> {
        Ok(match self.format {
            ReportFormat::Markdown => markdown::render(report, self.verbose),
            ReportFormat::Json => json::render(report)?,
            ReportFormat::Text => text::render(report, self.verbose),
        })
    }
}

/// Write `artifact` to `path`, or stdout for `None` and `-`.
///
/// Files are written to a sibling temp file and renamed into place so a
/// failed write never leaves a truncated report behind.
pub fn write_report(artifact: &str, path: Option<&Path>) -> Result<(), ReportError> {
    let Some(path) = path.filter(|p| *p != Path::new("-")) else {
        let mut out = std::io::stdout().lock();
        return out
            .write_all(artifact.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| ReportError::Write { path: PathBuf::from("-"), source });
    };

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let written = std::fs::write(&tmp, artifact).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(source) = written {
        let _ = std::fs::remove_file(&tmp);
        tracing::error!(path = %path.display(), error = %source, "failed to write report");
        return Err(ReportError::Write { path: path.to_path_buf(), source });
    }
    tracing::debug!(path = %path.display(), bytes = artifact.len(), "wrote report");
    Ok(())
}

/// Display state of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Ok,
    Fail(i32),
    Timeout,
    Crash,
    Interrupted,
    Unsafe,
    Skip,
    WouldRun,
}

impl Status {
    pub(crate) fn of(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Executed(r) if r.interrupted => Self::Interrupted,
            Outcome::Executed(r) if r.timed_out => Self::Timeout,
            Outcome::Executed(r) if r.crashed => Self::Crash,
            Outcome::Executed(r) if r.exit_code != 0 => Self::Fail(r.exit_code),
            Outcome::Executed(_) => Self::Ok,
            Outcome::Skipped(v) if v.severity == Some(Severity::Unsafe) => Self::Unsafe,
            Outcome::Skipped(_) => Self::Skip,
            Outcome::NotRun => Self::WouldRun,
        }
    }

    /// Stable lower-case key used in JSON.
    pub(crate) fn key(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Fail(_) => "failed",
            Self::Timeout => "timed_out",
            Self::Crash => "crashed",
            Self::Interrupted => "interrupted",
            Self::Unsafe => "unsafe",
            Self::Skip => "skipped",
            Self::WouldRun => "not_run",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::Fail(code) => write!(f, "FAIL({code})"),
            Self::Timeout => f.write_str("TIMEOUT"),
            Self::Crash => f.write_str("CRASH"),
            Self::Interrupted => f.write_str("INTERRUPTED"),
            Self::Unsafe => f.write_str("UNSAFE"),
            Self::Skip => f.write_str("SKIP"),
            Self::WouldRun => f.write_str("WOULD-RUN"),
        }
    }
}

/// Last [`EXCERPT_LINES`] lines of the text that best explains a failure.
pub(crate) fn excerpt(result: &ExecutionResult) -> String {
    let text = result.error_text().trim_end();
    let lines: Vec<&str> = text.lines().collect();
    lines[lines.len().saturating_sub(EXCERPT_LINES)..].join("\n")
}

/// `path` relative to the project root when it lies inside it.
pub(crate) fn display_path(report: &ScanReport, path: &Path) -> String {
    path.strip_prefix(&report.project_path).unwrap_or(path).display().to_string()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
