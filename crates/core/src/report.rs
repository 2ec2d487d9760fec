// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate scan report.

use crate::command::Command;
use crate::outcome::Outcome;
use crate::verdict::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Non-fatal problem met while scanning (unreadable or malformed file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Suggested fix attached to a failed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remediation {
    /// Short name of the matched failure signature.
    pub signature: String,
    pub actions: Vec<String>,
}

/// One detected command and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub command: Command,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remediation: Vec<Remediation>,
}

/// Derived counters over a report's entries.
///
/// The success rate only counts attempted executions: unsafe, ignored,
/// unusable and dry-run entries are excluded from the denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub crashed: usize,
    #[serde(rename = "unsafe")]
    pub unsafe_count: usize,
    pub skipped: usize,
    pub not_run: usize,
    pub success_rate: f64,
}

impl Summary {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a ReportEntry>) -> Self {
        let mut summary = Summary::default();
        for entry in entries {
            summary.total += 1;
            match &entry.outcome {
                Outcome::Executed(result) => {
                    summary.attempted += 1;
                    if result.succeeded() {
                        summary.succeeded += 1;
                    } else {
                        summary.failed += 1;
                    }
                    if result.timed_out {
                        summary.timed_out += 1;
                    }
                    if result.crashed {
                        summary.crashed += 1;
                    }
                }
                Outcome::Skipped(verdict) if verdict.severity == Some(Severity::Unsafe) => {
                    summary.unsafe_count += 1;
                }
                Outcome::Skipped(_) => summary.skipped += 1,
                Outcome::NotRun => summary.not_run += 1,
            }
        }
        summary.success_rate = success_rate(summary.succeeded, summary.attempted);
        summary
    }
}

/// Percentage rounded to one decimal; zero attempts yields `0.0`.
pub fn success_rate(succeeded: usize, attempted: usize) -> f64 {
    if attempted == 0 {
        return 0.0;
    }
    let pct = succeeded as f64 * 100.0 / attempted as f64;
    (pct * 10.0).round() / 10.0
}

/// The aggregate result of one scan invocation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub project_path: PathBuf,
    /// RFC 3339 timestamp.
    pub generated_at: String,
    pub dry_run: bool,
    /// The operator aborted the scan; entries are partial.
    pub interrupted: bool,
    pub entries: Vec<ReportEntry>,
    pub warnings: Vec<ScanWarning>,
    pub summary: Summary,
}

impl ScanReport {
    pub fn new(
        project_path: impl Into<PathBuf>,
        generated_at: impl Into<String>,
        entries: Vec<ReportEntry>,
    ) -> Self {
        let summary = Summary::from_entries(&entries);
        Self {
            project_path: project_path.into(),
            generated_at: generated_at.into(),
            dry_run: false,
            interrupted: false,
            entries,
            warnings: Vec::new(),
            summary,
        }
    }

    pub fn failed(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.outcome.is_failure())
    }

    pub fn unsafe_entries(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.outcome.is_unsafe())
    }

    pub fn total_failed(&self) -> usize {
        self.summary.failed
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
