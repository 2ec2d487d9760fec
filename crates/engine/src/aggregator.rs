// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collects outcomes in encounter order.

use crate::remediation;
use doscan_core::{Command, CommandType, Outcome, ReportEntry, ScanReport, ScanWarning, Summary};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct ResultAggregator {
    seen: HashSet<(String, PathBuf)>,
    entries: Vec<ReportEntry>,
    warnings: Vec<ScanWarning>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a command's `(raw_text, source_path)` identity. Returns false
    /// for a duplicate, which must then be neither run nor recorded.
    pub fn admit(&mut self, command: &Command) -> bool {
        let (text, source) = command.key();
        let fresh = self.seen.insert((text.to_string(), source.to_path_buf()));
        if !fresh {
            tracing::debug!(cmd = text, source = %source.display(), "duplicate command dropped");
        }
        fresh
    }

    /// Store an outcome, attaching remediation to failed executions.
    pub fn record(&mut self, command: Command, outcome: Outcome) {
        let remediation = match &outcome {
            Outcome::Executed(result) => remediation::suggest(&command, result),
            _ => Vec::new(),
        };
        self.entries.push(ReportEntry { command, outcome, remediation });
    }

    pub fn warn(&mut self, warnings: impl IntoIterator<Item = ScanWarning>) {
        self.warnings.extend(warnings);
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    pub fn failed(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.outcome.is_failure())
    }

    pub fn unsafe_entries(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.outcome.is_unsafe())
    }

    pub fn summary(&self) -> Summary {
        Summary::from_entries(&self.entries)
    }

    pub fn counts_by_source(&self) -> BTreeMap<&Path, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.command.source_path()).or_insert(0) += 1;
        }
        counts
    }

    pub fn counts_by_type(&self) -> BTreeMap<CommandType, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.command.command_type()).or_insert(0) += 1;
        }
        counts
    }

    /// Freeze into a report.
    pub fn into_report(self, project_path: impl Into<PathBuf>, generated_at: impl Into<String>) -> ScanReport {
        let mut report = ScanReport::new(project_path, generated_at, self.entries);
        report.warnings = self.warnings;
        report
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
