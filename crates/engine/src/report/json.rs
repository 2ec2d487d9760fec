// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Machine-readable encoding.

use super::{excerpt, Status};
use doscan_core::{round_secs, CommandType, ScanReport, ScanWarning, Summary};
use serde::{Deserialize, Serialize};

/// One failed execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub command: String,
    pub description: String,
    pub source: String,
    #[serde(rename = "type")]
    pub command_type: CommandType,
    /// Exit code, sentinels included.
    pub return_code: i32,
    /// Seconds, millisecond precision.
    pub execution_time: f64,
    pub error: String,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsafeRecord {
    pub command: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub reason: String,
}

/// Every detected command with its final status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub command: String,
    pub description: String,
    pub source: String,
    #[serde(rename = "type")]
    pub command_type: CommandType,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub generated_at: String,
    pub project_path: String,
    pub total_failed: usize,
    pub dry_run: bool,
    #[serde(default)]
    pub interrupted: bool,
    pub failed_commands: Vec<FailureRecord>,
    #[serde(default)]
    pub unsafe_commands: Vec<UnsafeRecord>,
    #[serde(default)]
    pub commands: Vec<CommandRecord>,
    #[serde(default)]
    pub warnings: Vec<ScanWarning>,
    pub summary: Summary,
}

impl JsonReport {
    pub fn from_report(report: &ScanReport) -> Self {
        let failed_commands = report
            .failed()
            .filter_map(|entry| {
                let result = entry.outcome.result()?;
                Some(FailureRecord {
                    command: entry.command.raw_text().to_string(),
                    description: entry.command.description().to_string(),
                    source: entry.command.source_path().display().to_string(),
                    command_type: entry.command.command_type(),
                    return_code: result.exit_code,
                    execution_time: round_secs(result.duration),
                    error: excerpt(result),
                    timed_out: result.timed_out,
                    suggestions: entry.remediation.iter().flat_map(|r| r.actions.iter().cloned()).collect(),
                })
            })
            .collect();

        let unsafe_commands = report
            .unsafe_entries()
            .filter_map(|entry| {
                let verdict = entry.outcome.verdict()?;
                Some(UnsafeRecord {
                    command: entry.command.raw_text().to_string(),
                    source: entry.command.source_path().display().to_string(),
                    rule: verdict.rule.clone(),
                    reason: verdict.reason.clone(),
                })
            })
            .collect();

        let commands = report
            .entries
            .iter()
            .map(|entry| CommandRecord {
                command: entry.command.raw_text().to_string(),
                description: entry.command.description().to_string(),
                source: entry.command.source_path().display().to_string(),
                command_type: entry.command.command_type(),
                status: Status::of(&entry.outcome).key().to_string(),
            })
            .collect();

        Self {
            generated_at: report.generated_at.clone(),
            project_path: report.project_path.display().to_string(),
            total_failed: report.total_failed(),
            dry_run: report.dry_run,
            interrupted: report.interrupted,
            failed_commands,
            unsafe_commands,
            commands,
            warnings: report.warnings.clone(),
            summary: report.summary,
        }
    }
}

pub(super) fn render(report: &ScanReport) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(&JsonReport::from_report(report))?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
