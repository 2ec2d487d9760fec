// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `doscan list` - show detected commands and their verdicts

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use doscan_core::{CommandType, Outcome, ScanReport, Severity};
use doscan_engine::CliOverrides;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::color;
use crate::setup;

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Project directory (default: current directory)
    pub path: Option<PathBuf>,

    /// Only scan files matching this glob (repeatable)
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Skip files matching this glob (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Do not apply the built-in excludes
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// One detected command as `list` shows it.
#[derive(Debug, Serialize, PartialEq)]
pub struct ListRow {
    pub command: String,
    pub description: String,
    pub source: String,
    #[serde(rename = "type")]
    pub command_type: CommandType,
    /// `run`, `unsafe`, `unusable` or `ignored`.
    pub verdict: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub async fn handle(args: ListArgs) -> Result<()> {
    let root = setup::project_root(args.path.as_deref())?;
    let overrides = CliOverrides {
        include: args.include,
        exclude: args.exclude,
        no_default_excludes: args.no_default_excludes,
        ..CliOverrides::default()
    };
    let settings = setup::settings(&root, overrides)?;
    let report = setup::pipeline(&settings, true)?.run(&root, &CancellationToken::new()).await?;

    for warning in &report.warnings {
        eprintln!("warning: {}: {}", warning.path.display(), warning.message);
    }

    let rows = rows(&report);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No commands detected");
    } else {
        print!("{}", render(&rows));
    }
    Ok(())
}

pub(crate) fn rows(report: &ScanReport) -> Vec<ListRow> {
    report
        .entries
        .iter()
        .map(|entry| {
            let (verdict, reason) = match &entry.outcome {
                Outcome::Skipped(v) => {
                    let label = v.severity.unwrap_or(Severity::Unusable).to_string();
                    (label, Some(v.reason.clone()))
                }
                _ => ("run".to_string(), None),
            };
            let source = entry.command.source_path();
            ListRow {
                command: entry.command.raw_text().to_string(),
                description: entry.command.description().to_string(),
                source: source.strip_prefix(&report.project_path).unwrap_or(source).display().to_string(),
                command_type: entry.command.command_type(),
                verdict,
                reason,
            }
        })
        .collect()
}

pub(crate) fn render(rows: &[ListRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let label = format!("{:<8}", row.verdict);
        let label = match row.verdict.as_str() {
            "run" => color::header(&label),
            "unsafe" => color::alert(&label),
            _ => color::muted(&label),
        };
        let first_line = row.command.lines().next().unwrap_or_default();
        out.push_str(&format!(
            "{label}  {}  {}\n",
            color::context(&format!("{:<24}", row.source)),
            color::literal(first_line)
        ));
        if let Some(reason) = &row.reason {
            out.push_str(&format!("          {}\n", color::context(reason)));
        }
    }

    let runnable = rows.iter().filter(|r| r.verdict == "run").count();
    let unsafe_count = rows.iter().filter(|r| r.verdict == "unsafe").count();
    out.push_str(&format!(
        "\n{} command(s): {runnable} runnable, {} skipped ({unsafe_count} unsafe)\n",
        rows.len(),
        rows.len() - runnable
    ));
    out
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
