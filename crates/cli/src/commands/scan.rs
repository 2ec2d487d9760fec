// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `doscan scan` - detect, validate, execute and report

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use doscan_core::ScanReport;
use doscan_engine::{failure_entries, write_report, CliOverrides, IgnoreFile, ReportFormat, ReportGenerator};

use crate::exit_error::ExitError;
use crate::setup::{self, parse_key_value};

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Project directory (default: current directory)
    pub path: Option<PathBuf>,

    /// Only scan files matching this glob (repeatable)
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Skip files matching this glob (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Per-command timeout in seconds (default: 60)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Report format (default: from the --output extension, else markdown)
    #[arg(long, value_name = "FORMAT", value_parser = parse_format)]
    pub format: Option<ReportFormat>,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Detect and validate only; report what would run
    #[arg(long)]
    pub dry_run: bool,

    /// Run up to N commands at once (default: 1)
    #[arg(short, long, value_name = "N", value_parser = parse_jobs)]
    pub jobs: Option<usize>,

    /// Extra environment for executed commands (repeatable)
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub env: Vec<(String, String)>,

    /// Ignore file to read (default: <PATH>/.doignore)
    #[arg(long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Append failed commands to the ignore file after the scan
    #[arg(long)]
    pub add_failed_to_ignore: bool,

    /// Do not apply the built-in excludes (node_modules, target, ...)
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Exit non-zero when an unsafe command is detected
    #[arg(long)]
    pub strict: bool,
}

impl ScanArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            timeout: self.timeout.map(Duration::from_secs),
            jobs: self.jobs,
            ignore_file: self.ignore_file.clone(),
            env: self.env.clone(),
            no_default_excludes: self.no_default_excludes,
        }
    }

    /// Explicit `--format`, else inferred from `--output`, else markdown.
    pub fn report_format(&self) -> ReportFormat {
        self.format
            .or_else(|| self.output.as_deref().and_then(ReportFormat::from_path))
            .unwrap_or_default()
    }
}

fn parse_format(s: &str) -> Result<ReportFormat, String> {
    s.parse::<ReportFormat>().map_err(|e| e.to_string())
}

fn parse_jobs(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("invalid job count '{s}': must be a positive integer")),
    }
}

pub async fn handle(args: ScanArgs, verbose: bool) -> Result<()> {
    let root = setup::project_root(args.path.as_deref())?;
    let settings = setup::settings(&root, args.overrides())?;
    let pipeline = setup::pipeline(&settings, args.dry_run)?;

    let cancel = setup::interrupt_token();
    let report = pipeline.run(&root, &cancel).await?;

    let artifact = ReportGenerator::new(args.report_format()).verbose(verbose).render(&report)?;
    let output = args.output.as_deref().filter(|p| *p != Path::new("-"));
    write_report(&artifact, output)?;
    if let Some(path) = output {
        eprintln!("report written to {}", path.display());
    }

    if args.add_failed_to_ignore {
        record_failures(&report, &settings.ignore_file)?;
    }
    exit_status(&report, args.strict)
}

/// Append the report's failures to the ignore file at `path`.
fn record_failures(report: &ScanReport, path: &Path) -> Result<()> {
    let entries = failure_entries(report);
    if entries.is_empty() {
        return Ok(());
    }
    let added = IgnoreFile::append(path, &entries)?;
    tracing::info!(added, path = %path.display(), "recorded failed commands");
    eprintln!("added {added} failed command(s) to {}", path.display());
    Ok(())
}

/// Map a finished scan onto the process exit status.
pub(crate) fn exit_status(report: &ScanReport, strict: bool) -> Result<()> {
    let failed = report.total_failed();
    if failed > 0 {
        return Err(ExitError::failures(format!("{failed} command(s) failed")).into());
    }
    if report.interrupted {
        return Err(ExitError::failures("scan interrupted").into());
    }
    if strict {
        let unsafe_count = report.unsafe_entries().count();
        if unsafe_count > 0 {
            return Err(ExitError::failures(format!("{unsafe_count} unsafe command(s) detected")).into());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
