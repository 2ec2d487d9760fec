// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable encoding.

use super::{display_path, excerpt};
use doscan_core::{format_duration, Outcome, ReportEntry, ScanReport, Severity};
use std::fmt::Write;

pub(super) fn render(report: &ScanReport, verbose: bool) -> String {
    let mut out = String::new();
    header(&mut out, report);

    if report.dry_run {
        would_run(&mut out, report);
    } else {
        let failed: Vec<&ReportEntry> = report.failed().collect();
        if failed.is_empty() {
            out.push_str("No failed commands.\n\n");
        }
        for entry in failed {
            failure(&mut out, report, entry);
        }
    }

    let unsafe_entries: Vec<&ReportEntry> = report.unsafe_entries().collect();
    if !unsafe_entries.is_empty() {
        out.push_str("## Unsafe commands (not run)\n\n");
        for entry in unsafe_entries {
            let reason = entry.outcome.verdict().map(|v| v.reason.as_str()).unwrap_or_default();
            let _ = writeln!(
                out,
                "- `{}` in `{}`: {}",
                inline(entry.command.raw_text()),
                display_path(report, entry.command.source_path()),
                reason
            );
        }
        out.push('\n');
    }

    if verbose {
        skipped(&mut out, report);
    }

    if !report.warnings.is_empty() {
        out.push_str("## Parse warnings\n\n");
        for warning in &report.warnings {
            let _ = writeln!(out, "- `{}`: {}", display_path(report, &warning.path), warning.message);
        }
        out.push('\n');
    }

    summary(&mut out, report);
    out
}

fn header(out: &mut String, report: &ScanReport) {
    out.push_str("# Command Scan Report\n\n");
    let _ = writeln!(out, "- **Project:** `{}`", report.project_path.display());
    let _ = writeln!(out, "- **Generated at:** {}", report.generated_at);
    let mode = if report.dry_run { "dry run" } else { "execute" };
    let _ = writeln!(out, "- **Mode:** {mode}");
    if report.interrupted {
        out.push_str("- **Interrupted:** yes, results are partial\n");
    }
    out.push('\n');
}

fn failure(out: &mut String, report: &ScanReport, entry: &ReportEntry) {
    let Some(result) = entry.outcome.result() else {
        return;
    };
    let command = &entry.command;
    let _ = writeln!(out, "## ❌ {}\n", command.description());
    let _ = writeln!(out, "```sh\n{}\n```\n", command.raw_text().trim_end());
    let _ = writeln!(out, "- **Source:** `{}`", display_path(report, command.source_path()));
    let _ = writeln!(out, "- **Type:** {}", command.command_type());
    if result.timed_out {
        out.push_str("- **Exit code:** timed out\n");
    } else if result.crashed {
        out.push_str("- **Exit code:** failed to start\n");
    } else if result.interrupted {
        out.push_str("- **Exit code:** interrupted\n");
    } else {
        let _ = writeln!(out, "- **Exit code:** {}", result.exit_code);
    }
    let _ = writeln!(out, "- **Duration:** {}", format_duration(result.duration));
    out.push('\n');

    let excerpt = excerpt(result);
    if !excerpt.is_empty() {
        let _ = writeln!(out, "**Error output:**\n\n```\n{excerpt}\n```\n");
    }

    let actions: Vec<&String> = entry.remediation.iter().flat_map(|r| &r.actions).collect();
    if !actions.is_empty() {
        out.push_str("**Suggested actions:**\n\n");
        for action in actions {
            let _ = writeln!(out, "- {action}");
        }
        out.push('\n');
    }
}

fn would_run(out: &mut String, report: &ScanReport) {
    out.push_str("## Would run\n\n");
    for entry in report.entries.iter().filter(|e| matches!(e.outcome, Outcome::NotRun)) {
        let _ = writeln!(
            out,
            "- `{}` ({}, `{}`)",
            inline(entry.command.raw_text()),
            entry.command.description(),
            display_path(report, entry.command.source_path())
        );
    }
    out.push('\n');
}

fn skipped(out: &mut String, report: &ScanReport) {
    let entries: Vec<&ReportEntry> = report
        .entries
        .iter()
        .filter(|e| e.outcome.verdict().is_some_and(|v| v.severity != Some(Severity::Unsafe)))
        .collect();
    if entries.is_empty() {
        return;
    }
    out.push_str("## Skipped commands\n\n");
    for entry in entries {
        let reason = entry.outcome.verdict().map(|v| v.reason.as_str()).unwrap_or_default();
        let _ = writeln!(
            out,
            "- `{}` in `{}`: {}",
            inline(entry.command.raw_text()),
            display_path(report, entry.command.source_path()),
            reason
        );
    }
    out.push('\n');
}

fn summary(out: &mut String, report: &ScanReport) {
    let s = &report.summary;
    out.push_str("## Summary\n\n");
    let _ = writeln!(out, "- **Total detected:** {}", s.total);
    let _ = writeln!(out, "- **Attempted:** {}", s.attempted);
    let _ = writeln!(out, "- **Succeeded:** {}", s.succeeded);
    let _ = writeln!(out, "- **Failed:** {}", s.failed);
    if s.timed_out > 0 {
        let _ = writeln!(out, "- **Timed out:** {}", s.timed_out);
    }
    let _ = writeln!(out, "- **Unsafe:** {}", s.unsafe_count);
    let _ = writeln!(out, "- **Skipped:** {}", s.skipped);
    if report.dry_run {
        let _ = writeln!(out, "- **Would run:** {}", s.not_run);
    }
    let _ = writeln!(out, "- **Success rate:** {:.1}%", s.success_rate);
}

/// Single-line form of a command for inline code spans.
fn inline(text: &str) -> String {
    text.trim().replace('\n', " ⏎ ").replace('`', "'")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
