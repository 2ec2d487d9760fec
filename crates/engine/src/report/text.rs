// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One line per command, for piping into other tools.

use super::{display_path, Status};
use doscan_core::{format_duration, ScanReport};
use std::fmt::Write;

pub(super) fn render(report: &ScanReport, verbose: bool) -> String {
    let mut out = String::new();
    for entry in &report.entries {
        let status = Status::of(&entry.outcome);
        if status == Status::Skip && !verbose {
            continue;
        }
        let duration = entry.outcome.result().map(|r| format_duration(r.duration)).unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "{:<11}  {:>8}  {}  {}  {}",
            status.to_string(),
            duration,
            entry.command.command_type(),
            display_path(report, entry.command.source_path()),
            entry.command.raw_text().trim_end().replace('\n', "\\n"),
        );
    }
    let s = &report.summary;
    let _ = writeln!(
        out,
        "summary: total={} attempted={} succeeded={} failed={} unsafe={} skipped={} success_rate={:.1}%",
        s.total, s.attempted, s.succeeded, s.failed, s.unsafe_count, s.skipped, s.success_rate
    );
    out
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
