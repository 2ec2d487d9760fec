// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testutil::{dry_run_report, sample_report};

#[test]
fn one_line_per_entry() {
    let out = render(&sample_report(), false);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 5, "{out}");
    assert!(lines[0].starts_with("OK  "));
    assert!(lines[0].ends_with("npm-script  package.json  npm run test"));
    assert!(lines[1].starts_with("FAIL(1)"));
    assert!(lines[1].contains("1.25s"));
    assert!(lines[3].starts_with("UNSAFE"));
    assert!(lines[3].contains("  -  "));
    assert_eq!(
        lines[4],
        "summary: total=5 attempted=3 succeeded=2 failed=1 unsafe=1 skipped=1 success_rate=66.7%"
    );
}

#[test]
fn verbose_includes_skipped() {
    let out = render(&sample_report(), true);
    assert!(out.lines().any(|l| l.starts_with("SKIP") && l.ends_with("frobnicate")));
}

#[test]
fn dry_run_marks_would_run() {
    let out = render(&dry_run_report(), false);
    assert_eq!(out.lines().filter(|l| l.starts_with("WOULD-RUN")).count(), 3);
}
