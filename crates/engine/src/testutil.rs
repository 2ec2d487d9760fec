// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures shared by the engine's unit tests.

use doscan_core::test_support::{command, entry, exited};
use doscan_core::{CommandType, Outcome, Remediation, ScanReport, ScanWarning, ValidationVerdict};
use std::path::PathBuf;

pub const GENERATED_AT: &str = "2026-10-19T12:00:00Z";

/// Two passing commands, one failure, one unsafe and one unusable entry,
/// plus a parse warning.
pub fn sample_report() -> ScanReport {
    let mut failed = entry(
        command("npm run build", CommandType::NpmScript, "/p/package.json")
            .with_description("NPM script - build"),
        exited(1, "Error: Cannot find module 'left-pad'\n", 1250),
    );
    failed.remediation = vec![Remediation {
        signature: "missing-module".into(),
        actions: vec!["Install the project's dependencies".into()],
    }];

    let entries = vec![
        entry(
            command("npm run test", CommandType::NpmScript, "/p/package.json")
                .with_description("NPM script - test"),
            exited(0, "", 40),
        ),
        failed,
        entry(
            command("make install", CommandType::MakeTarget, "/p/Makefile")
                .with_description("Make target - install"),
            exited(0, "", 15),
        ),
        entry(
            command("rm -rf /", CommandType::MakeTarget, "/p/Makefile"),
            Outcome::Skipped(ValidationVerdict::unsafe_match("rm-rf-root", "recursive delete of /")),
        ),
        entry(
            command("frobnicate", CommandType::MakeTarget, "/p/Makefile"),
            Outcome::Skipped(ValidationVerdict::unusable("executable not found: frobnicate")),
        ),
    ];
    let mut report = ScanReport::new("/p", GENERATED_AT, entries);
    report.warnings.push(ScanWarning {
        path: PathBuf::from("/p/broken.yml"),
        message: "docker-compose: invalid YAML".into(),
    });
    report
}

/// The same three commands, not run.
pub fn dry_run_report() -> ScanReport {
    let entries = ["npm run test", "npm run build", "make install"]
        .into_iter()
        .map(|text| entry(command(text, CommandType::GenericShell, "/p/Makefile"), Outcome::NotRun))
        .collect();
    let mut report = ScanReport::new("/p", GENERATED_AT, entries);
    report.dry_run = true;
    report
}

/// A directory holding fake executables, used as a validator search path.
pub fn bin_dir(names: &[&str]) -> tempfile::TempDir {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    for name in names {
        let path = dir.path().join(name);
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    dir
}
