// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::runner::FakeRunner;
use crate::testutil::bin_dir;
use doscan_core::{IgnoreEntry, IgnoreSet, Severity};
use doscan_detect::{Format, ParserRegistry};
use std::time::Duration;
use tempfile::TempDir;

const MANIFEST: &str = r#"{ "scripts": { "test": "echo test", "build": "false" } }"#;
const MAKEFILE: &str = "install:\n\techo installed\n";

struct Fixture {
    project: TempDir,
    bin: TempDir,
    runner: FakeRunner,
}

impl Fixture {
    fn new() -> Self {
        let project = TempDir::new().unwrap();
        std::fs::write(project.path().join("package.json"), MANIFEST).unwrap();
        std::fs::write(project.path().join("Makefile"), MAKEFILE).unwrap();
        let runner = FakeRunner::new().exit("npm run build", 1, "build failed\n");
        Self { project, bin: bin_dir(&["make", "npm"]), runner }
    }

    fn file(&self, rel: &str, content: &str) {
        let path = self.project.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    fn pipeline(&self, ignore: IgnoreSet) -> Pipeline<FakeRunner> {
        let scanner = FileScanner::new(&[], &[], ignore).unwrap();
        let validator = CommandValidator::default().with_search_path(self.bin.path());
        Pipeline::new(scanner, validator, Executor::new(self.runner.clone()))
    }

    async fn run(&self, pipeline: &Pipeline<FakeRunner>) -> ScanReport {
        pipeline.run(self.project.path(), &CancellationToken::new()).await.unwrap()
    }
}

fn texts(report: &ScanReport) -> Vec<&str> {
    report.entries.iter().map(|e| e.command.raw_text()).collect()
}

#[tokio::test]
async fn one_failure_in_three() {
    let fx = Fixture::new();
    let report = fx.run(&fx.pipeline(IgnoreSet::default())).await;

    assert_eq!(texts(&report), vec!["make install", "npm run test", "npm run build"]);
    assert_eq!(report.total_failed(), 1);
    let failed: Vec<&str> = report.failed().map(|e| e.command.raw_text()).collect();
    assert_eq!(failed, vec!["npm run build"]);
    assert_eq!(report.summary.success_rate, 66.7);
    assert_eq!(fx.runner.ran(), vec!["make install", "npm run test", "npm run build"]);
    assert!(!report.dry_run && !report.interrupted);
}

#[tokio::test]
async fn ignored_command_is_neither_run_nor_counted() {
    let fx = Fixture::new();
    let ignore = IgnoreSet::new([IgnoreEntry::exact("npm run build").with_reason("known broken")]);
    let report = fx.run(&fx.pipeline(ignore)).await;

    assert_eq!(report.total_failed(), 0);
    assert!(!fx.runner.ran().contains(&"npm run build".to_string()));
    let ignored = report.entries.iter().find(|e| e.command.raw_text() == "npm run build").unwrap();
    let verdict = ignored.outcome.verdict().unwrap();
    assert_eq!(verdict.severity, Some(Severity::Ignored));
    assert_eq!(verdict.reason, "ignored: known broken");
    assert_eq!(report.summary.success_rate, 100.0);
}

#[tokio::test]
async fn dry_run_spawns_nothing() {
    let fx = Fixture::new();
    let report = fx.run(&fx.pipeline(IgnoreSet::default()).dry_run(true)).await;

    assert!(report.dry_run);
    assert_eq!(report.entries.len(), 3);
    assert!(report.entries.iter().all(|e| e.outcome == Outcome::NotRun));
    assert!(fx.runner.calls().is_empty());
    assert_eq!(report.summary.not_run, 3);
}

#[tokio::test]
async fn unsafe_commands_never_reach_the_runner() {
    let fx = Fixture::new();
    fx.file("Procfile", "clean: rm -rf /\nwipe: dd if=/dev/zero of=/dev/sda\n");
    let report = fx.run(&fx.pipeline(IgnoreSet::default())).await;

    assert_eq!(report.summary.unsafe_count, 2);
    let ran = fx.runner.ran();
    assert!(!ran.iter().any(|t| t.contains("rm -rf") || t.starts_with("dd ")), "{ran:?}");
    assert_eq!(report.total_failed(), 1, "unsafe entries are not failures");
}

#[tokio::test]
async fn ignore_list_does_not_hide_unsafe_commands() {
    let fx = Fixture::new();
    fx.file("Procfile", "clean: rm -rf /\n");
    let report = fx.run(&fx.pipeline(IgnoreSet::new([IgnoreEntry::exact("rm -rf /")]))).await;

    let entry = report.entries.iter().find(|e| e.command.raw_text() == "rm -rf /").unwrap();
    assert!(entry.outcome.is_unsafe());
}

#[tokio::test]
async fn missing_executable_is_skipped() {
    let fx = Fixture::new();
    fx.file("Procfile", "web: frobnicate --serve\n");
    let report = fx.run(&fx.pipeline(IgnoreSet::default())).await;

    let entry = report.entries.iter().find(|e| e.command.raw_text() == "frobnicate --serve").unwrap();
    assert_eq!(entry.outcome.verdict().unwrap().reason, "executable not found: frobnicate");
    assert!(!fx.runner.ran().contains(&"frobnicate --serve".to_string()));
    assert_eq!(report.summary.skipped, 1);
}

#[tokio::test]
async fn parse_failures_become_warnings() {
    let fx = Fixture::new();
    fx.file("web/package.json", "{ not json");
    let report = fx.run(&fx.pipeline(IgnoreSet::default())).await;

    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].path.ends_with("web/package.json"));
    assert_eq!(report.entries.len(), 3);
}

#[tokio::test]
async fn invalid_root_is_an_error() {
    let fx = Fixture::new();
    let missing = fx.project.path().join("nope");
    let err = fx.pipeline(IgnoreSet::default()).run(&missing, &CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, ScanError::InvalidRoot(_)));
}

#[tokio::test]
async fn parallel_mode_keeps_order_and_bounds() {
    let fx = Fixture::new();
    std::fs::remove_file(fx.project.path().join("package.json")).unwrap();
    std::fs::remove_file(fx.project.path().join("Makefile")).unwrap();
    for dir in ["a", "b", "c"] {
        fx.file(&format!("{dir}/Makefile"), "lint:\n\ttrue\n");
    }
    let runner = fx.runner.clone().with_delay(Duration::from_millis(50));
    let scanner = FileScanner::new(&[], &[], IgnoreSet::default()).unwrap();
    let validator = CommandValidator::default().with_search_path(fx.bin.path());
    let pipeline = Pipeline::new(scanner, validator, Executor::new(runner.clone())).with_jobs(3);

    let report = fx.run(&pipeline).await;

    let sources: Vec<String> = report
        .entries
        .iter()
        .map(|e| e.command.source_path().strip_prefix(fx.project.path()).unwrap().display().to_string())
        .collect();
    assert_eq!(sources, vec!["a/Makefile", "b/Makefile", "c/Makefile"]);
    assert_eq!(runner.max_concurrency(), 3);
    assert_eq!(report.summary.succeeded, 3);
}

#[tokio::test]
async fn parallel_mode_never_shares_a_directory() {
    let fx = Fixture::new();
    std::fs::remove_file(fx.project.path().join("package.json")).unwrap();
    fx.file("Makefile", "one:\n\ttrue\ntwo:\n\ttrue\nthree:\n\ttrue\n");
    let runner = fx.runner.clone().with_delay(Duration::from_millis(20));
    let scanner = FileScanner::new(&[], &[], IgnoreSet::default()).unwrap();
    let validator = CommandValidator::default().with_search_path(fx.bin.path());
    let pipeline = Pipeline::new(scanner, validator, Executor::new(runner.clone())).with_jobs(4);

    let report = fx.run(&pipeline).await;

    assert_eq!(report.summary.attempted, 3);
    assert_eq!(runner.max_concurrency(), 1);
}

#[tokio::test]
async fn cancellation_stops_further_commands() {
    let fx = Fixture::new();
    let runner = fx.runner.clone().with_delay(Duration::from_secs(30));
    let scanner = FileScanner::new(&[], &[], IgnoreSet::default()).unwrap();
    let validator = CommandValidator::default().with_search_path(fx.bin.path());
    let pipeline = Pipeline::new(scanner, validator, Executor::new(runner.clone()));

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });
    let report = pipeline.run(fx.project.path(), &cancel).await.unwrap();

    assert!(report.interrupted);
    assert_eq!(runner.calls().len(), 1);
    assert_eq!(report.entries.len(), 1);
    let result = report.entries[0].outcome.result().unwrap();
    assert!(result.interrupted);
}

#[tokio::test]
async fn duplicates_across_scans_are_independent() {
    let fx = Fixture::new();
    let pipeline = fx.pipeline(IgnoreSet::default());
    let first = fx.run(&pipeline).await;
    let second = fx.run(&pipeline).await;
    assert_eq!(first.entries.len(), second.entries.len());
    assert_eq!(fx.runner.calls().len(), 6);
}

#[tokio::test]
async fn file_claimed_by_two_formats_reports_each_command_once() {
    let fx = Fixture::new();
    let registry =
        ParserRegistry::with_formats([Format::Makefile, Format::PackageJson, Format::Makefile]);
    let scanner = FileScanner::new(&[], &[], IgnoreSet::default()).unwrap().with_registry(registry);
    let validator = CommandValidator::default().with_search_path(fx.bin.path());
    let pipeline = Pipeline::new(scanner, validator, Executor::new(fx.runner.clone()));
    let report = fx.run(&pipeline).await;

    assert_eq!(texts(&report), vec!["make install", "npm run test", "npm run build"]);
    assert_eq!(fx.runner.ran(), vec!["make install", "npm run test", "npm run build"]);
    assert_eq!(report.summary.total, 3);
}
