// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One scan from project root to report.
//!
//! Commands are scanned, deduplicated and validated on the calling task in
//! walk order. Executable commands then run one at a time, or in batches
//! from the [`WorkerPool`] when more than one job is allowed. Entries keep
//! encounter order regardless of how they ran.

use crate::aggregator::ResultAggregator;
use crate::executor::Executor;
use crate::pool::WorkerPool;
use crate::runner::Runner;
use crate::validator::{CommandValidator, ScanContext};
use doscan_core::{Command, Outcome, ScanReport};
use doscan_detect::{FileScanner, ScanError};
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// A command and what happened to it; `None` while awaiting execution.
type Planned = (Command, Option<Outcome>);

pub struct Pipeline<R> {
    scanner: FileScanner,
    validator: CommandValidator,
    executor: Executor<R>,
    jobs: usize,
    dry_run: bool,
}

impl<R: Runner> Pipeline<R> {
    pub fn new(scanner: FileScanner, validator: CommandValidator, executor: Executor<R>) -> Self {
        Self { scanner, validator, executor, jobs: 1, dry_run: false }
    }

    /// Allow up to `jobs` commands at once (values below 1 mean 1).
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Detect and validate only; nothing is executed.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn executor(&self) -> &Executor<R> {
        &self.executor
    }

    /// Scan `root` and build the report. Only an unusable root (or a bad
    /// scanner configuration) fails; every per-command problem is recorded
    /// in the report instead.
    pub async fn run(&self, root: &Path, cancel: &CancellationToken) -> Result<ScanReport, ScanError> {
        tracing::info!(root = %root.display(), dry_run = self.dry_run, jobs = self.jobs, "scanning project");
        let ctx = ScanContext::new(self.scanner.ignore().clone());
        let mut aggregator = ResultAggregator::new();
        let mut planned: Vec<Planned> = Vec::new();

        let mut scan = self.scanner.scan(root)?;
        let mut seen_suppressed = 0;
        loop {
            if cancel.is_cancelled() {
                break;
            }
            let next = scan.next();
            let done = next.is_none();
            // Ignored commands surface next to the file that declared them.
            let fresh: Vec<Command> = scan.suppressed()[seen_suppressed..].to_vec();
            seen_suppressed += fresh.len();
            for command in fresh.into_iter().chain(next) {
                if let Some(plan) = self.plan(&ctx, &mut aggregator, command) {
                    planned.push(plan);
                }
            }
            if done {
                break;
            }
        }
        let (warnings, _) = scan.into_parts();
        aggregator.warn(warnings);

        if !self.dry_run {
            self.execute(&mut planned, cancel).await;
        }

        let interrupted = cancel.is_cancelled();
        for (command, outcome) in planned {
            // Commands that never started because of cancellation are dropped.
            if let Some(outcome) = outcome {
                aggregator.record(command, outcome);
            }
        }
        let generated_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        let mut report = aggregator.into_report(root, generated_at);
        report.dry_run = self.dry_run;
        report.interrupted = interrupted;

        let s = &report.summary;
        tracing::info!(
            total = s.total,
            attempted = s.attempted,
            failed = s.failed,
            unsafe_count = s.unsafe_count,
            interrupted,
            "scan finished"
        );
        Ok(report)
    }

    fn plan(&self, ctx: &ScanContext, aggregator: &mut ResultAggregator, command: Command) -> Option<Planned> {
        if !aggregator.admit(&command) {
            return None;
        }
        let verdict = self.validator.validate(ctx, &command);
        if !verdict.valid {
            if verdict.is_unsafe() {
                tracing::warn!(
                    cmd = command.raw_text(),
                    rule = verdict.rule.as_deref().unwrap_or(""),
                    "unsafe command will not run"
                );
            }
            return Some((command, Some(Outcome::Skipped(verdict))));
        }
        if self.dry_run {
            return Some((command, Some(Outcome::NotRun)));
        }
        Some((command, None))
    }

    async fn execute(&self, planned: &mut [Planned], cancel: &CancellationToken) {
        let pending: Vec<usize> =
            planned.iter().enumerate().filter(|(_, (_, outcome))| outcome.is_none()).map(|(i, _)| i).collect();

        if self.jobs <= 1 {
            for i in pending {
                if cancel.is_cancelled() {
                    break;
                }
                let result = self.executor.execute(&planned[i].0, cancel).await;
                planned[i].1 = Some(Outcome::Executed(result));
            }
            return;
        }

        let pool = WorkerPool::new(self.jobs);
        let commands: Vec<&Command> = pending.iter().map(|&i| &planned[i].0).collect();
        let batches = pool.batches(&commands);
        let mut results = Vec::with_capacity(pending.len());
        for batch in batches {
            if cancel.is_cancelled() {
                break;
            }
            let members: Vec<&Command> = batch.iter().map(|&b| commands[b]).collect();
            let outcomes = pool.run_batch(&self.executor, &members, cancel).await;
            results.extend(batch.into_iter().zip(outcomes));
        }
        for (b, result) in results {
            planned[pending[b]].1 = Some(Outcome::Executed(result));
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
