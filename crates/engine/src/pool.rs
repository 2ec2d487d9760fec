// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded parallel execution.
//!
//! Commands are grouped greedily in encounter order. A batch never holds
//! two commands with the same working directory, never exceeds `jobs`
//! entries, and a command with global side effects always runs alone.

use crate::executor::Executor;
use crate::runner::Runner;
use doscan_core::{Command, ExecutionResult};
use std::collections::HashSet;
use std::path::Path;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    jobs: usize,
}

impl WorkerPool {
    /// `jobs` below 1 is treated as 1.
    pub fn new(jobs: usize) -> Self {
        Self { jobs: jobs.max(1) }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Partition `commands` into batches of indices.
    pub fn batches(&self, commands: &[&Command]) -> Vec<Vec<usize>> {
        let mut batches = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        let mut dirs: HashSet<&Path> = HashSet::new();

        for (i, command) in commands.iter().enumerate() {
            if command.has_global_side_effects() {
                if !current.is_empty() {
                    batches.push(std::mem::take(&mut current));
                    dirs.clear();
                }
                batches.push(vec![i]);
                continue;
            }
            let dir = command.working_directory();
            if current.len() >= self.jobs || dirs.contains(dir) {
                batches.push(std::mem::take(&mut current));
                dirs.clear();
            }
            dirs.insert(dir);
            current.push(i);
        }
        if !current.is_empty() {
            batches.push(current);
        }
        batches
    }

    /// Run one batch concurrently; results come back in batch order.
    pub async fn run_batch<R: Runner>(
        &self,
        executor: &Executor<R>,
        batch: &[&Command],
        cancel: &CancellationToken,
    ) -> Vec<ExecutionResult> {
        tracing::debug!(size = batch.len(), "running batch");
        futures_util::future::join_all(batch.iter().map(|command| executor.execute(command, cancel))).await
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
