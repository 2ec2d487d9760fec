// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::runner::FakeRunner;
use doscan_core::{CommandType, test_support::strategies::arb_word};
use proptest::prelude::*;
use std::time::Duration;

fn at(dir: &str, text: &str, ty: CommandType) -> Command {
    Command::new(text, ty, format!("/p/{dir}/Makefile"), "t").unwrap()
}

#[test]
fn distinct_directories_share_a_batch() {
    let cmds = [
        at("a", "make a", CommandType::MakeTarget),
        at("b", "make b", CommandType::MakeTarget),
        at("c", "make c", CommandType::MakeTarget),
    ];
    let refs: Vec<&Command> = cmds.iter().collect();
    assert_eq!(WorkerPool::new(4).batches(&refs), vec![vec![0, 1, 2]]);
}

#[test]
fn same_directory_splits_batches() {
    let cmds = [
        at("a", "make one", CommandType::MakeTarget),
        at("b", "make two", CommandType::MakeTarget),
        at("a", "make three", CommandType::MakeTarget),
    ];
    let refs: Vec<&Command> = cmds.iter().collect();
    assert_eq!(WorkerPool::new(4).batches(&refs), vec![vec![0, 1], vec![2]]);
}

#[test]
fn batch_size_is_bounded() {
    let cmds: Vec<Command> =
        (0..5).map(|i| at(&format!("d{i}"), "make", CommandType::MakeTarget)).collect();
    let refs: Vec<&Command> = cmds.iter().collect();
    assert_eq!(WorkerPool::new(2).batches(&refs), vec![vec![0, 1], vec![2, 3], vec![4]]);
}

#[test]
fn global_side_effects_run_alone() {
    let cmds = [
        at("a", "make a", CommandType::MakeTarget),
        at("b", "npm install", CommandType::NpmScript),
        at("c", "make c", CommandType::MakeTarget),
        at("d", "pip install -r requirements.txt", CommandType::PipRequirements),
    ];
    let refs: Vec<&Command> = cmds.iter().collect();
    assert_eq!(WorkerPool::new(4).batches(&refs), vec![vec![0], vec![1], vec![2], vec![3]]);
}

#[test]
fn zero_jobs_means_one() {
    assert_eq!(WorkerPool::new(0).jobs(), 1);
}

proptest! {
    #[test]
    fn batches_respect_invariants(
        specs in proptest::collection::vec((0usize..4, arb_word(), any::<bool>()), 0..24),
        jobs in 1usize..5,
    ) {
        let cmds: Vec<Command> = specs
            .iter()
            .map(|(dir, word, global)| {
                let ty = if *global { CommandType::PipRequirements } else { CommandType::MakeTarget };
                at(&format!("d{dir}"), &format!("make {word}"), ty)
            })
            .collect();
        let refs: Vec<&Command> = cmds.iter().collect();
        let batches = WorkerPool::new(jobs).batches(&refs);

        let flat: Vec<usize> = batches.iter().flatten().copied().collect();
        prop_assert_eq!(flat, (0..cmds.len()).collect::<Vec<_>>());
        for batch in &batches {
            prop_assert!(!batch.is_empty() && batch.len() <= jobs);
            let mut dirs = HashSet::new();
            for &i in batch {
                prop_assert!(dirs.insert(cmds[i].working_directory()));
                if cmds[i].has_global_side_effects() {
                    prop_assert_eq!(batch.len(), 1);
                }
            }
        }
    }
}

#[tokio::test]
async fn batch_runs_concurrently_in_order() {
    let runner = FakeRunner::new().with_delay(Duration::from_millis(50)).exit("make b", 2, "");
    let executor = Executor::new(runner.clone());
    let cmds = [
        at("a", "make a", CommandType::MakeTarget),
        at("b", "make b", CommandType::MakeTarget),
        at("c", "make c", CommandType::MakeTarget),
    ];
    let refs: Vec<&Command> = cmds.iter().collect();

    let results = WorkerPool::new(3).run_batch(&executor, &refs, &CancellationToken::new()).await;

    let codes: Vec<i32> = results.iter().map(|r| r.exit_code).collect();
    assert_eq!(codes, vec![0, 2, 0]);
    assert_eq!(runner.max_concurrency(), 3);
}
