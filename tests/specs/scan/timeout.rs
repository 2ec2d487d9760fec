//! Commands that run too long are killed and flagged.

use crate::prelude::*;
use std::time::{Duration, Instant};

#[test]
fn slow_command_times_out() {
    let temp = Project::empty();
    temp.file("Procfile", "slow: sleep 30\n");

    let started = Instant::now();
    let run = temp.doscan().args(&["scan", "--format", "json", "--timeout", "1"]).exits(1);
    assert!(started.elapsed() < Duration::from_secs(20));

    let json = run.stdout_json();
    assert_eq!(json["failed_commands"][0]["timed_out"], true);
    assert_eq!(json["summary"]["timed_out"], 1);
}

#[test]
fn timeout_can_come_from_environment() {
    let temp = Project::empty();
    temp.file("Procfile", "slow: sleep 30\n");

    let run = temp.doscan().env("DOSCAN_TIMEOUT_SECS", "1").args(&["scan", "--format", "json"]).exits(1);
    assert_eq!(run.stdout_json()["failed_commands"][0]["timed_out"], true);
}
