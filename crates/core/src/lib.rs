// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! doscan-core: data model shared by the detection and execution engine

pub mod macros;

pub mod command;
pub mod ignore;
pub mod outcome;
pub mod report;
pub mod time_fmt;
pub mod verdict;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(any(test, feature = "test-support"))]
pub use command::CommandBuilder;
pub use command::{meta, Command, CommandError, CommandType};
pub use ignore::{IgnoreEntry, IgnoreRule, IgnoreSet};
pub use outcome::{
    ExecutionResult, Outcome, EXIT_CRASHED, EXIT_INTERRUPTED, EXIT_TIMED_OUT,
};
pub use report::{Remediation, ReportEntry, ScanReport, ScanWarning, Summary};
pub use time_fmt::{format_duration, round_secs};
pub use verdict::{Severity, ValidationVerdict};
