// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! doscan-engine: validation, execution and reporting of detected commands

mod aggregator;
pub mod config;
mod deny;
pub mod env;
mod executor;
mod ignore_file;
mod pipeline;
mod pool;
mod process;
mod remediation;
pub mod report;
mod runner;
mod validator;

#[cfg(test)]
mod testutil;

pub use aggregator::ResultAggregator;
pub use config::{CliOverrides, ConfigError, ProjectConfig, Settings, CONFIG_FILE_NAME};
pub use deny::{DenyList, DenyListError, DenyRule, DenyRuleSpec};
pub use executor::{Executor, DEFAULT_TIMEOUT};
pub use ignore_file::{failure_entries, IgnoreFile, IgnoreFileError, IGNORE_FILE_NAME};
pub use pipeline::Pipeline;
pub use pool::WorkerPool;
pub use process::{ProcessRunner, OUTPUT_LIMIT, TRUNCATED_MARKER};
pub use remediation::suggest as suggest_remediation;
pub use report::{write_report, ReportError, ReportFormat, ReportGenerator};
pub use runner::{RunSpec, Runner};
#[cfg(any(test, feature = "test-support"))]
pub use runner::{FakeRunner, RunCall};
pub use validator::{CommandValidator, ScanContext};
