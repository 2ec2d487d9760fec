// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` for outcomes that are not failures of doscan
//! itself (a scanned command failed, an unsafe command was found under
//! `--strict`), so `main()` alone decides how the process ends.

use std::fmt;

/// At least one attempted command failed, or `--strict` found an unsafe one.
pub const EXIT_FAILURES: i32 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn failures(message: impl Into<String>) -> Self {
        Self::new(EXIT_FAILURES, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}
