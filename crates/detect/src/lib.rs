// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! doscan-detect: turns project files into commands.
//!
//! [`FileScanner`] walks a tree and hands each file to the
//! [`ParserRegistry`], which runs every [`Format`] that claims it.

mod env_refs;
mod error;
mod format;
mod parsers;
mod registry;
mod scanner;
mod source;

#[cfg(test)]
mod testutil;

pub use env_refs::referenced_env;
pub use error::{ParseError, ScanError};
pub use format::Format;
pub use registry::{ParsedFile, ParserRegistry};
pub use scanner::{FileScanner, Scan, DEFAULT_EXCLUDES, MAX_FILE_SIZE};
pub use source::Source;
