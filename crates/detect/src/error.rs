// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while detecting commands.

use std::path::PathBuf;
use thiserror::Error;

/// A parser could not interpret a file it claimed.
///
/// Never fatal: the scanner turns it into a warning and moves on.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML is parsed once per file and shared between claimants, so the
    /// error is kept as text.
    #[error("invalid YAML: {0}")]
    Yaml(String),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid HCL: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("unexpected structure: {0}")]
    Shape(String),
}

impl ParseError {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }
}

/// Errors that stop a scan before it starts.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("project root {} is not a directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
