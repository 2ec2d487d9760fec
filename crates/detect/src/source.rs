// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A file handed to the parsers.

use crate::error::ParseError;
use std::cell::OnceCell;
use std::path::Path;

/// File path and content, with the YAML document parsed lazily once and
/// shared by every format that inspects it.
pub struct Source<'a> {
    path: &'a Path,
    content: &'a str,
    yaml: OnceCell<Result<serde_yaml::Value, String>>,
}

impl<'a> Source<'a> {
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        Self { path, content, yaml: OnceCell::new() }
    }

    pub fn path(&self) -> &'a Path {
        self.path
    }

    pub fn content(&self) -> &'a str {
        self.content
    }

    pub fn file_name(&self) -> &'a str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or("")
    }

    pub fn extension(&self) -> &'a str {
        self.path.extension().and_then(|e| e.to_str()).unwrap_or("")
    }

    /// Directory holding the file.
    pub fn dir(&self) -> &'a Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    pub fn is_yaml(&self) -> bool {
        matches!(self.extension(), "yml" | "yaml")
    }

    /// Parsed YAML document.
    pub fn yaml(&self) -> Result<&serde_yaml::Value, ParseError> {
        self.yaml
            .get_or_init(|| serde_yaml::from_str(self.content).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| ParseError::Yaml(e.clone()))
    }
}
