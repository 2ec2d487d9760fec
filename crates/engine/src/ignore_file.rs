// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The line-oriented `.doignore` file.
//!
//! Blank lines and `#` comments are skipped; every other line is an exact
//! command signature. A comment directly above a command is its reason.

use doscan_core::{IgnoreEntry, ScanReport};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default file name, resolved against the project root.
pub const IGNORE_FILE_NAME: &str = ".doignore";

const HEADER: &str = "\
# doscan ignore file
# One command per line. A comment directly above a command records why.
";

#[derive(Debug, Error)]
pub enum IgnoreFileError {
    #[error("failed to read ignore file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to update ignore file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct IgnoreFile;

impl IgnoreFile {
    /// Entries in `path`; a missing file is empty.
    pub fn load(path: &Path) -> Result<Vec<IgnoreEntry>, IgnoreFileError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let entries = Self::parse(&content);
                tracing::debug!(path = %path.display(), entries = entries.len(), "loaded ignore file");
                Ok(entries)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(IgnoreFileError::Read { path: path.to_path_buf(), source }),
        }
    }

    pub fn parse(content: &str) -> Vec<IgnoreEntry> {
        let mut entries = Vec::new();
        let mut reason: Option<&str> = None;
        for line in content.lines().map(str::trim_end) {
            if line.trim().is_empty() {
                reason = None;
            } else if let Some(comment) = line.trim_start().strip_prefix('#') {
                reason = Some(comment.trim());
            } else {
                let entry = IgnoreEntry::exact(line);
                entries.push(match reason.take() {
                    Some(reason) => entry.with_reason(reason),
                    None => entry,
                });
            }
        }
        entries
    }

    /// Append entries not already present, creating the file with a header
    /// when absent. Existing lines are never rewritten. Returns how many
    /// entries were written.
    ///
    /// Multi-line commands cannot be expressed in the line format and are
    /// skipped.
    pub fn append(path: &Path, entries: &[IgnoreEntry]) -> Result<usize, IgnoreFileError> {
        let existing = match std::fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => return Err(IgnoreFileError::Read { path: path.to_path_buf(), source }),
        };
        let mut present: HashSet<String> = existing
            .as_deref()
            .map(Self::parse)
            .unwrap_or_default()
            .iter()
            .map(|e| e.signature().to_string())
            .collect();

        let mut block = String::new();
        match existing.as_deref() {
            None => {
                block.push_str(HEADER);
                block.push('\n');
            }
            Some(content) => {
                if !content.is_empty() && !content.ends_with('\n') {
                    block.push('\n');
                }
                // Keep a trailing comment from attaching to our first entry.
                if content.lines().last().is_some_and(|l| l.trim_start().starts_with('#')) {
                    block.push('\n');
                }
            }
        }

        let mut written = 0;
        for entry in entries {
            let signature = entry.signature().trim();
            if signature.is_empty() || signature.contains('\n') {
                tracing::debug!(signature, "not representable in ignore file");
                continue;
            }
            if !present.insert(signature.to_string()) {
                continue;
            }
            if let Some(reason) = &entry.reason {
                block.push_str("# ");
                block.push_str(&reason.replace('\n', " "));
                block.push('\n');
            }
            block.push_str(signature);
            block.push('\n');
            written += 1;
        }
        if written == 0 {
            return Ok(0);
        }

        let io = |source| IgnoreFileError::Write { path: path.to_path_buf(), source };
        let mut file = std::fs::OpenOptions::new().create(true).append(true).open(path).map_err(io)?;
        file.write_all(block.as_bytes()).map_err(io)?;
        tracing::info!(path = %path.display(), written, "updated ignore file");
        Ok(written)
    }
}

/// One exact entry per failed execution in `report`, with the failure as
/// its reason. Interrupted commands are left out.
pub fn failure_entries(report: &ScanReport) -> Vec<IgnoreEntry> {
    report
        .failed()
        .filter_map(|entry| {
            let result = entry.outcome.result()?;
            if result.interrupted {
                return None;
            }
            let reason = if result.timed_out {
                "timed out".to_string()
            } else if result.crashed {
                "failed to start".to_string()
            } else {
                format!("exit code {}", result.exit_code)
            };
            Some(IgnoreEntry::exact(entry.command.raw_text()).with_reason(reason))
        })
        .collect()
}

#[cfg(test)]
#[path = "ignore_file_tests.rs"]
mod tests;
