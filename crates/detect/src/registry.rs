// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch of files to the formats that claim them.

use crate::env_refs;
use crate::format::Format;
use crate::source::Source;
use doscan_core::{Command, ScanWarning};
use std::path::Path;

/// Commands and warnings produced for one file.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub commands: Vec<Command>,
    pub warnings: Vec<ScanWarning>,
}

/// Maps files to the parsers that recognise them.
///
/// Every claiming format contributes; duplicates across formats are left
/// for the aggregator to suppress.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    formats: Vec<Format>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self { formats: Format::ALL.to_vec() }
    }
}

impl ParserRegistry {
    /// Registry restricted to `formats`, tried in the given order.
    pub fn with_formats(formats: impl IntoIterator<Item = Format>) -> Self {
        Self { formats: formats.into_iter().collect() }
    }

    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    /// True if any format might claim `path`, judged by name alone.
    pub fn wants(&self, path: &Path) -> bool {
        let src = Source::new(path, "");
        self.formats.iter().any(|f| f.matches_name(&src))
    }

    /// Run every claiming parser over `content`.
    pub fn parse(&self, path: &Path, content: &str) -> ParsedFile {
        let src = Source::new(path, content);
        let mut parsed = ParsedFile::default();

        for format in self.formats.iter().copied() {
            if !format.matches_name(&src) || !format.claims(&src) {
                continue;
            }
            match format.parse(&src) {
                Ok(commands) => {
                    tracing::debug!(
                        path = %path.display(),
                        %format,
                        count = commands.len(),
                        "parsed file"
                    );
                    parsed.commands.extend(commands.into_iter().map(env_refs::annotate));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %format, error = %e, "skipping unparsable file");
                    parsed.warnings.push(ScanWarning {
                        path: path.to_path_buf(),
                        message: format!("{format}: {e}"),
                    });
                }
            }
        }
        parsed
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
