// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture projects for parser and scanner tests.

use crate::source::Source;
use doscan_core::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) struct Project {
    dir: TempDir,
}

impl Project {
    pub(crate) fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `rel`, creating parent directories.
    pub(crate) fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run `f` over the file at `rel`.
    pub(crate) fn with_source<R>(&self, rel: &str, f: impl FnOnce(&Source<'_>) -> R) -> R {
        let path = self.dir.path().join(rel);
        let content = std::fs::read_to_string(&path).unwrap();
        f(&Source::new(&path, &content))
    }
}

pub(crate) fn raws(commands: &[Command]) -> Vec<&str> {
    commands.iter().map(Command::raw_text).collect()
}
