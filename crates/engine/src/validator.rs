// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-flight validation of detected commands.
//!
//! Order: deny-list, ignore set, shell syntax, executable resolution. The
//! deny-list runs first so a destructive command is reported as unsafe even
//! when its binary is not installed.

use crate::deny::DenyList;
use doscan_core::{Command, IgnoreSet, ValidationVerdict};
use doscan_shell::{is_builtin, leading_program, Program};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    /// Set when the verdict depends on the working directory (relative
    /// executable paths such as `./build.sh`).
    dir: Option<PathBuf>,
}

/// State scoped to a single scan: the ignore set and the verdict cache.
///
/// Shared read-only with workers; the cache is written by the coordinating
/// task between batches.
#[derive(Debug, Default)]
pub struct ScanContext {
    ignore: IgnoreSet,
    cache: RwLock<HashMap<CacheKey, ValidationVerdict>>,
}

impl ScanContext {
    pub fn new(ignore: IgnoreSet) -> Self {
        Self { ignore, cache: RwLock::new(HashMap::new()) }
    }

    pub fn ignore(&self) -> &IgnoreSet {
        &self.ignore
    }

    /// Number of cached verdicts.
    pub fn cached(&self) -> usize {
        self.cache.read().len()
    }

    fn lookup(&self, command: &Command) -> Option<ValidationVerdict> {
        let cache = self.cache.read();
        let text = command.raw_text().to_string();
        let shared = CacheKey { text: text.clone(), dir: None };
        let scoped = CacheKey { text, dir: Some(command.working_directory().to_path_buf()) };
        cache.get(&shared).or_else(|| cache.get(&scoped)).cloned()
    }

    fn store(&self, key: CacheKey, verdict: ValidationVerdict) {
        self.cache.write().insert(key, verdict);
    }
}

/// Decides whether a command is safe and able to run.
#[derive(Debug, Clone)]
pub struct CommandValidator {
    deny: DenyList,
    search_path: Option<OsString>,
}

impl Default for CommandValidator {
    fn default() -> Self {
        Self::new(DenyList::default())
    }
}

impl CommandValidator {
    /// Validator resolving executables on the current `PATH`.
    pub fn new(deny: DenyList) -> Self {
        Self { deny, search_path: std::env::var_os("PATH") }
    }

    /// Resolve executables on `path` instead of the inherited `PATH`.
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn deny_list(&self) -> &DenyList {
        &self.deny
    }

    /// Validate `command`, consulting and filling the scan's cache.
    pub fn validate(&self, ctx: &ScanContext, command: &Command) -> ValidationVerdict {
        if let Some(verdict) = ctx.lookup(command) {
            return verdict;
        }
        let (verdict, dir_scoped) = self.evaluate(ctx, command);
        tracing::debug!(
            command = command.raw_text(),
            valid = verdict.valid,
            reason = %verdict.reason,
            "validated"
        );
        let dir = dir_scoped.then(|| command.working_directory().to_path_buf());
        ctx.store(CacheKey { text: command.raw_text().to_string(), dir }, verdict.clone());
        verdict
    }

    /// The verdict, and whether it depends on the working directory.
    fn evaluate(&self, ctx: &ScanContext, command: &Command) -> (ValidationVerdict, bool) {
        let text = command.raw_text();

        if let Some(rule) = self.deny.find(text) {
            return (ValidationVerdict::unsafe_match(rule.id(), rule.reason()), false);
        }
        if let Some(entry) = ctx.ignore.find(text) {
            return (ValidationVerdict::ignored(entry.reason.as_deref()), false);
        }
        let tokens = match doscan_shell::check(text) {
            Ok(tokens) => tokens,
            Err(e) => {
                let (line, column, _) = doscan_shell::locate(text, e.span());
                let reason = format!("invalid shell syntax: {e} (line {line}, column {})", column + 1);
                return (ValidationVerdict::unusable(reason), false);
            }
        };

        let Some(Program::Static(program)) = leading_program(&tokens) else {
            // Compound commands and expansions cannot be resolved statically.
            return (ValidationVerdict::valid(), false);
        };
        if is_builtin(&program) {
            return (ValidationVerdict::valid(), false);
        }
        let relative = program.contains('/') && !program.starts_with('/');
        let verdict = if self.resolve(&program, command.working_directory()) {
            ValidationVerdict::valid()
        } else {
            ValidationVerdict::unusable(format!("executable not found: {program}"))
        };
        (verdict, relative)
    }

    fn resolve(&self, program: &str, cwd: &Path) -> bool {
        if program.contains('/') {
            return cwd.join(program).is_file();
        }
        which::which_in(program, self.search_path.as_ref(), cwd).is_ok()
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
