// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted exclusions for known-failing or intentionally skipped commands.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How an ignore entry matches a command's raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum IgnoreRule {
    /// Exact command text (after trimming surrounding whitespace).
    Exact(String),
    /// Glob-style signature (`*`, `?`, `[...]`), e.g. `docker compose * up -d *`.
    Pattern(String),
}

/// One exclusion plus the reason it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreEntry {
    pub rule: IgnoreRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl IgnoreEntry {
    pub fn exact(command: impl Into<String>) -> Self {
        Self { rule: IgnoreRule::Exact(command.into().trim().to_string()), reason: None }
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self { rule: IgnoreRule::Pattern(pattern.into()), reason: None }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        self.reason = if reason.trim().is_empty() { None } else { Some(reason) };
        self
    }

    /// The signature as written to the ignore file.
    pub fn signature(&self) -> &str {
        match &self.rule {
            IgnoreRule::Exact(text) | IgnoreRule::Pattern(text) => text,
        }
    }
}

/// Lookup structure over a list of ignore entries.
///
/// Read-only once built; a scan receives one set and shares it with every
/// worker.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    entries: Vec<IgnoreEntry>,
    exact: HashMap<String, usize>,
    patterns: Vec<(glob::Pattern, usize)>,
}

impl IgnoreSet {
    pub fn new(entries: impl IntoIterator<Item = IgnoreEntry>) -> Self {
        let mut set = Self::default();
        for entry in entries {
            set.insert(entry);
        }
        set
    }

    fn insert(&mut self, entry: IgnoreEntry) {
        let idx = self.entries.len();
        match &entry.rule {
            IgnoreRule::Exact(text) => {
                self.exact.entry(text.trim().to_string()).or_insert(idx);
            }
            IgnoreRule::Pattern(pattern) => match glob::Pattern::new(pattern) {
                Ok(compiled) => self.patterns.push((compiled, idx)),
                // An unparsable pattern still matches its literal text
                Err(_) => {
                    self.exact.entry(pattern.trim().to_string()).or_insert(idx);
                }
            },
        }
        self.entries.push(entry);
    }

    /// Return the first entry matching `raw_text`, exact entries first.
    pub fn find(&self, raw_text: &str) -> Option<&IgnoreEntry> {
        let text = raw_text.trim();
        if let Some(&idx) = self.exact.get(text) {
            return self.entries.get(idx);
        }
        self.patterns
            .iter()
            .find(|(pattern, _)| pattern.matches(text))
            .and_then(|(_, idx)| self.entries.get(*idx))
    }

    pub fn contains(&self, raw_text: &str) -> bool {
        self.find(raw_text).is_some()
    }

    pub fn entries(&self) -> &[IgnoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
