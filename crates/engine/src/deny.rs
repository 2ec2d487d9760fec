// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table-driven deny-list of destructive command patterns.
//!
//! Heuristic, not a security boundary: the patterns catch the common
//! spellings of commands that must never run during a scan.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DenyListError {
    #[error("deny rule '{id}' has an invalid pattern: {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },
}

/// A user-supplied rule as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DenyRuleSpec {
    pub id: String,
    pub pattern: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct DenyRule {
    id: String,
    pattern: Regex,
    reason: String,
}

impl DenyRule {
    pub fn new(
        id: impl Into<String>,
        pattern: &str,
        reason: impl Into<String>,
    ) -> Result<Self, DenyListError> {
        let id = id.into();
        let pattern =
            Regex::new(pattern).map_err(|source| DenyListError::InvalidPattern { id: id.clone(), source })?;
        Ok(Self { id, pattern, reason: reason.into() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// `(id, pattern, reason)` for the built-in rules.
const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    (
        "rm-rf-root",
        concat!(
            r"\brm\s+(?:-\S+\s+)*",
            r"(?:-[A-Za-z]*[rR][A-Za-z]*f[A-Za-z]*|-[A-Za-z]*f[A-Za-z]*[rR][A-Za-z]*|--recursive\s+--force|--force\s+--recursive|-[rR]\s+-f|-f\s+-[rR])",
            r"\s+(?:-\S+\s+)*",
            r#"["']?(?:/\*?|~/?|\*|\.\*?|\./\*?|\$HOME/?|\$\{HOME\}/?)["']?"#,
            r"(?:\s|;|&|\||\)|$)"
        ),
        "recursive force delete of the filesystem root, home directory, or working tree",
    ),
    ("mkfs", r"\bmkfs(?:\.[A-Za-z0-9]+)?\b", "formats a filesystem"),
    ("dd-device", r"\bdd\b.*\bof=/dev/", "writes raw data to a device"),
    (
        "disk-partition",
        r"\b(?:fdisk|sfdisk|parted|wipefs)\b.*\s/dev/",
        "repartitions or wipes a disk",
    ),
    ("fork-bomb", r":\s*\(\s*\)\s*\{\s*:\s*\|\s*:\s*&\s*\}\s*;\s*:", "fork bomb"),
    (
        "chmod-777-root",
        concat!(r"\bchmod\s+(?:\S+\s+)*-[A-Za-z]*R[A-Za-z]*\s+(?:\S+\s+)*0?777\s+/", r"(?:\s|;|&|\||\)|$)"),
        "recursively opens permissions on the filesystem root",
    ),
    (
        "chown-root",
        concat!(r"\bchown\s+(?:\S+\s+)*-[A-Za-z]*R[A-Za-z]*\s+(?:\S+\s+)*/", r"(?:\s|;|&|\||\)|$)"),
        "recursively changes ownership of the filesystem root",
    ),
    ("git-reset-hard", r"\bgit\s+(?:\S+\s+)*?reset\s+(?:\S+\s+)*?--hard\b", "discards uncommitted work"),
    (
        "git-clean-force",
        r"\bgit\s+clean\s+(?:\S+\s+)*?-[A-Za-z]*f",
        "deletes untracked files",
    ),
    (
        "git-push-force",
        r"\bgit\s+push\s+(?:\S+\s+)*?(?:--force(?:-with-lease)?\b|-f\b)",
        "rewrites remote history",
    ),
    (
        "docker-prune-all",
        r"\bdocker\s+system\s+prune\s+(?:\S+\s+)*?(?:-[A-Za-z]*a[A-Za-z]*\b|--all\b)",
        "removes every unused image, container and network",
    ),
    (
        "power",
        r"(?m)(?:^|[;&|(]\s*|\b(?:sudo|exec)\s+)(?:shutdown|reboot|halt|poweroff)\b",
        "shuts down or restarts the machine",
    ),
    ("kubectl-delete", r"\bkubectl\s+(?:\S+\s+)*?delete\b", "deletes cluster resources"),
    ("terraform-destroy", r"\bterraform\s+(?:\S+\s+)*?destroy\b", "destroys managed infrastructure"),
    ("sql-drop", r"(?i)\bdrop\s+(?:database|schema|table)\b", "drops a database object"),
    (
        "raw-device-write",
        r">\s*/dev/(?:sd[a-z]|hd[a-z]|vd[a-z]|nvme\d|mmcblk\d|disk\d)",
        "overwrites a block device",
    ),
    (
        "pipe-to-shell",
        r"\b(?:curl|wget)\b[^|]*\|\s*(?:sudo\s+)?(?:ba|z|da|k)?sh\b",
        "executes a downloaded script",
    ),
];

#[allow(clippy::expect_used)]
static BUILTIN: LazyLock<Vec<DenyRule>> = LazyLock::new(|| {
    BUILTIN_RULES
        .iter()
        .map(|(id, pattern, reason)| {
            DenyRule::new(*id, pattern, *reason).expect("constant regex pattern is valid")
        })
        .collect()
});

/// Ordered deny rules; the first match wins.
#[derive(Debug, Clone)]
pub struct DenyList {
    rules: Vec<DenyRule>,
}

impl Default for DenyList {
    /// The built-in rules.
    fn default() -> Self {
        Self { rules: BUILTIN.clone() }
    }
}

impl DenyList {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append user rules after the current ones.
    pub fn extend(mut self, specs: &[DenyRuleSpec]) -> Result<Self, DenyListError> {
        for spec in specs {
            self.rules.push(DenyRule::new(&spec.id, &spec.pattern, &spec.reason)?);
        }
        Ok(self)
    }

    pub fn find(&self, text: &str) -> Option<&DenyRule> {
        self.rules.iter().find(|rule| rule.matches(text))
    }

    pub fn rules(&self) -> &[DenyRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "deny_tests.rs"]
mod tests;
