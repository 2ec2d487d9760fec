// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation verdicts.

use serde::{Deserialize, Serialize};

/// Why a command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Matches a destructive pattern; never executed.
    Unsafe,
    /// Cannot run here (malformed, executable missing); skipped without alarm.
    Unusable,
    /// Suppressed by an ignore entry.
    Ignored,
}

crate::simple_display! {
    Severity {
        Unsafe => "unsafe",
        Unusable => "unusable",
        Ignored => "ignored",
    }
}

/// Outcome of validating a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Identifier of the deny rule that matched (unsafe verdicts only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl ValidationVerdict {
    pub fn valid() -> Self {
        Self { valid: true, reason: String::new(), severity: None, rule: None }
    }

    pub fn unsafe_match(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
            severity: Some(Severity::Unsafe),
            rule: Some(rule.into()),
        }
    }

    pub fn unusable(reason: impl Into<String>) -> Self {
        Self { valid: false, reason: reason.into(), severity: Some(Severity::Unusable), rule: None }
    }

    /// Ignored commands carry the literal reason `ignored`; the ignore
    /// entry's own note is appended when present.
    pub fn ignored(note: Option<&str>) -> Self {
        let reason = match note {
            Some(note) if !note.is_empty() => format!("ignored: {note}"),
            _ => "ignored".to_string(),
        };
        Self { valid: false, reason, severity: Some(Severity::Ignored), rule: None }
    }

    pub fn is_unsafe(&self) -> bool {
        self.severity == Some(Severity::Unsafe)
    }
}
