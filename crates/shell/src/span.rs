// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for the shell lexer.

use serde::{Deserialize, Serialize};

/// A byte-offset range in the command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn at(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text, or `""` when out of bounds.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Locate a span in source, returning (line_number, column, line_content).
///
/// Line numbers are 1-indexed; column is 0-indexed from line start.
pub fn locate(source: &str, span: Span) -> (usize, usize, &str) {
    let offset = span.start.min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_num = before.matches('\n').count() + 1;
    let line_end = source[line_start..].find('\n').map(|i| line_start + i).unwrap_or(source.len());
    let col = before[line_start..].chars().count();
    (line_num, col, &source[line_start..line_end])
}

/// Render a one-error diagnostic with a caret under the offending text:
///
/// ```text
/// error: unterminated double quote
///   --> line 1, column 6
///    |
///  1 | echo "hi
///    |      ^^^
/// ```
pub fn diagnostic(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line) = locate(source, span);
    let width = span.len().clamp(1, line.len().saturating_sub(col).max(1));
    format!(
        "error: {message}\n  --> line {line_num}, column {}\n   |\n{line_num:>3} | {line}\n   | {}{}",
        col + 1,
        " ".repeat(col),
        "^".repeat(width)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
