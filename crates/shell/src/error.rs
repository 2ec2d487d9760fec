// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the shell lexer and syntax checker.

use crate::span::{diagnostic, Span};
use thiserror::Error;

/// Errors that can occur while tokenizing a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote { span: Span },

    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote { span: Span },

    /// `$(`, `$((` or a backtick without its closing delimiter.
    #[error("unterminated command substitution at position {}", span.start)]
    UnterminatedSubstitution { span: Span },

    /// `${` without the closing brace.
    #[error("unterminated variable at position {}", span.start)]
    UnterminatedVariable { span: Span },

    #[error("unterminated here-document at position {}, expected '{delimiter}' delimiter", span.start)]
    UnterminatedHereDoc { delimiter: String, span: Span },

    #[error("missing here-document delimiter at position {}", span.start)]
    MissingHereDocDelimiter { span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedSingleQuote { span }
            | Self::UnterminatedDoubleQuote { span }
            | Self::UnterminatedSubstitution { span }
            | Self::UnterminatedVariable { span }
            | Self::UnterminatedHereDoc { span, .. }
            | Self::MissingHereDocDelimiter { span } => *span,
        }
    }
}

/// Structural problems in an otherwise tokenizable command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("empty command")]
    EmptyCommand,

    #[error("missing command before `{operator}`")]
    MissingCommandBefore { operator: String, span: Span },

    #[error("missing command after `{operator}`")]
    MissingCommandAfter { operator: String, span: Span },

    #[error("unexpected `{token}`")]
    UnexpectedToken { token: String, span: Span },

    #[error("unmatched `{delimiter}`")]
    Unbalanced { delimiter: String, span: Span },

    #[error("empty subshell")]
    EmptySubshell { span: Span },

    #[error("empty brace group")]
    EmptyBraceGroup { span: Span },

    #[error("redirection `{operator}` has no target")]
    MissingRedirectTarget { operator: String, span: Span },

    #[error("`{keyword}` is never closed (expected `{expected}`)")]
    UnclosedKeyword { keyword: String, expected: &'static str, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            Self::Lexer(e) => e.span(),
            Self::EmptyCommand => Span::default(),
            Self::MissingCommandBefore { span, .. }
            | Self::MissingCommandAfter { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::Unbalanced { span, .. }
            | Self::EmptySubshell { span }
            | Self::EmptyBraceGroup { span }
            | Self::MissingRedirectTarget { span, .. }
            | Self::UnclosedKeyword { span, .. } => *span,
        }
    }

    /// Rich diagnostic with line/column info and a caret.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic(input, self.span(), &self.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
