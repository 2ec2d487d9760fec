// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types for the shell lexer.

use std::fmt;

pub use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// One piece of a word. Adjacent pieces without whitespace between them
/// (`foo"bar"$x`) form a single [`Word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPart {
    Literal(String),
    /// Single-quoted: literal content, no expansion.
    SingleQuoted(String),
    /// Double-quoted: raw content between the quotes.
    DoubleQuoted { content: String, expands: bool },
    /// `$NAME` or `${NAME...}`.
    Variable(String),
    /// `$(cmd)`, `` `cmd` `` or `$((expr))`.
    Substitution(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    pub parts: Vec<WordPart>,
}

impl Word {
    /// Text of the word when it contains no expansions.
    pub fn literal(&self) -> Option<String> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                WordPart::Literal(s) | WordPart::SingleQuoted(s) => out.push_str(s),
                WordPart::DoubleQuoted { content, expands: false } => out.push_str(content),
                _ => return None,
            }
        }
        Some(out)
    }

    /// True if the word is unquoted literal text equal to `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self.parts.as_slice(), [WordPart::Literal(s)] if s == keyword)
    }

    /// `NAME=value` prefix assignment (unquoted identifier before `=`).
    pub fn assignment_name(&self) -> Option<&str> {
        let Some(WordPart::Literal(first)) = self.parts.first() else {
            return None;
        };
        let (name, _) = first.split_once('=')?;
        let mut chars = name.chars();
        let starts_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        (starts_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')).then_some(name)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self { parts: vec![WordPart::Literal(text.to_string())] }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Word(Word),
    /// `&&`
    And,
    /// `||`
    Or,
    /// `|` or `|&`
    Pipe,
    /// `;`
    Semi,
    /// `;;` (case arm terminator)
    DoubleSemi,
    /// `&`
    Ampersand,
    Newline,
    LParen,
    RParen,
    /// `{` in command position
    LBrace,
    /// `}` in command position
    RBrace,
    /// `>`, `>>`, `<`, `<>`, `>&`, `&>`, `>|`, with optional fd prefix.
    Redirect { op: &'static str },
    /// `<<` / `<<-` with the captured body.
    HereDoc { delimiter: String, body: String },
    /// `<<<`
    HereString,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => match w.literal() {
                Some(text) => write!(f, "{text}"),
                None => f.write_str("word"),
            },
            Self::And => f.write_str("&&"),
            Self::Or => f.write_str("||"),
            Self::Pipe => f.write_str("|"),
            Self::Semi => f.write_str(";"),
            Self::DoubleSemi => f.write_str(";;"),
            Self::Ampersand => f.write_str("&"),
            Self::Newline => f.write_str("newline"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
            Self::Redirect { op } => f.write_str(op),
            Self::HereDoc { .. } => f.write_str("<<"),
            Self::HereString => f.write_str("<<<"),
        }
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
