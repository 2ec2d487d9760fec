// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quotes, variables, and command substitutions.
//!
//! Each function is entered with the opening character still unconsumed and
//! returns once its closing delimiter has been consumed. Nested constructs
//! recurse so that a `)` inside quotes does not close a `$(`.

use super::{Lexer, LexerError};
use crate::token::{Span, WordPart};

impl Lexer<'_> {
    pub(super) fn lex_single_quote(&mut self, start: usize) -> Result<WordPart, LexerError> {
        self.chars.next();
        let content_start = start + 1;
        while let Some((pos, ch)) = self.chars.next() {
            if ch == '\'' {
                return Ok(WordPart::SingleQuoted(self.input[content_start..pos].to_string()));
            }
        }
        Err(LexerError::UnterminatedSingleQuote { span: Span::new(start, self.input.len()) })
    }

    /// `$'...'` where backslash escapes the closing quote.
    fn lex_ansi_c_quote(&mut self, start: usize) -> Result<WordPart, LexerError> {
        self.chars.next();
        let content_start = start + 2;
        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                '\\' => {
                    self.chars.next();
                }
                '\'' => return Ok(WordPart::SingleQuoted(self.input[content_start..pos].to_string())),
                _ => {}
            }
        }
        Err(LexerError::UnterminatedSingleQuote { span: Span::new(start, self.input.len()) })
    }

    pub(super) fn lex_double_quote(&mut self, start: usize) -> Result<WordPart, LexerError> {
        self.chars.next();
        let content_start = start + 1;
        let mut expands = false;

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                '"' => {
                    self.chars.next();
                    let content = self.input[content_start..pos].to_string();
                    return Ok(WordPart::DoubleQuoted { content, expands });
                }
                '\\' => {
                    self.chars.next();
                    self.chars.next();
                }
                '$' if matches!(self.peek_second(), Some('"' | '\'')) => {
                    self.chars.next();
                }
                '$' => {
                    if !matches!(self.lex_dollar(pos)?, WordPart::Literal(_)) {
                        expands = true;
                    }
                }
                '`' => {
                    self.lex_backtick(pos)?;
                    expands = true;
                }
                _ => {
                    self.chars.next();
                }
            }
        }
        Err(LexerError::UnterminatedDoubleQuote { span: Span::new(start, self.input.len()) })
    }

    /// Anything introduced by `$`. A `$` that starts nothing is a literal.
    pub(super) fn lex_dollar(&mut self, start: usize) -> Result<WordPart, LexerError> {
        match self.peek_second() {
            Some('(') => {
                self.chars.next();
                self.chars.next();
                let end = self.scan_parens(start)?;
                Ok(WordPart::Substitution(self.input[start + 2..end].to_string()))
            }
            Some('{') => {
                self.chars.next();
                self.chars.next();
                let end = self.scan_braces(start)?;
                Ok(WordPart::Variable(self.input[start + 2..end].to_string()))
            }
            Some('\'') => {
                self.chars.next();
                self.lex_ansi_c_quote(start)
            }
            Some('"') => {
                self.chars.next();
                self.lex_double_quote(start + 1)
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                self.chars.next();
                let name_start = start + 1;
                let mut end = name_start;
                while let Some(&(pos, c)) = self.chars.peek() {
                    if !(c.is_ascii_alphanumeric() || c == '_') {
                        break;
                    }
                    end = pos + 1;
                    self.chars.next();
                }
                Ok(WordPart::Variable(self.input[name_start..end].to_string()))
            }
            Some(c) if c.is_ascii_digit() || matches!(c, '?' | '@' | '*' | '#' | '$' | '!' | '-') => {
                self.chars.next();
                self.chars.next();
                Ok(WordPart::Variable(c.to_string()))
            }
            _ => {
                self.chars.next();
                Ok(WordPart::Literal("$".to_string()))
            }
        }
    }

    pub(super) fn lex_backtick(&mut self, start: usize) -> Result<WordPart, LexerError> {
        self.chars.next();
        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                '\\' => {
                    self.chars.next();
                }
                '`' => return Ok(WordPart::Substitution(self.input[start + 1..pos].to_string())),
                _ => {}
            }
        }
        Err(LexerError::UnterminatedSubstitution { span: Span::new(start, self.input.len()) })
    }

    /// Scan to the `)` closing a `$(` or `$((`. Returns its byte offset.
    fn scan_parens(&mut self, start: usize) -> Result<usize, LexerError> {
        let mut depth = 1usize;
        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                '(' => {
                    depth += 1;
                    self.chars.next();
                }
                ')' => {
                    depth -= 1;
                    self.chars.next();
                    if depth == 0 {
                        return Ok(pos);
                    }
                }
                _ => self.skip_nested(pos, ch)?,
            }
        }
        Err(LexerError::UnterminatedSubstitution { span: Span::new(start, self.input.len()) })
    }

    /// Scan to the `}` closing a `${`. Returns its byte offset.
    fn scan_braces(&mut self, start: usize) -> Result<usize, LexerError> {
        let mut depth = 1usize;
        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                '{' => {
                    depth += 1;
                    self.chars.next();
                }
                '}' => {
                    depth -= 1;
                    self.chars.next();
                    if depth == 0 {
                        return Ok(pos);
                    }
                }
                _ => self.skip_nested(pos, ch)?,
            }
        }
        Err(LexerError::UnterminatedVariable { span: Span::new(start, self.input.len()) })
    }

    /// Skip one character, or a whole quoted/nested construct starting here.
    fn skip_nested(&mut self, pos: usize, ch: char) -> Result<(), LexerError> {
        match ch {
            '\'' => {
                self.lex_single_quote(pos)?;
            }
            '"' => {
                self.lex_double_quote(pos)?;
            }
            '`' => {
                self.lex_backtick(pos)?;
            }
            '$' => {
                self.lex_dollar(pos)?;
            }
            '\\' => {
                self.chars.next();
                self.chars.next();
            }
            _ => {
                self.chars.next();
            }
        }
        Ok(())
    }
}
