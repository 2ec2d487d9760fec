// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Here-document delimiters and deferred body capture.

use super::{Lexer, LexerError};
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Read the delimiter word after `<<` / `<<-`. Quotes are removed.
    pub(super) fn read_heredoc_delimiter(&mut self, op_span: Span) -> Result<(String, bool), LexerError> {
        let strip_tabs = op_span.slice(self.input).ends_with('-');
        self.skip_whitespace();

        let Some(&(pos, ch)) = self.chars.peek() else {
            return Err(LexerError::MissingHereDocDelimiter { span: op_span });
        };
        if matches!(ch, '\n' | '\r' | ';' | '&' | '|' | '(' | ')' | '<' | '>') {
            return Err(LexerError::MissingHereDocDelimiter { span: op_span });
        }

        let word = self.lex_word(pos)?;
        let delimiter: String = word
            .span
            .slice(self.input)
            .chars()
            .filter(|c| !matches!(c, '\'' | '"' | '\\'))
            .collect();
        if delimiter.is_empty() {
            return Err(LexerError::MissingHereDocDelimiter { span: op_span });
        }
        Ok((delimiter, strip_tabs))
    }

    /// Consume the bodies of all pending here-documents, in order.
    pub(super) fn capture_heredoc_bodies(&mut self, tokens: &mut [Token]) -> Result<(), LexerError> {
        while let Some(pending) = self.pending_heredocs.pop_front() {
            let mut body = String::new();
            loop {
                let Some(line) = self.read_line() else {
                    return Err(LexerError::UnterminatedHereDoc {
                        delimiter: pending.delimiter,
                        span: pending.span,
                    });
                };
                let candidate = if pending.strip_tabs { line.trim_start_matches('\t') } else { line };
                if candidate == pending.delimiter {
                    break;
                }
                body.push_str(candidate);
                body.push('\n');
            }
            if let Some(token) = tokens.get_mut(pending.token_index) {
                token.kind = TokenKind::HereDoc { delimiter: pending.delimiter, body };
            }
        }
        Ok(())
    }

    /// Read one physical line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Option<&'a str> {
        let start = self.position();
        if start >= self.input.len() {
            return None;
        }
        let mut end = start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch == '\n' || ch == '\r' {
                end = pos;
                self.consume_newline();
                return self.input.get(start..end);
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }
        self.input.get(start..end)
    }
}
