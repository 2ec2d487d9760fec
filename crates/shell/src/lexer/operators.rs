// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control operators and redirections.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl Lexer<'_> {
    fn skip_newlines(&mut self) {
        loop {
            match self.peek_char() {
                Some('\n' | '\r') => {
                    self.consume_newline();
                }
                Some(' ' | '\t') => {
                    self.chars.next();
                }
                _ => break,
            }
        }
    }

    /// Collapses consecutive newlines into one (unless heredocs are pending).
    pub(super) fn lex_newline(&mut self, start: usize) -> Token {
        let len = self.consume_newline();
        if self.pending_heredocs.is_empty() {
            self.skip_newlines();
        }
        Token::new(TokenKind::Newline, Span::new(start, start + len))
    }

    pub(super) fn lex_ampersand(&mut self, start: usize) -> Token {
        self.chars.next();
        match self.peek_char() {
            Some('&') => {
                self.chars.next();
                Token::new(TokenKind::And, Span::new(start, start + 2))
            }
            Some('>') => {
                self.chars.next();
                let op = if self.peek_char() == Some('>') {
                    self.chars.next();
                    "&>>"
                } else {
                    "&>"
                };
                Token::new(TokenKind::Redirect { op }, Span::new(start, self.position()))
            }
            _ => Token::new(TokenKind::Ampersand, Span::new(start, start + 1)),
        }
    }

    /// `|`, `||` and `|&` (pipe with stderr).
    pub(super) fn lex_pipe(&mut self, start: usize) -> Token {
        self.chars.next();
        match self.peek_char() {
            Some('|') => {
                self.chars.next();
                Token::new(TokenKind::Or, Span::new(start, start + 2))
            }
            Some('&') => {
                self.chars.next();
                Token::new(TokenKind::Pipe, Span::new(start, start + 2))
            }
            _ => Token::new(TokenKind::Pipe, Span::new(start, start + 1)),
        }
    }

    /// `;`, and the case terminators `;;`, `;&`, `;;&`.
    pub(super) fn lex_semi(&mut self, start: usize) -> Token {
        self.chars.next();
        let kind = match self.peek_char() {
            Some(';') => {
                self.chars.next();
                if self.peek_char() == Some('&') {
                    self.chars.next();
                }
                TokenKind::DoubleSemi
            }
            Some('&') => {
                self.chars.next();
                TokenKind::DoubleSemi
            }
            _ => TokenKind::Semi,
        };
        Token::new(kind, Span::new(start, self.position()))
    }

    /// Output redirection starting at `start` (which may cover an fd prefix).
    pub(super) fn lex_redirect_out(&mut self, start: usize) -> Token {
        self.chars.next();
        let op = match self.peek_char() {
            Some('>') => ">>",
            Some('&') => ">&",
            Some('|') => ">|",
            _ => ">",
        };
        if op.len() == 2 {
            self.chars.next();
        }
        Token::new(TokenKind::Redirect { op }, Span::new(start, self.position()))
    }

    /// Input redirection, here-document, or here-string.
    pub(super) fn lex_redirect_in(&mut self, start: usize) -> Token {
        self.chars.next();
        let kind = match self.peek_char() {
            Some('<') => {
                self.chars.next();
                match self.peek_char() {
                    Some('<') => {
                        self.chars.next();
                        TokenKind::HereString
                    }
                    Some('-') => {
                        self.chars.next();
                        TokenKind::HereDoc { delimiter: String::new(), body: String::new() }
                    }
                    _ => TokenKind::HereDoc { delimiter: String::new(), body: String::new() },
                }
            }
            Some('>') => {
                self.chars.next();
                TokenKind::Redirect { op: "<>" }
            }
            Some('&') => {
                self.chars.next();
                TokenKind::Redirect { op: "<&" }
            }
            _ => TokenKind::Redirect { op: "<" },
        };
        Token::new(kind, Span::new(start, self.position()))
    }
}
