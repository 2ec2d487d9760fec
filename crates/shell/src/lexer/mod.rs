// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell lexer for tokenizing detected commands.
//!
//! The lexer only needs to be faithful enough to tell a well-formed command
//! from a broken one: quotes, substitutions and here-documents must be
//! closed, and operators are split out so the syntax checker can see them.
//! Word contents are kept raw; nothing is expanded.

mod heredoc;
mod operators;
mod quotes;

use std::collections::VecDeque;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::token::{Span, Token, TokenKind, Word, WordPart};

pub use crate::error::LexerError;

/// Words after which the next word starts a new command.
const COMMAND_KEYWORDS: &[&str] =
    &["if", "then", "else", "elif", "do", "while", "until", "!", "time", "exec"];

/// Here-document waiting for its body on the following lines.
struct PendingHereDoc {
    delimiter: String,
    strip_tabs: bool,
    token_index: usize,
    span: Span,
}

/// Shell lexer that tokenizes input into words, operators, and newlines.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    pending_heredocs: VecDeque<PendingHereDoc>,
    /// The next word would be a command name (`{`/`}` are reserved there).
    command_position: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            pending_heredocs: VecDeque::new(),
            command_position: true,
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::with_capacity(input.len() / 4 + 1);

        while let Some(token) = lexer.next_token()? {
            let is_newline = matches!(token.kind, TokenKind::Newline);
            lexer.command_position = match &token.kind {
                TokenKind::Word(word) => COMMAND_KEYWORDS.iter().any(|k| word.is_keyword(k)),
                TokenKind::Redirect { .. } | TokenKind::HereDoc { .. } | TokenKind::HereString => {
                    lexer.command_position
                }
                _ => true,
            };

            if let TokenKind::HereDoc { .. } = token.kind {
                let (delimiter, strip_tabs) = lexer.read_heredoc_delimiter(token.span)?;
                lexer.pending_heredocs.push_back(PendingHereDoc {
                    delimiter,
                    strip_tabs,
                    token_index: tokens.len(),
                    span: token.span,
                });
            }

            tokens.push(token);

            if is_newline && !lexer.pending_heredocs.is_empty() {
                lexer.capture_heredoc_bodies(&mut tokens)?;
            }
        }

        if let Some(pending) = lexer.pending_heredocs.front() {
            return Err(LexerError::UnterminatedHereDoc {
                delimiter: pending.delimiter.clone(),
                span: pending.span,
            });
        }
        Ok(tokens)
    }

    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Character after the next one, without consuming anything.
    fn peek_second(&self) -> Option<char> {
        let mut lookahead = self.chars.clone();
        lookahead.next();
        lookahead.next().map(|(_, c)| c)
    }

    fn position(&self) -> usize {
        self.chars.clone().next().map(|(pos, _)| pos).unwrap_or(self.input.len())
    }

    /// Consume a backslash-newline pair. Returns true if one was consumed.
    fn consume_line_continuation(&mut self) -> bool {
        if self.peek_char() != Some('\\') {
            return false;
        }
        let mut lookahead = self.chars.clone();
        lookahead.next();
        match lookahead.next().map(|(_, c)| c) {
            Some('\n') => {
                self.chars.next();
                self.chars.next();
                true
            }
            Some('\r') if lookahead.next().map(|(_, c)| c) == Some('\n') => {
                self.chars.next();
                self.chars.next();
                self.chars.next();
                true
            }
            _ => false,
        }
    }

    /// Consume LF or CRLF, returning the byte length consumed.
    fn consume_newline(&mut self) -> usize {
        match self.peek_char() {
            Some('\n') => {
                self.chars.next();
                1
            }
            Some('\r') => {
                self.chars.next();
                if self.peek_char() == Some('\n') {
                    self.chars.next();
                    2
                } else {
                    1
                }
            }
            _ => 0,
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t') => {
                    self.chars.next();
                }
                Some('\\') if self.consume_line_continuation() => {}
                _ => break,
            }
        }
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.chars.next();
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        loop {
            self.skip_whitespace();
            let Some(&(pos, ch)) = self.chars.peek() else {
                return Ok(None);
            };

            let token = match ch {
                '#' => {
                    self.skip_comment();
                    continue;
                }
                '\n' | '\r' => self.lex_newline(pos),
                '&' => self.lex_ampersand(pos),
                '|' => self.lex_pipe(pos),
                ';' => self.lex_semi(pos),
                '(' => self.single(TokenKind::LParen, pos),
                ')' => self.single(TokenKind::RParen, pos),
                '<' => self.lex_redirect_in(pos),
                '>' => self.lex_redirect_out(pos),
                '{' if self.command_position && self.reserved_brace_follows() => {
                    self.single(TokenKind::LBrace, pos)
                }
                '}' if self.command_position && self.reserved_brace_follows() => {
                    self.single(TokenKind::RBrace, pos)
                }
                _ => self.lex_word(pos)?,
            };
            return Ok(Some(token));
        }
    }

    fn single(&mut self, kind: TokenKind, pos: usize) -> Token {
        self.chars.next();
        Token::new(kind, Span::new(pos, pos + 1))
    }

    /// `{` and `}` are reserved words only when they stand alone.
    fn reserved_brace_follows(&self) -> bool {
        matches!(self.peek_second(), None | Some(' ' | '\t' | '\n' | '\r' | ';' | ')'))
    }

    /// Lex a word made of adjacent literal, quoted, and expansion parts.
    ///
    /// A word that is only digits followed by `<` or `>` is a file descriptor
    /// prefix and lexes as a redirection instead.
    fn lex_word(&mut self, start: usize) -> Result<Token, LexerError> {
        let mut parts: Vec<WordPart> = Vec::new();
        let mut literal = String::new();
        let mut end = start;

        while let Some(&(pos, ch)) = self.chars.peek() {
            if self.consume_line_continuation() {
                continue;
            }
            match ch {
                ' ' | '\t' | '\n' | '\r' | '&' | '|' | ';' | '(' | ')' => break,
                '<' | '>' => {
                    if parts.is_empty() && !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit()) {
                        return Ok(if ch == '>' {
                            self.lex_redirect_out(start)
                        } else {
                            self.lex_redirect_in(start)
                        });
                    }
                    break;
                }
                '\\' => {
                    self.chars.next();
                    match self.chars.next() {
                        Some((next_pos, next_ch)) => {
                            literal.push(next_ch);
                            end = next_pos + next_ch.len_utf8();
                        }
                        None => {
                            literal.push('\\');
                            end = pos + 1;
                        }
                    }
                    continue;
                }
                '\'' | '"' | '$' | '`' => {
                    let part = match ch {
                        '\'' => self.lex_single_quote(pos)?,
                        '"' => self.lex_double_quote(pos)?,
                        '$' => self.lex_dollar(pos)?,
                        _ => self.lex_backtick(pos)?,
                    };
                    match part {
                        WordPart::Literal(text) => literal.push_str(&text),
                        part => {
                            if !literal.is_empty() {
                                parts.push(WordPart::Literal(std::mem::take(&mut literal)));
                            }
                            parts.push(part);
                        }
                    }
                    end = self.position();
                    continue;
                }
                _ => {
                    literal.push(ch);
                    end = pos + ch.len_utf8();
                    self.chars.next();
                }
            }
        }

        if !literal.is_empty() {
            parts.push(WordPart::Literal(literal));
        }
        Ok(Token::new(TokenKind::Word(Word { parts }), Span::new(start, end)))
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
