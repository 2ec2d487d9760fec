// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural syntax checking over the token stream.
//!
//! This is not a full parser. It tracks just enough state to reject what
//! `sh -n` would reject in practice: dangling control operators, unmatched
//! grouping, redirections without a target, and compound commands that are
//! opened but never closed.

use crate::error::SyntaxError;
use crate::lexer::Lexer;
use crate::token::{Span, Token, TokenKind, Word, WordPart};

/// Tokenize and structurally check a command.
pub fn check(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let tokens = Lexer::tokenize(input)?;
    Checker::new(&tokens).run()?;
    Ok(tokens)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseState {
    /// Between `case` and `in`.
    Subject,
    /// Reading `pat | pat )`.
    Pattern,
    /// Commands of an arm, up to `;;` or `esac`.
    Body,
}

#[derive(Debug)]
enum Frame {
    Paren { span: Span, index: usize },
    Brace { span: Span, index: usize },
    If { span: Span },
    Loop { keyword: String, span: Span },
    Case { span: Span, state: CaseState },
}

struct Checker<'t> {
    tokens: &'t [Token],
    stack: Vec<Frame>,
    /// Next word is in command-name position.
    cmd_start: bool,
    /// The current pipeline element has a command or redirection.
    in_cmd: bool,
    /// `&&`, `||` or `|` still waiting for its right-hand command.
    needs_cmd: Option<(String, Span)>,
    /// Inside `[[ ... ]]`, where `(`, `)`, `&&` and `||` are test operators.
    in_test: bool,
    seen_any: bool,
}

impl<'t> Checker<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            stack: Vec::new(),
            cmd_start: true,
            in_cmd: false,
            needs_cmd: None,
            in_test: false,
            seen_any: false,
        }
    }

    fn run(mut self) -> Result<(), SyntaxError> {
        let mut i = 0;
        while let Some(token) = self.tokens.get(i) {
            i = self.step(i, token)? + 1;
        }
        self.finish()
    }

    fn case_state(&self) -> Option<CaseState> {
        match self.stack.last() {
            Some(Frame::Case { state, .. }) => Some(*state),
            _ => None,
        }
    }

    fn set_case_state(&mut self, next: CaseState) {
        if let Some(Frame::Case { state, .. }) = self.stack.last_mut() {
            *state = next;
        }
    }

    /// A command (simple or compound) begins here.
    fn begin_command(&mut self) {
        self.needs_cmd = None;
        self.seen_any = true;
    }

    /// A compound command just closed and now acts as a command.
    fn end_compound(&mut self) {
        self.in_cmd = true;
        self.cmd_start = false;
    }

    fn unexpected(token: &Token) -> SyntaxError {
        SyntaxError::UnexpectedToken { token: token.kind.to_string(), span: token.span }
    }

    /// Process the token at `i`; returns the index of the last token consumed.
    fn step(&mut self, i: usize, token: &Token) -> Result<usize, SyntaxError> {
        match &token.kind {
            TokenKind::Word(word) => self.word(token, word)?,
            TokenKind::And | TokenKind::Or if self.in_test => {}
            TokenKind::Pipe if self.case_state() == Some(CaseState::Pattern) => {}
            TokenKind::And | TokenKind::Or | TokenKind::Pipe => {
                let operator = token.kind.to_string();
                if !self.in_cmd {
                    return Err(SyntaxError::MissingCommandBefore { operator, span: token.span });
                }
                self.needs_cmd = Some((operator, token.span));
                self.in_cmd = false;
                self.cmd_start = true;
            }
            TokenKind::Semi | TokenKind::Ampersand => {
                self.require_no_pending()?;
                if !self.in_cmd {
                    return Err(Self::unexpected(token));
                }
                self.in_cmd = false;
                self.cmd_start = true;
            }
            TokenKind::DoubleSemi => {
                self.require_no_pending()?;
                if self.case_state() != Some(CaseState::Body) {
                    return Err(Self::unexpected(token));
                }
                self.set_case_state(CaseState::Pattern);
                self.in_cmd = false;
                self.cmd_start = false;
            }
            TokenKind::Newline => {
                if self.needs_cmd.is_none() {
                    self.in_cmd = false;
                    self.cmd_start = true;
                }
            }
            TokenKind::LParen if self.in_test => {}
            TokenKind::LParen if self.case_state() == Some(CaseState::Pattern) => {}
            TokenKind::LParen => return self.open_paren(i, token),
            TokenKind::RParen if self.in_test => {}
            TokenKind::RParen if self.case_state() == Some(CaseState::Pattern) => {
                self.set_case_state(CaseState::Body);
                self.in_cmd = false;
                self.cmd_start = true;
            }
            TokenKind::RParen => match self.stack.last() {
                Some(Frame::Paren { span, index }) => {
                    let (span, index) = (*span, *index);
                    self.require_no_pending()?;
                    if self.only_newlines(index + 1, i) {
                        return Err(SyntaxError::EmptySubshell { span });
                    }
                    self.stack.pop();
                    self.end_compound();
                }
                _ => return Err(SyntaxError::Unbalanced { delimiter: ")".into(), span: token.span }),
            },
            TokenKind::LBrace => {
                self.begin_command();
                self.stack.push(Frame::Brace { span: token.span, index: i });
                self.in_cmd = false;
                self.cmd_start = true;
            }
            TokenKind::RBrace => match self.stack.last() {
                Some(Frame::Brace { span, index }) => {
                    let (span, index) = (*span, *index);
                    self.require_no_pending()?;
                    if self.only_newlines(index + 1, i) {
                        return Err(SyntaxError::EmptyBraceGroup { span });
                    }
                    self.stack.pop();
                    self.end_compound();
                }
                _ => return Err(SyntaxError::Unbalanced { delimiter: "}".into(), span: token.span }),
            },
            TokenKind::Redirect { .. } | TokenKind::HereString => {
                let target = self.tokens.get(i + 1);
                if !matches!(target.map(|t| &t.kind), Some(TokenKind::Word(_))) {
                    return Err(SyntaxError::MissingRedirectTarget {
                        operator: token.kind.to_string(),
                        span: token.span,
                    });
                }
                self.begin_command();
                self.in_cmd = true;
                return Ok(i + 1);
            }
            TokenKind::HereDoc { .. } => {
                self.begin_command();
                self.in_cmd = true;
            }
        }
        Ok(i)
    }

    fn word(&mut self, token: &Token, word: &Word) -> Result<(), SyntaxError> {
        if self.in_test {
            if word.is_keyword("]]") {
                self.in_test = false;
            }
            return Ok(());
        }

        match self.case_state() {
            Some(CaseState::Subject) => {
                if word.is_keyword("in") {
                    self.set_case_state(CaseState::Pattern);
                }
                return Ok(());
            }
            Some(CaseState::Pattern) => {
                if word.is_keyword("esac") {
                    self.stack.pop();
                    self.end_compound();
                }
                return Ok(());
            }
            _ => {}
        }

        if !self.cmd_start {
            self.in_cmd = true;
            return Ok(());
        }

        let keyword = match &word.parts[..] {
            [WordPart::Literal(text)] => text.as_str(),
            _ => "",
        };
        match keyword {
            "then" | "elif" | "else" | "do" | "fi" | "done" | "esac" => {
                if let Some((operator, span)) = self.needs_cmd.take() {
                    return Err(SyntaxError::MissingCommandAfter { operator, span });
                }
                self.closing_keyword(token, keyword)?;
            }
            "if" => {
                self.begin_command();
                self.stack.push(Frame::If { span: token.span });
            }
            "while" | "until" => {
                self.begin_command();
                self.stack.push(Frame::Loop { keyword: keyword.to_string(), span: token.span });
            }
            "for" | "select" => {
                self.begin_command();
                self.stack.push(Frame::Loop { keyword: keyword.to_string(), span: token.span });
                self.cmd_start = false;
            }
            "case" => {
                self.begin_command();
                self.stack.push(Frame::Case { span: token.span, state: CaseState::Subject });
                self.cmd_start = false;
            }
            "!" | "time" => self.begin_command(),
            "[[" => {
                self.begin_command();
                self.in_test = true;
                self.in_cmd = true;
                self.cmd_start = false;
            }
            _ => {
                self.begin_command();
                self.in_cmd = true;
                // Prefix assignments keep the next word in command position.
                self.cmd_start = word.assignment_name().is_some();
            }
        }
        Ok(())
    }

    fn closing_keyword(&mut self, token: &Token, keyword: &str) -> Result<(), SyntaxError> {
        let matched = match (keyword, self.stack.last()) {
            ("then" | "elif" | "else" | "fi", Some(Frame::If { .. })) => true,
            ("do" | "done", Some(Frame::Loop { .. })) => true,
            ("esac", Some(Frame::Case { .. })) => true,
            _ => false,
        };
        if !matched {
            return Err(Self::unexpected(token));
        }
        if matches!(keyword, "fi" | "done" | "esac") {
            self.stack.pop();
            self.end_compound();
        } else {
            self.in_cmd = false;
            self.cmd_start = true;
        }
        Ok(())
    }

    /// `(` opens a subshell in command position, or a function definition
    /// as `name()`. Anywhere else it is an error.
    fn open_paren(&mut self, i: usize, token: &Token) -> Result<usize, SyntaxError> {
        if self.cmd_start {
            self.begin_command();
            self.stack.push(Frame::Paren { span: token.span, index: i });
            self.in_cmd = false;
            return Ok(i);
        }

        let after_word = i > 0 && matches!(self.tokens[i - 1].kind, TokenKind::Word(_));
        let closes = matches!(self.tokens.get(i + 1).map(|t| &t.kind), Some(TokenKind::RParen));
        if after_word && closes {
            self.in_cmd = false;
            self.cmd_start = true;
            return Ok(i + 1);
        }
        Err(Self::unexpected(token))
    }

    fn require_no_pending(&mut self) -> Result<(), SyntaxError> {
        match self.needs_cmd.take() {
            Some((operator, span)) => Err(SyntaxError::MissingCommandAfter { operator, span }),
            None => Ok(()),
        }
    }

    fn only_newlines(&self, from: usize, to: usize) -> bool {
        self.tokens
            .get(from..to)
            .is_none_or(|between| between.iter().all(|t| matches!(t.kind, TokenKind::Newline)))
    }

    fn finish(mut self) -> Result<(), SyntaxError> {
        self.require_no_pending()?;
        if let Some(frame) = self.stack.pop() {
            return Err(match frame {
                Frame::Paren { span, .. } => SyntaxError::Unbalanced { delimiter: "(".into(), span },
                Frame::Brace { span, .. } => SyntaxError::Unbalanced { delimiter: "{".into(), span },
                Frame::If { span } => {
                    SyntaxError::UnclosedKeyword { keyword: "if".into(), expected: "fi", span }
                }
                Frame::Loop { keyword, span } => {
                    SyntaxError::UnclosedKeyword { keyword, expected: "done", span }
                }
                Frame::Case { span, .. } => {
                    SyntaxError::UnclosedKeyword { keyword: "case".into(), expected: "esac", span }
                }
            });
        }
        if !self.seen_any {
            return Err(SyntaxError::EmptyCommand);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
