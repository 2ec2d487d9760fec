// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Leading program extraction.
//!
//! Finds the executable the shell would run first, looking through prefix
//! assignments, redirections, reserved words, and wrappers such as `sudo`
//! or `env`.

use crate::token::{Token, TokenKind, Word};

/// The program a command starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Program {
    /// A name or path known without running anything.
    Static(String),
    /// The name comes from an expansion (`$CC`, `$(which tool)`).
    Dynamic,
}

impl Program {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Static(name) => Some(name),
            Self::Dynamic => None,
        }
    }
}

/// Reserved words that may precede the first simple command.
const LEADING_RESERVED: &[&str] = &["if", "while", "until", "!", "then", "do", "elif", "else"];

/// Compound commands with no single leading program.
const COMPOUND_STARTS: &[&str] = &["for", "case", "select", "function", "[["];

/// Shell builtins and special utilities that never live on `PATH`.
const BUILTINS: &[&str] = &[
    ".", ":", "[", "alias", "bg", "break", "builtin", "cd", "command", "continue", "declare",
    "echo", "eval", "exec", "exit", "export", "false", "fg", "getopts", "hash", "jobs", "kill",
    "let", "local", "printf", "pwd", "read", "readonly", "return", "set", "shift", "source",
    "test", "times", "trap", "true", "type", "typeset", "ulimit", "umask", "unalias", "unset",
    "wait",
];

/// Returns true for names the shell resolves without a `PATH` lookup.
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

const SUDO_VALUE_OPTIONS: &[&str] = &["-u", "-g", "-C", "-D", "-h", "-p", "-r", "-t", "-U"];
const ENV_VALUE_OPTIONS: &[&str] = &["-u", "-C", "-S"];
const EXEC_VALUE_OPTIONS: &[&str] = &["-a"];
const NICE_VALUE_OPTIONS: &[&str] = &["-n"];

/// Wrapper commands and the options that consume a following argument.
fn wrapper_options(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "sudo" => Some(SUDO_VALUE_OPTIONS),
        "env" => Some(ENV_VALUE_OPTIONS),
        "exec" => Some(EXEC_VALUE_OPTIONS),
        "nice" => Some(NICE_VALUE_OPTIONS),
        "nohup" | "time" => Some(&[]),
        _ => None,
    }
}

/// Leading program of the first simple command in `tokens`.
///
/// Returns `None` when the command starts with a compound construct, a
/// function definition, or contains only assignments and redirections.
pub fn leading_program(tokens: &[Token]) -> Option<Program> {
    let mut words = tokens.iter().peekable();
    let mut wrapper: Option<&'static [&'static str]> = None;

    while let Some(token) = words.next() {
        let word = match &token.kind {
            TokenKind::Word(word) => word,
            TokenKind::Redirect { .. } | TokenKind::HereString => {
                words.next();
                continue;
            }
            TokenKind::HereDoc { .. } | TokenKind::LParen | TokenKind::LBrace | TokenKind::Newline => {
                continue
            }
            _ => return None,
        };

        if let Some(options) = wrapper {
            match skip_wrapper_word(word, options) {
                WrapperWord::Option { takes_value } => {
                    if takes_value {
                        words.next();
                    }
                    continue;
                }
                WrapperWord::Assignment => continue,
                WrapperWord::Program => {}
            }
        } else if word.assignment_name().is_some() {
            continue;
        }

        let Some(name) = word.literal() else {
            return Some(Program::Dynamic);
        };
        if LEADING_RESERVED.contains(&name.as_str()) {
            continue;
        }
        if COMPOUND_STARTS.contains(&name.as_str()) {
            return None;
        }
        // `name()` defines a function rather than running `name`.
        if matches!(words.peek().map(|t| &t.kind), Some(TokenKind::LParen)) {
            return None;
        }
        if let Some(options) = wrapper_options(&name) {
            wrapper = Some(options);
            continue;
        }
        return Some(Program::Static(name));
    }
    None
}

enum WrapperWord {
    Option { takes_value: bool },
    Assignment,
    Program,
}

fn skip_wrapper_word(word: &Word, options: &[&str]) -> WrapperWord {
    let Some(text) = word.literal() else {
        return WrapperWord::Program;
    };
    if text.starts_with('-') {
        let takes_value = options.contains(&text.as_str());
        return WrapperWord::Option { takes_value };
    }
    if word.assignment_name().is_some() {
        return WrapperWord::Assignment;
    }
    WrapperWord::Program
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
