// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! doscan-shell: static checks for shell command text.
//!
//! Nothing here executes a command. [`check`] tokenizes and structurally
//! validates a command line; [`leading_program`] names the executable it
//! would start with so callers can resolve it on `PATH`.

mod error;
mod invocation;
mod lexer;
mod span;
mod syntax;
mod token;

pub use error::{LexerError, SyntaxError};
pub use invocation::{is_builtin, leading_program, Program};
pub use lexer::Lexer;
pub use span::{diagnostic, locate, Span};
pub use syntax::check;
pub use token::{Token, TokenKind, Word, WordPart};
