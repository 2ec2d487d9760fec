// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unterminated constructs.

use crate::lexer::{Lexer, LexerError};

lex_error_tests! {
    unterminated_single_quote: "echo 'oops" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double_quote: "echo \"oops" => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_substitution: "echo $(date" => LexerError::UnterminatedSubstitution { .. },
    unterminated_backtick: "echo `date" => LexerError::UnterminatedSubstitution { .. },
    unterminated_variable: "echo ${HOME" => LexerError::UnterminatedVariable { .. },
    unterminated_arithmetic: "echo $((1 + 2)" => LexerError::UnterminatedSubstitution { .. },
    quote_inside_substitution: "echo $(echo 'x)" => LexerError::UnterminatedSingleQuote { .. },
}

#[test]
fn error_span_starts_at_opening_quote() {
    let err = Lexer::tokenize("echo 'oops").unwrap_err();
    assert_eq!(err.span().start, 5);
    assert_eq!(err.to_string(), "unterminated single quote at position 5");
}

#[test]
fn trailing_backslash_is_literal() {
    assert!(Lexer::tokenize("echo \\").is_ok());
}
