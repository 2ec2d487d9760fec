// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Here-document lexer tests: delimiter capture and body reading.

use super::macros::w;
use crate::lexer::{Lexer, LexerError};
use crate::token::TokenKind;

fn heredoc(delimiter: &str, body: &str) -> TokenKind {
    TokenKind::HereDoc { delimiter: delimiter.into(), body: body.into() }
}

lex_tests! {
    basic_heredoc: "cat <<EOF\nhello\nworld\nEOF" => [w("cat"), heredoc("EOF", "hello\nworld\n"), TokenKind::Newline],
    empty_body: "cat <<EOF\nEOF" => [w("cat"), heredoc("EOF", ""), TokenKind::Newline],
    quoted_delimiter: "cat <<'EOF'\n$x\nEOF" => [w("cat"), heredoc("EOF", "$x\n"), TokenKind::Newline],
    strip_tabs: "cat <<-EOF\n\tindented\n\tEOF" => [w("cat"), heredoc("EOF", "indented\n"), TokenKind::Newline],
    two_heredocs: "cat <<A && cat <<B\na\nA\nb\nB" => [
        w("cat"),
        heredoc("A", "a\n"),
        TokenKind::And,
        w("cat"),
        heredoc("B", "b\n"),
        TokenKind::Newline,
    ],
    command_after_heredoc: "cat <<EOF\nx\nEOF\nmake" => [
        w("cat"),
        heredoc("EOF", "x\n"),
        TokenKind::Newline,
        w("make"),
    ],
}

lex_error_tests! {
    missing_terminator: "cat <<EOF\nhello" => LexerError::UnterminatedHereDoc { .. },
    no_body_at_all: "cat <<EOF" => LexerError::UnterminatedHereDoc { .. },
    missing_delimiter: "cat <<" => LexerError::MissingHereDocDelimiter { .. },
    delimiter_is_operator: "cat << | wc" => LexerError::MissingHereDocDelimiter { .. },
}
