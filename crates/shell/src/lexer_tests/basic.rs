// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Words, control operators, comments, and redirections.

use super::macros::w;
use crate::lexer::Lexer;
use crate::token::TokenKind;

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "  \t " => [],
    single_word: "echo" => [w("echo")],
    two_words: "echo hello" => [w("echo"), w("hello")],
    and_operator: "a && b" => [w("a"), TokenKind::And, w("b")],
    or_operator: "a || b" => [w("a"), TokenKind::Or, w("b")],
    pipe: "a | b" => [w("a"), TokenKind::Pipe, w("b")],
    pipe_stderr: "a |& b" => [w("a"), TokenKind::Pipe, w("b")],
    semicolon: "a; b" => [w("a"), TokenKind::Semi, w("b")],
    background: "a & b" => [w("a"), TokenKind::Ampersand, w("b")],
    newlines_collapse: "a\n\n\nb" => [w("a"), TokenKind::Newline, w("b")],
    crlf_newline: "a\r\nb" => [w("a"), TokenKind::Newline, w("b")],
    trailing_comment: "echo hi # note" => [w("echo"), w("hi")],
    comment_line: "# setup\nmake" => [TokenKind::Newline, w("make")],
    hash_inside_word: "echo a#b" => [w("echo"), w("a#b")],
    line_continuation: "echo a \\\n b" => [w("echo"), w("a"), w("b")],
    escaped_space: "echo a\\ b" => [w("echo"), w("a b")],
    subshell: "(echo)" => [TokenKind::LParen, w("echo"), TokenKind::RParen],
    brace_group: "{ echo; }" => [TokenKind::LBrace, w("echo"), TokenKind::Semi, TokenKind::RBrace],
    brace_expansion_is_word: "echo {a,b}" => [w("echo"), w("{a,b}")],
    closing_brace_as_argument: "echo }" => [w("echo"), w("}")],
    case_terminator: "a;; b" => [w("a"), TokenKind::DoubleSemi, w("b")],
}

lex_tests! {
    redirect_out: "echo hi > out" => [w("echo"), w("hi"), TokenKind::Redirect { op: ">" }, w("out")],
    redirect_append: "echo hi >>out" => [w("echo"), w("hi"), TokenKind::Redirect { op: ">>" }, w("out")],
    redirect_in: "wc < file" => [w("wc"), TokenKind::Redirect { op: "<" }, w("file")],
    redirect_fd_dup: "cmd 2>&1" => [w("cmd"), TokenKind::Redirect { op: ">&" }, w("1")],
    redirect_both: "cmd &> log" => [w("cmd"), TokenKind::Redirect { op: "&>" }, w("log")],
    here_string: "cat <<< word" => [w("cat"), TokenKind::HereString, w("word")],
    digits_not_before_redirect: "echo 42" => [w("echo"), w("42")],
}

#[test]
fn fd_prefix_is_part_of_redirect_span() {
    let tokens = Lexer::tokenize("cmd 2>/dev/null").unwrap();
    assert_eq!(tokens[1].span.start, 4);
    assert_eq!(tokens[1].span.end, 6);
}

#[test]
fn word_spans_cover_quotes() {
    let tokens = Lexer::tokenize("echo 'a b' c").unwrap();
    let spans: Vec<_> = tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
    assert_eq!(spans, vec![(0, 4), (5, 10), (11, 12)]);
}

#[test]
fn assignment_words_are_recognized() {
    let tokens = Lexer::tokenize("FOO=1 make").unwrap();
    let TokenKind::Word(word) = &tokens[0].kind else {
        panic!("expected word, got {:?}", tokens[0].kind);
    };
    assert_eq!(word.assignment_name(), Some("FOO"));
}
