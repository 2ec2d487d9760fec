// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quotes, variables, and substitutions.

use super::macros::{parts, w};
use crate::lexer::Lexer;
use crate::token::{TokenKind, WordPart};

fn lit(s: &str) -> WordPart {
    WordPart::Literal(s.to_string())
}

lex_tests! {
    single_quoted: "echo 'a b'" => [w("echo"), parts(vec![WordPart::SingleQuoted("a b".into())])],
    adjacent_single_quotes: "echo 'it''s'" => [
        w("echo"),
        parts(vec![WordPart::SingleQuoted("it".into()), WordPart::SingleQuoted("s".into())]),
    ],
    double_quoted_plain: "echo \"plain\"" => [
        w("echo"),
        parts(vec![WordPart::DoubleQuoted { content: "plain".into(), expands: false }]),
    ],
    double_quoted_expanding: "echo \"hi $USER\"" => [
        w("echo"),
        parts(vec![WordPart::DoubleQuoted { content: "hi $USER".into(), expands: true }]),
    ],
    double_quoted_lone_dollar: "echo \"costs $\"" => [
        w("echo"),
        parts(vec![WordPart::DoubleQuoted { content: "costs $".into(), expands: false }]),
    ],
    literal_then_quote: "echo foo\"bar\"" => [
        w("echo"),
        parts(vec![lit("foo"), WordPart::DoubleQuoted { content: "bar".into(), expands: false }]),
    ],
    variable_then_literal: "echo $HOME/bin" => [
        w("echo"),
        parts(vec![WordPart::Variable("HOME".into()), lit("/bin")]),
    ],
    braced_variable: "echo ${A:-x}" => [w("echo"), parts(vec![WordPart::Variable("A:-x".into())])],
    special_variable: "exit $?" => [w("exit"), parts(vec![WordPart::Variable("?".into())])],
    command_substitution: "echo $(date)" => [w("echo"), parts(vec![WordPart::Substitution("date".into())])],
    backtick_substitution: "echo `date`" => [w("echo"), parts(vec![WordPart::Substitution("date".into())])],
    arithmetic: "echo $((1 + 2))" => [w("echo"), parts(vec![WordPart::Substitution("(1 + 2)".into())])],
    paren_inside_quotes_in_substitution: "echo $(echo \")\")" => [
        w("echo"),
        parts(vec![WordPart::Substitution("echo \")\"".into())]),
    ],
    lone_dollar_is_literal: "echo $" => [w("echo"), w("$")],
    escaped_dollar: "echo \\$HOME" => [w("echo"), w("$HOME")],
    ansi_c_quote: "echo $'a\\'b'" => [w("echo"), parts(vec![WordPart::SingleQuoted("a\\'b".into())])],
    quoted_operators_stay_in_word: "echo 'a && b | c'" => [
        w("echo"),
        parts(vec![WordPart::SingleQuoted("a && b | c".into())]),
    ],
}

#[test]
fn literal_joins_unexpanded_parts() {
    let tokens = Lexer::tokenize("'ma'\"ke\"").unwrap();
    let TokenKind::Word(word) = &tokens[0].kind else {
        panic!("expected word");
    };
    assert_eq!(word.literal().as_deref(), Some("make"));
}

#[test]
fn literal_is_none_with_expansion() {
    let tokens = Lexer::tokenize("$CC").unwrap();
    let TokenKind::Word(word) = &tokens[0].kind else {
        panic!("expected word");
    };
    assert_eq!(word.literal(), None);
}
