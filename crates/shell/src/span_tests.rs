// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(0, 4).slice("echo hi"), "echo");
    assert_eq!(Span::new(10, 12).slice("echo"), "");
}

#[test]
fn locate_second_line() {
    let src = "echo a\necho \"b";
    let (line, col, content) = locate(src, Span::new(12, 14));
    assert_eq!(line, 2);
    assert_eq!(col, 5);
    assert_eq!(content, "echo \"b");
}

#[test]
fn diagnostic_points_at_span() {
    let out = diagnostic("echo \"hi", Span::new(5, 8), "unterminated double quote");
    assert_eq!(
        out,
        "error: unterminated double quote\n  --> line 1, column 6\n   |\n  1 | echo \"hi\n   |      ^^^"
    );
}

#[test]
fn diagnostic_for_empty_span_at_end() {
    let out = diagnostic("ls |", Span::at(4), "missing command after `|`");
    assert!(out.contains("column 5"));
    assert!(out.ends_with("    ^"));
}
