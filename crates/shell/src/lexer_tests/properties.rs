// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::lexer::Lexer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn tokenize_never_panics(input in "\\PC{0,64}") {
        let _ = Lexer::tokenize(&input);
    }

    #[test]
    fn single_quoted_text_always_lexes(text in "[a-zA-Z0-9 &|;()<>$`\"]{0,24}") {
        let input = format!("echo '{text}'");
        prop_assert!(Lexer::tokenize(&input).is_ok());
    }

    #[test]
    fn spans_are_ordered(input in "[a-z ;|&]{0,32}") {
        if let Ok(tokens) = Lexer::tokenize(&input) {
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
        }
    }
}
