// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for shell lexer tests.

/// Generate tokenization success tests.
///
/// ```ignore
/// lex_tests! {
///     two_words: "echo hello" => [w("echo"), w("hello")],
/// }
/// ```
macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input).expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<TokenKind> = vec![$($token),*];
                let actual: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate tokenization error tests.
///
/// ```ignore
/// lex_error_tests! {
///     unterminated_sq: "'" => LexerError::UnterminatedSingleQuote { .. },
/// }
/// ```
macro_rules! lex_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Lexer::tokenize($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

/// Single-literal word token.
pub(super) fn w(text: &str) -> crate::token::TokenKind {
    crate::token::TokenKind::Word(text.into())
}

/// Word token made of explicit parts.
pub(super) fn parts(parts: Vec<crate::token::WordPart>) -> crate::token::TokenKind {
    crate::token::TokenKind::Word(crate::token::Word { parts })
}
