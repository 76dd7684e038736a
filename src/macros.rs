//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a pattern handler for fixed-spelling tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr) => {
        Token {
            kind: $kind,
            text: $text,
        }
    };
}

/// Creates a pattern handler for tokens with a fixed spelling.
///
/// Generates a handler that turns the matched lexeme into a token of the
/// given kind, preserving the lexeme as the token text.
///
/// # Example
///
/// ```ignore
/// TokenPattern {
///     regex: Regex::new(r"\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexeme: &str| Some(($kind, String::from(lexeme)))
    };
}
