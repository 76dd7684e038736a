use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

lazy_static! {
    /// Binding strength of each binary operator. `<` and `>` bind loosest,
    /// `*` and `/` tightest.
    pub static ref OP_PRECEDENCE: HashMap<TokenKind, i32> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Less, 10);
        map.insert(TokenKind::Greater, 10);
        map.insert(TokenKind::Plus, 20);
        map.insert(TokenKind::Minus, 20);
        map.insert(TokenKind::Star, 40);
        map.insert(TokenKind::Slash, 40);
        map
    };
}

/// Precedence of `kind` as a binary operator, or -1 when it is not one
/// (which terminates the expression fold).
pub fn token_precedence(kind: TokenKind) -> i32 {
    match OP_PRECEDENCE.get(&kind) {
        Some(precedence) => *precedence,
        None => -1,
    }
}
