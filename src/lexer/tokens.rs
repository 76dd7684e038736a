use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Number,
    Identifier,

    Plus,
    Minus,
    Star,
    Slash,
    Less,
    Greater,

    Comma,
    Semicolon,
    OpenParen,
    CloseParen,

    // Reserved
    Def,
    Extern,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TokenKind::*;

        let string = match self {
            Eof => "end of input",
            Number => "number",
            Identifier => "identifier",
            Plus => "`+`",
            Minus => "`-`",
            Star => "`*`",
            Slash => "`/`",
            Less => "`<`",
            Greater => "`>`",
            Comma => "`,`",
            Semicolon => "`;`",
            OpenParen => "`(`",
            CloseParen => "`)`",
            Def => "`def`",
            Extern => "`extern`",
        };

        f.write_str(string)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier `{}`", self.text),
            TokenKind::Number => write!(f, "literal `{}`", self.text),
            _ => write!(f, "{}", self.kind),
        }
    }
}
