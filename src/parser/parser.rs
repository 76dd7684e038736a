use crate::{
    errors::errors::{Error, ParseError},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
    Position,
};

/// The parser owns the tokenizer and pulls from it one token at a time.
/// Construct-level parsing lives in [`super::stmt`], expression parsing in
/// [`super::expr`]; this struct only provides the token plumbing they
/// share.
pub struct Parser {
    tokenizer: Tokenizer,
}

impl Parser {
    pub fn new(source: String, file: Option<String>) -> Result<Self, Error> {
        Ok(Parser {
            tokenizer: Tokenizer::with_source(source, file)?,
        })
    }

    /// Returns the kind of the current token without advancing.
    pub fn current_kind(&self) -> Result<TokenKind, Error> {
        self.tokenizer.current_kind()
    }

    /// Returns the spelling of the current token without advancing.
    pub fn current_text(&self) -> Result<String, Error> {
        Ok(self.tokenizer.current_text()?.to_string())
    }

    pub fn current_token(&self) -> Result<Token, Error> {
        self.tokenizer.current_token()
    }

    /// Consumes the current token.
    pub fn advance(&mut self) -> Result<(), Error> {
        self.tokenizer.next()
    }

    /// Source offset of the start of the current token.
    pub fn position(&self) -> Position {
        self.tokenizer.position()
    }

    /// Consumes a token of the expected kind, raising `error` otherwise.
    pub(crate) fn expect(&mut self, expected_kind: TokenKind, error: ParseError) -> Result<(), Error> {
        if self.current_kind()? != expected_kind {
            Err(Error::new(error.into(), self.position()))
        } else {
            self.advance()
        }
    }
}
