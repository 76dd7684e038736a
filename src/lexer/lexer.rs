use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, LexicalError},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Turns a matched lexeme into a token, or `None` for lexemes that are
/// skipped entirely (whitespace and comments).
pub type PatternHandler = fn(&str) -> Option<(TokenKind, String)>;

pub struct TokenPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<TokenPattern> = vec![
        TokenPattern { regex: Regex::new("[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: word_handler },
        // No shape validation here: `1.2.3` is a single lexeme, and the
        // parser is the one to reject it when it fails to convert.
        TokenPattern { regex: Regex::new("[0-9.]+").unwrap(), handler: number_handler },
        TokenPattern { regex: Regex::new(r"\s+").unwrap(), handler: skip_handler },
        TokenPattern { regex: Regex::new("#.*").unwrap(), handler: skip_handler },
        TokenPattern { regex: Regex::new(r"\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        TokenPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        TokenPattern { regex: Regex::new(r"\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        TokenPattern { regex: Regex::new(r"\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        TokenPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus) },
        TokenPattern { regex: Regex::new(r"\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        TokenPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        TokenPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        TokenPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        TokenPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
    ];
}

/// The tokenizer holds the source text, a scan position, and the one
/// current token; `next` recomputes the current token on demand, so tokens
/// are produced and discarded one at a time. The end-of-input token is
/// sticky: advancing past it yields it again.
pub struct Tokenizer {
    source: String,
    file: Rc<String>,
    pos: usize,
    token_start: usize,
    current: Token,
    initialized: bool,
}

impl Tokenizer {
    /// Creates a tokenizer with no source text. Every token query fails
    /// until `set_source` is called.
    pub fn new() -> Self {
        Tokenizer {
            source: String::new(),
            file: Rc::new(String::from("shell")),
            pos: 0,
            token_start: 0,
            current: MK_TOKEN!(TokenKind::Eof, String::from("EOF")),
            initialized: false,
        }
    }

    pub fn with_source(source: String, file: Option<String>) -> Result<Self, Error> {
        let mut tokenizer = Tokenizer::new();
        tokenizer.set_source(source, file)?;
        Ok(tokenizer)
    }

    /// Replaces the source text, resets all scanning state, and computes
    /// the first token.
    pub fn set_source(&mut self, source: String, file: Option<String>) -> Result<(), Error> {
        self.source = source;
        self.file = Rc::new(file.unwrap_or_else(|| String::from("shell")));
        self.pos = 0;
        self.token_start = 0;
        self.initialized = true;
        self.next()
    }

    /// Advances past the current token and recomputes it from the
    /// remaining input.
    pub fn next(&mut self) -> Result<(), Error> {
        self.guard()?;

        let mut pos = self.pos;
        let (token, token_start) = loop {
            // End of input is reported but never consumed past.
            if pos >= self.source.len() {
                break (MK_TOKEN!(TokenKind::Eof, String::from("EOF")), pos);
            }

            let rest = &self.source[pos..];
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(rest)
                    .filter(|found| found.start() == 0)
                    .map(|found| (found.as_str(), pattern.handler))
            });

            let (lexeme, handler) = match matched {
                Some(matched) => matched,
                None => {
                    let bad = rest.chars().next().unwrap_or('\0');
                    return Err(Error::new(
                        LexicalError::UnknownChar(bad).into(),
                        Position(pos as u32, Rc::clone(&self.file)),
                    ));
                }
            };

            let start = pos;
            pos += lexeme.len();

            // Whitespace and comments yield no token; keep scanning.
            if let Some((kind, text)) = handler(lexeme) {
                break (MK_TOKEN!(kind, text), start);
            }
        };

        self.pos = pos;
        self.token_start = token_start;
        self.current = token;
        Ok(())
    }

    /// Reports the kind of the current token without consuming it.
    pub fn current_kind(&self) -> Result<TokenKind, Error> {
        self.guard()?;
        Ok(self.current.kind)
    }

    /// Reports the spelling of the current token without consuming it.
    pub fn current_text(&self) -> Result<&str, Error> {
        self.guard()?;
        Ok(&self.current.text)
    }

    pub fn current_token(&self) -> Result<Token, Error> {
        self.guard()?;
        Ok(self.current.clone())
    }

    /// Source offset of the start of the current token.
    pub fn position(&self) -> Position {
        Position(self.token_start as u32, Rc::clone(&self.file))
    }

    fn guard(&self) -> Result<(), Error> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::new(
                LexicalError::MissingText.into(),
                Position(0, Rc::clone(&self.file)),
            ))
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

fn word_handler(lexeme: &str) -> Option<(TokenKind, String)> {
    match RESERVED_LOOKUP.get(lexeme) {
        Some(kind) => Some((*kind, String::from(lexeme))),
        None => Some((TokenKind::Identifier, String::from(lexeme))),
    }
}

fn number_handler(lexeme: &str) -> Option<(TokenKind, String)> {
    Some((TokenKind::Number, String::from(lexeme)))
}

fn skip_handler(_lexeme: &str) -> Option<(TokenKind, String)> {
    None
}
