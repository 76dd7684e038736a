use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// An error raised somewhere in the pipeline, with the source offset it was
/// raised at when one is known. Translation errors carry no position of
/// their own (syntax nodes are positionless); the driver stamps them with
/// the start of the construct being translated.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    position: Option<Position>,
}

impl Error {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Error {
            kind,
            position: Some(position),
        }
    }

    pub fn without_position(kind: ErrorKind) -> Self {
        Error {
            kind,
            position: None,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// Fills in `position` if the error does not already carry one.
    pub fn or_position(mut self, position: Position) -> Self {
        if self.position.is_none() {
            self.position = Some(position);
        }
        self
    }

    pub fn name(&self) -> &'static str {
        match &self.kind {
            ErrorKind::Lexical(_) => "LexicalError",
            ErrorKind::Parse(_) => "ParseError",
            ErrorKind::Translation(_) => "TranslationError",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Error {}

/// The three failure classes of the pipeline. Each aborts the whole
/// translation unit; nothing is retried or resynchronized.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[error("unknown character {0:?} in input stream")]
    UnknownChar(char),
    #[error("text to translate not found")]
    MissingText,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("identifier not found while parsing a prototype")]
    PrototypeName,
    #[error("`(` not found while parsing a prototype")]
    PrototypeOpenParen,
    #[error("`)` not found while parsing a prototype")]
    PrototypeCloseParen,
    #[error("`)` not found after a parenthesized expression")]
    UnclosedParen,
    #[error("unexpected {token} when expecting an expression")]
    ExpectedExpression { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParse { token: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    #[error("undefined reference to {name:?}")]
    UndefinedVariable { name: String },
    #[error("unknown function {name:?} referenced")]
    UnknownFunction { name: String },
    #[error("incorrect argument count: expected {expected}, received {received}")]
    ArgumentCount { expected: usize, received: usize },
    #[error("unknown operator {operator} in binary expression")]
    UnknownOperator { operator: String },
    #[error("function {name:?} failed the consistency check: {message}")]
    Inconsistent { name: String, message: String },
}
