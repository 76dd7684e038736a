//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorKind, LexicalError, ParseError, TranslationError};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        LexicalError::UnknownChar('@').into(),
        Position(10, Rc::new("test.ks".to_string())),
    );

    assert_eq!(error.name(), "LexicalError");
    assert_eq!(error.to_string(), "unknown character '@' in input stream");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.ks".to_string()));
    let error = Error::new(
        ParseError::ExpectedExpression {
            token: "`,`".to_string(),
        }
        .into(),
        pos.clone(),
    );

    assert_eq!(error.position().unwrap().0, 42);
}

#[test]
fn test_error_without_position() {
    let error = Error::without_position(
        TranslationError::UndefinedVariable {
            name: "y".to_string(),
        }
        .into(),
    );

    assert!(error.position().is_none());

    let stamped = error.or_position(Position(7, Rc::new("test.ks".to_string())));
    assert_eq!(stamped.position().unwrap().0, 7);
}

#[test]
fn test_or_position_keeps_existing() {
    let error = Error::new(
        LexicalError::MissingText.into(),
        Position(3, Rc::new("test.ks".to_string())),
    );

    let stamped = error.or_position(Position(99, Rc::new("other.ks".to_string())));
    assert_eq!(stamped.position().unwrap().0, 3);
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        ParseError::PrototypeName.to_string(),
        "identifier not found while parsing a prototype"
    );
    assert_eq!(
        ParseError::NumberParse {
            token: "1.2.3".to_string()
        }
        .to_string(),
        "error parsing number: \"1.2.3\""
    );
}

#[test]
fn test_translation_error_messages() {
    assert_eq!(
        TranslationError::UnknownFunction {
            name: "bar".to_string()
        }
        .to_string(),
        "unknown function \"bar\" referenced"
    );
    assert_eq!(
        TranslationError::ArgumentCount {
            expected: 1,
            received: 2
        }
        .to_string(),
        "incorrect argument count: expected 1, received 2"
    );
}

#[test]
fn test_error_kind_discrimination() {
    let error = Error::without_position(
        TranslationError::UnknownOperator {
            operator: "`/`".to_string(),
        }
        .into(),
    );

    assert!(matches!(error.kind(), ErrorKind::Translation(_)));
    assert_eq!(error.name(), "TranslationError");
}

#[test]
fn test_transparent_display() {
    let kind: ErrorKind = LexicalError::UnknownChar('=').into();
    assert_eq!(kind.to_string(), "unknown character '=' in input stream");
}
