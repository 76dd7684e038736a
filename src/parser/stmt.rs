use crate::{
    ast::ast::{Function, Prototype},
    errors::errors::{Error, ParseError},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, parser::Parser};

/// Name of the zero-parameter function a bare top-level expression is
/// wrapped into.
pub const ANONYMOUS_FUNCTION_NAME: &str = "__anon_expr";

/// Parses `identifier '(' identifier* ')'`. Parameters are
/// whitespace-delimited — there is no separator token, and a comma between
/// parameters fails on the closing-parenthesis check.
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    if parser.current_kind()? != TokenKind::Identifier {
        return Err(Error::new(
            ParseError::PrototypeName.into(),
            parser.position(),
        ));
    }
    let name = parser.current_text()?;
    parser.advance()?;

    parser.expect(TokenKind::OpenParen, ParseError::PrototypeOpenParen)?;

    let mut params = vec![];
    while parser.current_kind()? == TokenKind::Identifier {
        params.push(parser.current_text()?);
        parser.advance()?;
    }

    parser.expect(TokenKind::CloseParen, ParseError::PrototypeCloseParen)?;

    Ok(Prototype::new(name, params))
}

/// Parses `'extern' prototype`.
pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.advance()?; // eat `extern`
    parse_prototype(parser)
}

/// Parses `'def' prototype expression`.
pub fn parse_definition(parser: &mut Parser) -> Result<Function, Error> {
    parser.advance()?; // eat `def`
    let prototype = parse_prototype(parser)?;
    let body = parse_expression(parser)?;
    Ok(Function::new(prototype, body))
}

/// Parses one bare expression and wraps it in a synthetic zero-parameter
/// prototype, which is how top-level expressions are evaluated without an
/// explicit `def`.
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<Function, Error> {
    let body = parse_expression(parser)?;
    let prototype = Prototype::new(String::from(ANONYMOUS_FUNCTION_NAME), vec![]);
    Ok(Function::new(prototype, body))
}
