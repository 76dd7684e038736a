use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ParseError},
    lexer::tokens::TokenKind,
};

use super::{lookups::token_precedence, parser::Parser};

/// Parses one primary expression, then folds in trailing binary operators
/// with precedence climbing.
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    let lhs = parse_primary(parser)?;
    parse_bin_op_rhs(parser, 0, lhs)
}

/// Dispatches on the current token kind: identifier, number literal, or a
/// parenthesized sub-expression. Any other token cannot start an
/// expression.
pub fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_kind()? {
        TokenKind::Identifier => parse_identifier_expr(parser),
        TokenKind::Number => parse_number_expr(parser),
        TokenKind::OpenParen => parse_paren_expr(parser),
        _ => Err(Error::new(
            ParseError::ExpectedExpression {
                token: parser.current_token()?.to_string(),
            }
            .into(),
            parser.position(),
        )),
    }
}

fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let text = parser.current_text()?;

    // The tokenizer accepts any `[0-9.]+` spelling; conversion is where a
    // malformed literal like `1.2.3` finally fails.
    let value = match text.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            return Err(Error::new(
                ParseError::NumberParse { token: text }.into(),
                parser.position(),
            ))
        }
    };

    parser.advance()?;
    Ok(Expr::Number(value))
}

fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?; // eat `(`
    let expression = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen, ParseError::UnclosedParen)?;
    Ok(expression)
}

/// An identifier followed immediately by `(` is a call; otherwise it is a
/// variable reference.
fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.current_text()?;
    parser.advance()?;

    if parser.current_kind()? != TokenKind::OpenParen {
        return Ok(Expr::Variable(name));
    }

    let args = parse_call_args(parser)?;
    Ok(Expr::Call { callee: name, args })
}

/// Call arguments are full expressions with no separator token between
/// them: `f(1 2)` is a two-argument call. A comma cannot start an
/// expression, so `f(1, 2)` fails on the comma.
fn parse_call_args(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.advance()?; // eat `(`

    let mut args = vec![];
    while parser.current_kind()? != TokenKind::CloseParen {
        args.push(parse_expression(parser)?);
    }

    parser.advance()?; // eat `)`
    Ok(args)
}

/// The precedence-climbing fold: operators at least as strong as
/// `expr_precedence` are consumed into `lhs`, and an operator that binds
/// tighter than the one just consumed is first absorbed into the
/// right-hand side. Equal precedence associates to the left.
fn parse_bin_op_rhs(parser: &mut Parser, expr_precedence: i32, mut lhs: Expr) -> Result<Expr, Error> {
    loop {
        let current_precedence = token_precedence(parser.current_kind()?);
        if current_precedence < expr_precedence {
            return Ok(lhs);
        }

        let operator = parser.current_kind()?;
        parser.advance()?; // eat the operator

        let mut rhs = parse_primary(parser)?;

        let next_precedence = token_precedence(parser.current_kind()?);
        if current_precedence < next_precedence {
            rhs = parse_bin_op_rhs(parser, current_precedence + 1, rhs)?;
        }

        lhs = Expr::Binary {
            operator,
            left: Box::new(lhs),
            right: Box::new(rhs),
        };
    }
}
