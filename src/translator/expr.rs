use crate::{
    ast::ast::Expr,
    codegen::toolkit::Toolkit,
    errors::errors::{Error, TranslationError},
    lexer::tokens::TokenKind,
};

use super::translator::Translator;

/// Translates one expression tree into toolkit calls, bottom-up. Operands
/// and arguments are translated before anything is emitted for the node
/// itself, so a failing subtree aborts with nothing half-built.
pub fn translate_expression<T: Toolkit>(
    translator: &mut Translator<T>,
    expression: &Expr,
) -> Result<T::Value, Error> {
    match expression {
        Expr::Number(value) => Ok(translator.toolkit.const_float(*value)),

        // Bindings only ever hold the enclosing function's parameters, so
        // any other name is undefined here.
        Expr::Variable(name) => match translator.bindings.get(name) {
            Some(value) => Ok(*value),
            None => Err(translation_error(TranslationError::UndefinedVariable {
                name: name.clone(),
            })),
        },

        Expr::Binary {
            operator,
            left,
            right,
        } => {
            let lhs = translate_expression(translator, left)?;
            let rhs = translate_expression(translator, right)?;

            match operator {
                TokenKind::Plus => Ok(translator.toolkit.build_add(lhs, rhs)),
                TokenKind::Minus => Ok(translator.toolkit.build_sub(lhs, rhs)),
                TokenKind::Star => Ok(translator.toolkit.build_mul(lhs, rhs)),
                TokenKind::Less => {
                    // The comparison yields a boolean; convert it back to
                    // 0.0 / 1.0 in the numeric type.
                    let compared = translator.toolkit.build_ult(lhs, rhs);
                    Ok(translator.toolkit.build_ui_to_fp(compared))
                }
                other => Err(translation_error(TranslationError::UnknownOperator {
                    operator: other.to_string(),
                })),
            }
        }

        Expr::Call { callee, args } => {
            let (function, arity) = match translator.functions.get(callee) {
                Some(entry) => *entry,
                None => {
                    return Err(translation_error(TranslationError::UnknownFunction {
                        name: callee.clone(),
                    }))
                }
            };

            if args.len() != arity {
                return Err(translation_error(TranslationError::ArgumentCount {
                    expected: arity,
                    received: args.len(),
                }));
            }

            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(translate_expression(translator, arg)?);
            }

            Ok(translator.toolkit.build_call(function, &values))
        }
    }
}

fn translation_error(kind: TranslationError) -> Error {
    Error::without_position(kind.into())
}
