//! The driving loop of the pipeline.
//!
//! The interpreter repeatedly looks at the current token, parses one
//! top-level construct, and hands it to the translator: `def` becomes a
//! function definition, `extern` a declaration, a bare expression an
//! anonymous zero-parameter function, and top-level semicolons are
//! skipped. When end of input is reached, the translated module is
//! printed.

use crate::{
    codegen::{ir::IrModule, toolkit::Toolkit},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{
        parser::Parser,
        stmt::{parse_definition, parse_extern, parse_top_level_expr},
    },
    translator::translator::Translator,
};

pub struct Interpreter<T: Toolkit> {
    parser: Parser,
    translator: Translator<T>,
}

impl Interpreter<IrModule> {
    /// An interpreter over the in-tree textual IR toolkit. The module is
    /// named after the source file.
    pub fn from_source(source: String, file: Option<String>) -> Result<Self, Error> {
        let module_name = file.clone().unwrap_or_else(|| String::from("main"));
        Ok(Interpreter::new(
            Parser::new(source, file)?,
            Translator::new(IrModule::new(&module_name)),
        ))
    }
}

impl<T: Toolkit> Interpreter<T> {
    pub fn new(parser: Parser, translator: Translator<T>) -> Self {
        Interpreter { parser, translator }
    }

    /// Translates every top-level construct in order and returns the
    /// textual IR of the finished module. The first error aborts the whole
    /// run; translation errors are stamped with the offset the construct
    /// started at.
    pub fn run(&mut self) -> Result<String, Error> {
        loop {
            let start = self.parser.position();

            match self.parser.current_kind()? {
                TokenKind::Eof => break,

                // ignore top-level semicolons
                TokenKind::Semicolon => self.parser.advance()?,

                TokenKind::Def => {
                    let definition = parse_definition(&mut self.parser)?;
                    self.translator
                        .translate_function(&definition)
                        .map_err(|error| error.or_position(start.clone()))?;
                }

                TokenKind::Extern => {
                    let prototype = parse_extern(&mut self.parser)?;
                    self.translator.translate_prototype(&prototype);
                }

                _ => {
                    let expression = parse_top_level_expr(&mut self.parser)?;
                    self.translator
                        .translate_function(&expression)
                        .map_err(|error| error.or_position(start.clone()))?;
                }
            }
        }

        Ok(self.translator.print_to_string())
    }
}
