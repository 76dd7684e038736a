//! The translator and its construct-level operations.
//!
//! One `Translator` value is one translation run: it owns the toolkit it
//! emits into, the module symbol table, and the local binding environment
//! of whichever function body is currently being translated. Nothing here
//! is shared — concurrent runs are simply independent values.

use std::collections::HashMap;

use crate::{
    ast::ast::{Function, Prototype},
    codegen::toolkit::Toolkit,
    errors::errors::{Error, TranslationError},
};

use super::expr::translate_expression;

pub struct Translator<T: Toolkit> {
    pub(crate) toolkit: T,
    /// Module symbol table: maps a function name to the most recently
    /// declared callable and its declared arity. Redefinition overwrites.
    pub(crate) functions: HashMap<String, (T::Function, usize)>,
    /// Local binding environment: parameter name to IR value, flat,
    /// rebuilt for each function body.
    pub(crate) bindings: HashMap<String, T::Value>,
}

impl<T: Toolkit> Translator<T> {
    pub fn new(toolkit: T) -> Self {
        Translator {
            toolkit,
            functions: HashMap::new(),
            bindings: HashMap::new(),
        }
    }

    /// Declares (or re-declares) the callable a prototype describes and
    /// registers it in the symbol table under its name. The toolkit
    /// removes any prior callable of the same name and invalidates its
    /// uses.
    pub fn translate_prototype(&mut self, prototype: &Prototype) -> T::Function {
        let function = self.toolkit.add_function(&prototype.name, &prototype.params);
        self.functions
            .insert(prototype.name.clone(), (function, prototype.params.len()));
        function
    }

    /// Translates a function definition: declares the prototype (which
    /// discards any previous definition of the name), opens a fresh entry
    /// block, rebinds the parameters, translates the body, and emits it as
    /// the return value. A failed body removes the partially built
    /// callable again; a successful one must pass the toolkit's
    /// consistency check.
    pub fn translate_function(&mut self, definition: &Function) -> Result<T::Function, Error> {
        let prototype = &definition.prototype;
        let function = self.translate_prototype(prototype);

        self.toolkit.append_entry_block(function);

        self.bindings.clear();
        for (index, param) in prototype.params.iter().enumerate() {
            let value = self.toolkit.get_param(function, index);
            // Duplicate parameter names collide silently; the last one
            // wins.
            self.bindings.insert(param.clone(), value);
        }

        match translate_expression(self, &definition.body) {
            Ok(value) => {
                self.toolkit.build_return(value);

                if let Err(message) = self.toolkit.verify_function(function) {
                    return Err(Error::without_position(
                        TranslationError::Inconsistent {
                            name: prototype.name.clone(),
                            message,
                        }
                        .into(),
                    ));
                }

                Ok(function)
            }
            Err(error) => {
                self.toolkit.erase_function(function);
                self.functions.remove(&prototype.name);
                Err(error)
            }
        }
    }

    /// The textual IR of everything translated so far.
    pub fn print_to_string(&self) -> String {
        self.toolkit.print_to_string()
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }
}
