//! In-tree toolkit implementation: a textual IR module.
//!
//! [`IrModule`] keeps the module as an append-only list of functions, each
//! either a bare declaration or a definition with a single entry block of
//! instructions. Printing renders the familiar LLVM-flavored text form:
//! `define double @sum(double %x)`, `fadd`/`fsub`/`fmul`, `fcmp ult` +
//! `uitofp`, `call`, `ret`, with per-function result names like `addtmp`,
//! `addtmp1`, ...
//!
//! Replacing or erasing a function tombstones its entry instead of
//! removing it, so function handles stay stable; a call whose callee was
//! tombstoned prints its callee as `undef`.

use std::collections::HashMap;

use super::toolkit::Toolkit;

/// Handle to a function: a stable index into the module's function list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionRef(usize);

/// Handle to a value. `Instr` refers to the result of the instruction at
/// the given index of the given function's entry block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef {
    Const(f64),
    Param { function: usize, index: usize },
    Instr { function: usize, index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
    Add(ValueRef, ValueRef),
    Sub(ValueRef, ValueRef),
    Mul(ValueRef, ValueRef),
    Ult(ValueRef, ValueRef),
    UiToFp(ValueRef),
    Call { callee: usize, args: Vec<ValueRef> },
    Ret(ValueRef),
}

struct FunctionData {
    name: String,
    params: Vec<String>,
    /// `None` for a declaration, `Some` once an entry block was opened.
    body: Option<Vec<Instr>>,
    erased: bool,
}

pub struct IrModule {
    name: String,
    functions: Vec<FunctionData>,
    /// Function whose entry block instructions are currently inserted
    /// into.
    insertion_point: Option<usize>,
}

impl IrModule {
    pub fn new(name: &str) -> Self {
        IrModule {
            name: String::from(name),
            functions: vec![],
            insertion_point: None,
        }
    }

    fn emit(&mut self, instr: Instr) -> ValueRef {
        let function = self
            .insertion_point
            .expect("no entry block has been opened");
        let body = self.functions[function]
            .body
            .as_mut()
            .expect("insertion point has no body");

        body.push(instr);
        ValueRef::Instr {
            function,
            index: body.len() - 1,
        }
    }

    fn check_operand(&self, function: usize, index: usize, operand: ValueRef) -> Result<(), String> {
        match operand {
            ValueRef::Const(_) => Ok(()),
            ValueRef::Param {
                function: home,
                index: param,
            } => {
                if home == function && param < self.functions[function].params.len() {
                    Ok(())
                } else {
                    Err(String::from("parameter operand from another function"))
                }
            }
            ValueRef::Instr {
                function: home,
                index: source,
            } => {
                if home == function && source < index {
                    Ok(())
                } else {
                    Err(String::from("instruction operand does not dominate its use"))
                }
            }
        }
    }

    fn render_function(&self, data: &FunctionData, out: &mut String) {
        let params = data
            .params
            .iter()
            .map(|param| format!("double %{}", param))
            .collect::<Vec<String>>()
            .join(", ");

        let body = match &data.body {
            None => {
                // Declarations print parameter types only.
                let types = vec!["double"; data.params.len()].join(", ");
                out.push_str(&format!("declare double @{}({})\n", data.name, types));
                return;
            }
            Some(body) => body,
        };

        out.push_str(&format!("define double @{}({}) {{\n", data.name, params));
        out.push_str("entry:\n");

        let names = result_names(body);
        for (index, instr) in body.iter().enumerate() {
            self.render_instr(&names, index, instr, out);
        }

        out.push_str("}\n");
    }

    fn render_instr(&self, names: &[Option<String>], index: usize, instr: &Instr, out: &mut String) {
        let value = |operand: &ValueRef| self.render_value(names, *operand);

        let line = match instr {
            Instr::Add(lhs, rhs) => format!(
                "%{} = fadd double {}, {}",
                result_name(names, index),
                value(lhs),
                value(rhs)
            ),
            Instr::Sub(lhs, rhs) => format!(
                "%{} = fsub double {}, {}",
                result_name(names, index),
                value(lhs),
                value(rhs)
            ),
            Instr::Mul(lhs, rhs) => format!(
                "%{} = fmul double {}, {}",
                result_name(names, index),
                value(lhs),
                value(rhs)
            ),
            Instr::Ult(lhs, rhs) => format!(
                "%{} = fcmp ult double {}, {}",
                result_name(names, index),
                value(lhs),
                value(rhs)
            ),
            Instr::UiToFp(operand) => format!(
                "%{} = uitofp i1 {} to double",
                result_name(names, index),
                value(operand)
            ),
            Instr::Call { callee, args } => {
                let callee_data = &self.functions[*callee];
                let callee_text = if callee_data.erased {
                    String::from("undef")
                } else {
                    format!("@{}", callee_data.name)
                };
                let args = args
                    .iter()
                    .map(|arg| format!("double {}", value(arg)))
                    .collect::<Vec<String>>()
                    .join(", ");
                format!(
                    "%{} = call double {}({})",
                    result_name(names, index),
                    callee_text,
                    args
                )
            }
            Instr::Ret(operand) => format!("ret double {}", value(operand)),
        };

        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }

    fn render_value(&self, names: &[Option<String>], value: ValueRef) -> String {
        match value {
            ValueRef::Const(constant) => format_double(constant),
            ValueRef::Param { function, index } => {
                format!("%{}", self.functions[function].params[index])
            }
            ValueRef::Instr { index, .. } => match names.get(index).and_then(|name| name.as_ref()) {
                Some(name) => format!("%{}", name),
                None => String::from("%<badref>"),
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn function_count(&self) -> usize {
        self.functions.iter().filter(|data| !data.erased).count()
    }
}

impl Toolkit for IrModule {
    type Value = ValueRef;
    type Function = FunctionRef;

    fn const_float(&mut self, value: f64) -> ValueRef {
        ValueRef::Const(value)
    }

    fn build_add(&mut self, lhs: ValueRef, rhs: ValueRef) -> ValueRef {
        self.emit(Instr::Add(lhs, rhs))
    }

    fn build_sub(&mut self, lhs: ValueRef, rhs: ValueRef) -> ValueRef {
        self.emit(Instr::Sub(lhs, rhs))
    }

    fn build_mul(&mut self, lhs: ValueRef, rhs: ValueRef) -> ValueRef {
        self.emit(Instr::Mul(lhs, rhs))
    }

    fn build_ult(&mut self, lhs: ValueRef, rhs: ValueRef) -> ValueRef {
        self.emit(Instr::Ult(lhs, rhs))
    }

    fn build_ui_to_fp(&mut self, value: ValueRef) -> ValueRef {
        self.emit(Instr::UiToFp(value))
    }

    fn add_function(&mut self, name: &str, params: &[String]) -> FunctionRef {
        // Declaring over an existing name removes the old callable; its
        // uses print as undef from now on.
        if let Some(existing) = self
            .functions
            .iter()
            .position(|data| !data.erased && data.name == name)
        {
            self.functions[existing].erased = true;
        }

        self.functions.push(FunctionData {
            name: String::from(name),
            params: params.to_vec(),
            body: None,
            erased: false,
        });
        FunctionRef(self.functions.len() - 1)
    }

    fn erase_function(&mut self, function: FunctionRef) {
        self.functions[function.0].erased = true;
    }

    fn get_param(&self, function: FunctionRef, index: usize) -> ValueRef {
        ValueRef::Param {
            function: function.0,
            index,
        }
    }

    fn append_entry_block(&mut self, function: FunctionRef) {
        self.functions[function.0].body = Some(vec![]);
        self.insertion_point = Some(function.0);
    }

    fn build_call(&mut self, callee: FunctionRef, args: &[ValueRef]) -> ValueRef {
        self.emit(Instr::Call {
            callee: callee.0,
            args: args.to_vec(),
        })
    }

    fn build_return(&mut self, value: ValueRef) {
        self.emit(Instr::Ret(value));
    }

    fn verify_function(&self, function: FunctionRef) -> Result<(), String> {
        let data = &self.functions[function.0];
        let body = match &data.body {
            Some(body) => body,
            None => return Err(String::from("function has no body")),
        };

        match body.last() {
            Some(Instr::Ret(_)) => {}
            _ => return Err(String::from("entry block is not terminated by a return")),
        }

        for (index, instr) in body.iter().enumerate() {
            if matches!(instr, Instr::Ret(_)) && index + 1 != body.len() {
                return Err(String::from("return before the end of the entry block"));
            }

            let operands = match instr {
                Instr::Add(lhs, rhs)
                | Instr::Sub(lhs, rhs)
                | Instr::Mul(lhs, rhs)
                | Instr::Ult(lhs, rhs) => vec![*lhs, *rhs],
                Instr::UiToFp(operand) | Instr::Ret(operand) => vec![*operand],
                Instr::Call { args, .. } => args.clone(),
            };
            for operand in operands {
                self.check_operand(function.0, index, operand)?;
            }

            if let Instr::Call { callee, args } = instr {
                let callee_data = &self.functions[*callee];
                if args.len() != callee_data.params.len() {
                    return Err(format!(
                        "call to @{} supplies {} arguments for {} parameters",
                        callee_data.name,
                        args.len(),
                        callee_data.params.len()
                    ));
                }
            }
        }

        Ok(())
    }

    fn print_to_string(&self) -> String {
        let mut out = format!(
            "; ModuleID = '{}'\nsource_filename = \"{}\"\n",
            self.name, self.name
        );

        for data in self.functions.iter().filter(|data| !data.erased) {
            out.push('\n');
            self.render_function(data, &mut out);
        }

        out
    }
}

/// Result name of each instruction: `addtmp`, then `addtmp1`, ... per
/// function, the way LLVM uniquifies value names. `ret` produces no value.
fn result_names(body: &[Instr]) -> Vec<Option<String>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    body.iter()
        .map(|instr| {
            let base = match instr {
                Instr::Add(..) => "addtmp",
                Instr::Sub(..) => "subtmp",
                Instr::Mul(..) => "multmp",
                Instr::Ult(..) => "cmptmp",
                Instr::UiToFp(..) => "booltmp",
                Instr::Call { .. } => "calltmp",
                Instr::Ret(..) => return None,
            };

            let count = counts.entry(base).or_insert(0);
            let name = if *count == 0 {
                String::from(base)
            } else {
                format!("{}{}", base, count)
            };
            *count += 1;
            Some(name)
        })
        .collect()
}

fn result_name(names: &[Option<String>], index: usize) -> &str {
    match names.get(index).and_then(|name| name.as_deref()) {
        Some(name) => name,
        None => "<badref>",
    }
}

/// Formats a double the way LLVM prints simple constants: six fractional
/// digits and a signed two-digit exponent, e.g. `1.000000e+00`.
pub(crate) fn format_double(value: f64) -> String {
    let formatted = format!("{:.6e}", value);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ("-", digits),
                None => ("+", exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}
