use std::fmt::Debug;

/// The code-generation toolkit contract.
///
/// The translator emits everything through this trait: constants,
/// arithmetic over the language's single numeric type, function
/// declaration and removal, calls, the entry block, returns, a
/// per-function consistency check, and the textual dump of the module.
///
/// Handles are plain copyable values. A handle stays valid for the
/// lifetime of the module; erasing or replacing a function does not
/// invalidate the handle itself, only marks every use of the old function
/// as undefined.
pub trait Toolkit {
    /// Handle to an IR value (a constant, a parameter, or an instruction
    /// result).
    type Value: Copy + Debug;
    /// Handle to a declared or defined callable.
    type Function: Copy + Debug;

    /// A floating-point constant.
    fn const_float(&mut self, value: f64) -> Self::Value;

    fn build_add(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn build_sub(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn build_mul(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;

    /// Unsigned less-than comparison; the result is a boolean value.
    fn build_ult(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    /// Converts a boolean comparison result back to the numeric type
    /// (0.0 or 1.0).
    fn build_ui_to_fp(&mut self, value: Self::Value) -> Self::Value;

    /// Declares a callable with the given ordered parameter names; all
    /// parameters and the return value have the numeric type. A prior
    /// callable of the same name is removed and its uses become undefined.
    fn add_function(&mut self, name: &str, params: &[String]) -> Self::Function;

    /// Removes a callable from the module; its uses become undefined.
    fn erase_function(&mut self, function: Self::Function);

    /// The value of the function's `index`-th formal parameter.
    fn get_param(&self, function: Self::Function, index: usize) -> Self::Value;

    /// Opens a fresh entry block on `function` and makes it the active
    /// insertion point for subsequent instructions.
    fn append_entry_block(&mut self, function: Self::Function);

    fn build_call(&mut self, callee: Self::Function, args: &[Self::Value]) -> Self::Value;

    fn build_return(&mut self, value: Self::Value);

    /// Checks the function body for internal consistency, describing the
    /// first inconsistency found.
    fn verify_function(&self, function: Self::Function) -> Result<(), String>;

    /// The textual IR of everything declared so far.
    fn print_to_string(&self) -> String;
}
