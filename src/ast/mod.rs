/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// The node set is closed: expressions are a single enum with exclusively
/// owned (boxed) children, and prototypes and function definitions are
/// plain structs on top of it. Equality is structural throughout.
pub mod ast;
