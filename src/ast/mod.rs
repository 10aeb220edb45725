/// AST (Abstract Syntax Tree) module
///
/// Submodules:
/// - ast: The `Expression`, `Statement` and `Program` sum types
/// - expressions: Payloads of the expression variants and their operators
/// - statements: Payloads of the statement variants
pub mod ast;
pub mod expressions;
pub mod statements;
