//! Shank IR - the data model shared by every pipeline stage.
//!
//! - [`Token`] / [`TokenKind`]: lexer output, one token per lexeme plus the
//!   layout tokens `ENDOFLINE`, `INDENT` and `DEDENT`
//! - [`ShankType`]: declared types of parameters, constants, and variables
//! - [`ast`]: the tree built by the parser, checked by the analyzer, and
//!   walked by the interpreter
//!
//! Every AST node owns its children. Names keep the spelling used in the
//! source; all lookups are case-insensitive and go through [`fold_name`].

pub mod ast;
mod token;
mod ty;

pub use ast::{
    Argument, CompareOp, Expr, Function, FunctionCall, IfStmt, MathOp, Program, RangeConstraint,
    Stmt, VariableDecl, VariableRef,
};
pub use token::{Token, TokenKind};
pub use ty::ShankType;

/// Normalize an identifier for case-insensitive lookup.
#[inline]
pub fn fold_name(name: &str) -> String {
    name.to_ascii_lowercase()
}
