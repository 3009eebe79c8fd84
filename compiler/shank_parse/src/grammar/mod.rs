//! Grammar productions, one module per syntactic area.

mod expr;
mod function;
mod stmt;
mod ty;
