//! Semantic analysis for Shank.
//!
//! Checks each function independently. A function's [`TypeEnv`] maps every
//! parameter, constant, and local to its declared type, and the checker
//! re-derives the type of every expression in the body against it:
//!
//! - assignments must match the target's type, except that an integer may
//!   be assigned to a real
//! - `if` / `elsif` / `while` / `until` conditions must be boolean
//! - `for` variables and bounds must be integers
//!
//! Call statements are not matched against the callee's parameters. Their
//! argument expressions are still typed, so undeclared names are caught.

mod check;
mod env;
mod error;
mod rules;

pub use check::Checker;
pub use env::TypeEnv;
pub use error::{SemanticError, SemanticErrorKind};
pub use rules::{assignable, comparable, math_result};

use shank_ir::Program;

/// Type-check every function of a program. Stops at the first error.
#[tracing::instrument(level = "debug", skip_all, fields(functions = program.len()))]
pub fn analyze(program: &Program) -> Result<(), SemanticError> {
    for function in program.functions() {
        check::check_function(function)?;
    }
    tracing::debug!("semantic analysis complete");
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
