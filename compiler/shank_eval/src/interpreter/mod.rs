//! Tree-walking interpreter.
//!
//! Runs an analyzed [`Program`] starting from `main`. Each user-function
//! call gets a fresh [`Activation`](crate::Activation); statements inside
//! the body all read and write that one activation.

mod call;
mod exec;

pub use exec::MAX_ARRAY_LEN;

use shank_ir::{Function, Program};
use shank_stack::ensure_sufficient_stack;

use crate::errors::{call_depth_exceeded, main_has_parameters, missing_main, EvalResult};
use crate::{Activation, EvalContext, FunctionRegistry, Slot, Value};

/// Deepest chain of nested user-function calls before the run is aborted.
pub const MAX_CALL_DEPTH: usize = 10_000;

pub struct Interpreter<'p> {
    program: &'p Program,
    registry: FunctionRegistry<'p>,
    ctx: EvalContext,
    depth: usize,
}

impl<'p> Interpreter<'p> {
    pub fn new(program: &'p Program, ctx: EvalContext) -> Self {
        Interpreter {
            program,
            registry: FunctionRegistry::new(program),
            ctx,
            depth: 0,
        }
    }

    /// Run `main`. It must exist and take no parameters.
    #[tracing::instrument(level = "debug", skip_all, fields(functions = self.program.len()))]
    pub fn interpret(&mut self) -> EvalResult<()> {
        let main = self.program.get("main").ok_or_else(missing_main)?;
        if !main.params.is_empty() {
            return Err(main_has_parameters().in_function(&main.name));
        }
        self.call_user(main, Vec::new())?;
        tracing::debug!("program finished");
        Ok(())
    }

    /// Run a user function with already-built parameter slots.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(function = %function.name, depth = self.depth)
    )]
    fn call_user(&mut self, function: &'p Function, params: Vec<Slot>) -> EvalResult<()> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(call_depth_exceeded(MAX_CALL_DEPTH).in_function(&function.name));
        }

        let mut frame = Activation::new(function.name.as_str());
        for (param, slot) in function.params.iter().zip(params) {
            frame.bind(&param.name, slot);
        }
        for constant in &function.constants {
            let value = constant
                .initializer
                .as_ref()
                .and_then(Value::from_literal)
                .unwrap_or_else(|| Value::default_for(&constant.ty));
            frame.declare(&constant.name, value);
        }
        for local in &function.locals {
            frame.declare(&local.name, Value::default_for(&local.ty));
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.exec_block(&function.body, &frame));
        self.depth -= 1;
        result.map_err(|err| err.in_function(&function.name))
    }
}

/// Interpret `program` with `ctx`.
pub fn interpret(program: &Program, ctx: EvalContext) -> EvalResult<()> {
    Interpreter::new(program, ctx).interpret()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
