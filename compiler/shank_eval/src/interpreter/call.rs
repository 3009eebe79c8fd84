//! Call statements.
//!
//! Argument construction decides, per argument, between sharing the
//! caller's slot and handing the callee a copy:
//!
//! | call site | callee parameter | callee receives |
//! |---|---|---|
//! | `var x` | `var` (or variadic built-in) | the caller's slot for `x` |
//! | `var a[i]` | `var` | a copy, stored back into `a[i]` after the call |
//! | `var x` | value | a copy |
//! | expression | any | a copy |

use shank_ir::{Argument, Function, FunctionCall};

use super::exec::{eval_expr, eval_index, lookup, read_element, read_variable, store_element};
use super::Interpreter;
use crate::builtins::{BuiltinArgs, BuiltinFunction};
use crate::errors::{argument_mismatch, unknown_function, wrong_arg_count, EvalResult};
use crate::{Activation, Callable, Slot};

/// One evaluated call argument.
#[derive(Debug)]
pub(crate) struct CallArgument<'c> {
    pub slot: Slot,
    /// Written `var` at the call site.
    pub by_ref: bool,
    /// `slot` is the caller's own storage.
    pub shared: bool,
    /// Array element to update once the call returns.
    pub element: Option<(&'c str, i32)>,
}

impl<'p> Interpreter<'p> {
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(caller = frame.function(), callee = %call.name, line = call.line)
    )]
    pub(super) fn exec_call(&mut self, call: &FunctionCall, frame: &Activation) -> EvalResult<()> {
        let callee = self
            .registry
            .lookup(&call.name)
            .ok_or_else(|| unknown_function(&call.name))?;
        if !callee.is_variadic() && callee.arity() != call.args.len() {
            return Err(wrong_arg_count(
                callee.name(),
                callee.arity(),
                call.args.len(),
            ));
        }

        let args = build_arguments(&callee, &call.args, frame)?;
        match callee {
            Callable::User(function) => {
                let params = bind_parameters(function, &args)?;
                self.call_user(function, params)?;
            }
            Callable::Builtin(builtin) => self.call_builtin(builtin, &args)?,
        }

        for arg in &args {
            if let Some((name, position)) = arg.element {
                store_element(name, lookup(name, frame)?, position, arg.slot.get())?;
            }
        }
        Ok(())
    }

    /// Built-ins work on plain values; results are copied back into the
    /// argument slots, which reach the caller through shared slots.
    fn call_builtin(
        &mut self,
        builtin: &'static BuiltinFunction,
        args: &[CallArgument<'_>],
    ) -> EvalResult<()> {
        let values = args.iter().map(|arg| arg.slot.get()).collect();
        let by_ref = args.iter().map(|arg| arg.by_ref).collect();
        let mut builtin_args = BuiltinArgs::new(builtin.name, values, by_ref);
        (builtin.exec)(&mut builtin_args, &mut self.ctx)?;
        for (arg, value) in args.iter().zip(builtin_args.into_values()) {
            arg.slot.set(value);
        }
        Ok(())
    }
}

/// Evaluate call arguments left to right, sharing or copying slots.
pub(crate) fn build_arguments<'c>(
    callee: &Callable<'_>,
    args: &'c [Argument],
    frame: &Activation,
) -> EvalResult<Vec<CallArgument<'c>>> {
    args.iter()
        .enumerate()
        .map(|(position, arg)| match arg {
            Argument::Var(var) if callee.param_is_var(position) => match &var.index {
                None => Ok(CallArgument {
                    slot: lookup(&var.name, frame)?.alias(),
                    by_ref: true,
                    shared: true,
                    element: None,
                }),
                Some(index) => {
                    let element = eval_index(var, index, frame)?;
                    let value = read_element(&var.name, lookup(&var.name, frame)?, element)?;
                    Ok(CallArgument {
                        slot: Slot::new(value),
                        by_ref: true,
                        shared: false,
                        element: Some((var.name.as_str(), element)),
                    })
                }
            },
            Argument::Var(var) => Ok(CallArgument {
                slot: Slot::new(read_variable(var, frame)?),
                by_ref: true,
                shared: false,
                element: None,
            }),
            Argument::Value(expr) => Ok(CallArgument {
                slot: Slot::new(eval_expr(expr, frame)?),
                by_ref: false,
                shared: false,
                element: None,
            }),
        })
        .collect()
}

/// Check argument kinds against the callee's parameters and produce the
/// slots it binds. Copies widen integers into real parameters; shared
/// slots must already match.
fn bind_parameters(function: &Function, args: &[CallArgument<'_>]) -> EvalResult<Vec<Slot>> {
    function
        .params
        .iter()
        .zip(args)
        .enumerate()
        .map(|(position, (param, arg))| {
            let mismatch = |found| {
                argument_mismatch(&function.name, position + 1, param.ty.clone(), found)
            };
            if arg.shared {
                let current = arg.slot.borrow();
                return if current.conforms_to(&param.ty) {
                    Ok(arg.slot.alias())
                } else {
                    Err(mismatch(current.shank_type()))
                };
            }
            let coerced = arg
                .slot
                .get()
                .coerce_to(&param.ty)
                .map_err(|value| mismatch(value.shank_type()))?;
            arg.slot.set(coerced);
            Ok(arg.slot.alias())
        })
        .collect()
}
