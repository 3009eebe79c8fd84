//! The built-in library.
//!
//! Built-ins return results through `var` parameters like user functions
//! do. Each one validates its own arguments and reports failures under its
//! own name.

mod console;
mod numeric;
mod strings;

use shank_ir::ShankType;

use crate::errors::{builtin_argument, EvalResult};
use crate::{EvalContext, Value};

pub type BuiltinFn = fn(&mut BuiltinArgs, &mut EvalContext) -> EvalResult<()>;

/// A declared built-in parameter.
#[derive(Copy, Clone, Debug)]
pub struct BuiltinParam {
    pub name: &'static str,
    pub is_var: bool,
}

const fn value(name: &'static str) -> BuiltinParam {
    BuiltinParam {
        name,
        is_var: false,
    }
}

const fn var(name: &'static str) -> BuiltinParam {
    BuiltinParam { name, is_var: true }
}

pub struct BuiltinFunction {
    pub name: &'static str,
    /// Empty for variadic built-ins.
    pub params: &'static [BuiltinParam],
    pub variadic: bool,
    pub exec: BuiltinFn,
}

impl std::fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("variadic", &self.variadic)
            .finish_non_exhaustive()
    }
}

pub static BUILTINS: [BuiltinFunction; 11] = [
    BuiltinFunction {
        name: "write",
        params: &[],
        variadic: true,
        exec: console::write,
    },
    BuiltinFunction {
        name: "read",
        params: &[],
        variadic: true,
        exec: console::read,
    },
    BuiltinFunction {
        name: "left",
        params: &[value("someString"), value("length"), var("resultString")],
        variadic: false,
        exec: strings::left,
    },
    BuiltinFunction {
        name: "right",
        params: &[value("someString"), value("length"), var("resultString")],
        variadic: false,
        exec: strings::right,
    },
    BuiltinFunction {
        name: "substring",
        params: &[
            value("someString"),
            value("index"),
            value("length"),
            var("resultString"),
        ],
        variadic: false,
        exec: strings::substring,
    },
    BuiltinFunction {
        name: "start",
        params: &[value("someString"), var("index")],
        variadic: false,
        exec: strings::start,
    },
    BuiltinFunction {
        name: "end",
        params: &[value("someString"), var("index")],
        variadic: false,
        exec: strings::end,
    },
    BuiltinFunction {
        name: "squareRoot",
        params: &[value("value"), var("result")],
        variadic: false,
        exec: numeric::square_root,
    },
    BuiltinFunction {
        name: "integerToReal",
        params: &[value("someInteger"), var("result")],
        variadic: false,
        exec: numeric::integer_to_real,
    },
    BuiltinFunction {
        name: "realToInteger",
        params: &[value("someReal"), var("result")],
        variadic: false,
        exec: numeric::real_to_integer,
    },
    BuiltinFunction {
        name: "getRandom",
        params: &[var("result")],
        variadic: false,
        exec: numeric::get_random,
    },
];

/// Look up a built-in, ignoring case.
#[cfg(test)]
pub(crate) fn builtin(name: &str) -> Option<&'static BuiltinFunction> {
    BUILTINS
        .iter()
        .find(|builtin| builtin.name.eq_ignore_ascii_case(name))
}

/// Argument values of one built-in call.
///
/// Values are written back into the caller's argument slots after the
/// built-in returns.
#[derive(Debug)]
pub struct BuiltinArgs {
    function: &'static str,
    values: Vec<Value>,
    by_ref: Vec<bool>,
}

impl BuiltinArgs {
    /// `by_ref[i]` says whether argument `i` was written `var` at the call.
    pub fn new(function: &'static str, values: Vec<Value>, by_ref: Vec<bool>) -> Self {
        BuiltinArgs {
            function,
            values,
            by_ref,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn is_by_ref(&self, position: usize) -> bool {
        self.by_ref.get(position).copied().unwrap_or(false)
    }

    fn get(&self, position: usize) -> EvalResult<&Value> {
        self.values
            .get(position)
            .ok_or_else(|| self.fail(format!("missing argument {}", position + 1)))
    }

    fn expected(&self, position: usize, what: &str, found: &Value) -> crate::EvalError {
        self.fail(format!(
            "argument {} must be {what}, but got {}",
            position + 1,
            found.shank_type()
        ))
    }

    pub fn fail(&self, message: impl Into<String>) -> crate::EvalError {
        builtin_argument(self.function, message)
    }

    pub fn string(&self, position: usize) -> EvalResult<&str> {
        match self.get(position)? {
            Value::Str(s) => Ok(s),
            other => Err(self.expected(position, "a string", other)),
        }
    }

    pub fn integer(&self, position: usize) -> EvalResult<i32> {
        match self.get(position)? {
            Value::Integer(i) => Ok(*i),
            other => Err(self.expected(position, "an integer", other)),
        }
    }

    pub fn real(&self, position: usize) -> EvalResult<f32> {
        match self.get(position)? {
            Value::Real(r) => Ok(*r),
            other => Err(self.expected(position, "a real", other)),
        }
    }

    /// An integer or a real, as a real.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer arguments widen to real"
    )]
    pub fn number(&self, position: usize) -> EvalResult<f32> {
        match self.get(position)? {
            Value::Integer(i) => Ok(*i as f32),
            Value::Real(r) => Ok(*r),
            other => Err(self.expected(position, "a number", other)),
        }
    }

    /// Store a result. The argument keeps its kind; an integer result may
    /// land in a real.
    pub fn set(&mut self, position: usize, result: Value) -> EvalResult<()> {
        let target: ShankType = self.get(position)?.shank_type();
        let stored = result.coerce_to(&target).map_err(|result| {
            self.fail(format!(
                "argument {} must be a {} variable, but got {}",
                position + 1,
                result.shank_type(),
                target
            ))
        })?;
        if let Some(slot) = self.values.get_mut(position) {
            *slot = stored;
        }
        Ok(())
    }
}
