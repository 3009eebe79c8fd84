//! Shank Eval - the interpreter and built-in library.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values, one variant per Shank type
//! - [`Slot`] / [`Activation`]: variable storage; `var` arguments share a
//!   caller's slot, everything else is copied
//! - [`evaluate_math`] / [`evaluate_compare`]: operator semantics
//! - [`FunctionRegistry`]: built-ins and user functions by folded name
//! - [`EvalContext`]: output handler, input source, and random source
//! - [`Interpreter`]: walks the AST from `main`

mod builtins;
mod context;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod registry;
mod value;

pub use builtins::{BuiltinArgs, BuiltinFunction, BuiltinParam, BUILTINS};
pub use context::{EvalContext, EvalContextBuilder, InputSource};
pub use environment::{Activation, Slot};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{interpret, Interpreter, MAX_ARRAY_LEN, MAX_CALL_DEPTH};
pub use operators::{evaluate_compare, evaluate_math, evaluate_negate};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use registry::{Callable, FunctionRegistry};
pub use value::{ArrayValue, Value};
