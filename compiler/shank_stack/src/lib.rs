//! Stack growth for the recursive stages of the Shank pipeline.
//!
//! The parser, the semantic analyzer and the interpreter all recurse on the
//! shape of the program: nested parentheses, nested `if`/`while` blocks, and
//! user functions calling themselves. A recursive Shank program such as a
//! naive factorial drives interpreter recursion directly, so the host stack
//! has to grow with it.
//!
//! On native targets [`ensure_sufficient_stack`] grows the stack through
//! `stacker` when less than [`RED_ZONE`] bytes remain. On `wasm32` it calls
//! the closure directly.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn eval_expr(&mut self, expr: &Expr) -> Result<Value, EvalError> {
///     ensure_sufficient_stack(|| match expr { /* recurse */ })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
