//! Numeric conversions, square root, and random numbers.

use super::BuiltinArgs;
use crate::errors::{integer_overflow, EvalResult};
use crate::{EvalContext, Value};

/// `squareRoot(x, var r)`.
pub(super) fn square_root(args: &mut BuiltinArgs, _ctx: &mut EvalContext) -> EvalResult<()> {
    let x = args.number(0)?;
    if x < 0.0 {
        return Err(args.fail("cannot take the square root of a negative number"));
    }
    args.set(1, Value::Real(x.sqrt()))
}

/// `integerToReal(i, var r)`.
#[expect(clippy::cast_precision_loss, reason = "widening conversion")]
pub(super) fn integer_to_real(args: &mut BuiltinArgs, _ctx: &mut EvalContext) -> EvalResult<()> {
    let i = args.integer(0)?;
    args.set(1, Value::Real(i as f32))
}

/// `realToInteger(r, var i)`: truncates toward zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "range is checked before the cast"
)]
pub(super) fn real_to_integer(args: &mut BuiltinArgs, _ctx: &mut EvalContext) -> EvalResult<()> {
    let r = args.real(0)?.trunc();
    // i32::MAX is not representable in f32; 2^31 is the first value out of range.
    if r.is_nan() || r < i32::MIN as f32 || r >= 2_147_483_648.0 {
        return Err(integer_overflow("real to integer conversion"));
    }
    args.set(1, Value::Integer(r as i32))
}

/// `getRandom(var r)`: uniform in `[0, 1)`.
pub(super) fn get_random(args: &mut BuiltinArgs, ctx: &mut EvalContext) -> EvalResult<()> {
    let r = ctx.random();
    args.set(0, Value::Real(r))
}
