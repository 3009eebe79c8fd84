//! Arithmetic, comparison, and negation.
//!
//! Integer arithmetic is checked. Mixing an integer with a real promotes
//! the integer. Strings support `+` and equality; booleans and arrays
//! support equality only.

use std::cmp::Ordering;

use shank_ir::{CompareOp, MathOp};

use crate::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, negate_mismatch, operand_mismatch,
    EvalResult,
};
use crate::Value;

#[inline]
fn checked(result: Option<i32>, operation: &'static str) -> EvalResult {
    result.map(Value::Integer).ok_or_else(|| integer_overflow(operation))
}

fn eval_int_math(a: i32, b: i32, op: MathOp) -> EvalResult {
    match op {
        MathOp::Add => checked(a.checked_add(b), "addition"),
        MathOp::Sub => checked(a.checked_sub(b), "subtraction"),
        MathOp::Mul => checked(a.checked_mul(b), "multiplication"),
        MathOp::Div if b == 0 => Err(division_by_zero()),
        MathOp::Div => checked(a.checked_div(b), "division"),
        MathOp::Mod if b == 0 => Err(modulo_by_zero()),
        MathOp::Mod => checked(a.checked_rem(b), "modulo"),
    }
}

/// `None` for `mod`, which reals do not support.
fn eval_real_math(a: f32, b: f32, op: MathOp) -> Option<EvalResult> {
    let value = match op {
        MathOp::Add => a + b,
        MathOp::Sub => a - b,
        MathOp::Mul => a * b,
        MathOp::Div if b == 0.0 => return Some(Err(division_by_zero())),
        MathOp::Div => a / b,
        MathOp::Mod => return None,
    };
    Some(Ok(Value::Real(value)))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integer operands are widened when mixed with reals"
)]
fn widen(i: i32) -> f32 {
    i as f32
}

/// Apply a math operator.
pub fn evaluate_math(op: MathOp, left: Value, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_int_math(a, b, op),
        (Value::Str(mut a), Value::Str(b)) if op == MathOp::Add => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (left, right) => {
            let real = match (&left, &right) {
                (Value::Real(a), Value::Real(b)) => eval_real_math(*a, *b, op),
                (Value::Integer(a), Value::Real(b)) => eval_real_math(widen(*a), *b, op),
                (Value::Real(a), Value::Integer(b)) => eval_real_math(*a, widen(*b), op),
                _ => None,
            };
            real.unwrap_or_else(|| {
                Err(operand_mismatch(
                    op.as_symbol(),
                    left.shank_type(),
                    right.shank_type(),
                ))
            })
        }
    }
}

fn holds(op: CompareOp, ordering: Ordering) -> bool {
    match op {
        CompareOp::Less => ordering.is_lt(),
        CompareOp::Greater => ordering.is_gt(),
        CompareOp::LessEqual => ordering.is_le(),
        CompareOp::GreaterEqual => ordering.is_ge(),
        CompareOp::Equal => ordering.is_eq(),
        CompareOp::NotEqual => ordering.is_ne(),
    }
}

/// Apply a comparison operator.
pub fn evaluate_compare(op: CompareOp, left: &Value, right: &Value) -> EvalResult<bool> {
    let ordering = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
        (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
        (Value::Integer(a), Value::Real(b)) => widen(*a).partial_cmp(b),
        (Value::Real(a), Value::Integer(b)) => a.partial_cmp(&widen(*b)),
        (Value::Str(_), Value::Str(_))
        | (Value::Bool(_), Value::Bool(_))
        | (Value::Array(_), Value::Array(_))
            if op.is_equality() && left.shank_type() == right.shank_type() =>
        {
            let equal = left == right;
            return Ok(if op == CompareOp::Equal { equal } else { !equal });
        }
        _ => {
            return Err(operand_mismatch(
                op.as_symbol(),
                left.shank_type(),
                right.shank_type(),
            ))
        }
    };
    // Unordered reals (NaN) are only unequal.
    Ok(ordering.map_or(op == CompareOp::NotEqual, |ordering| holds(op, ordering)))
}

/// Unary minus.
pub fn evaluate_negate(operand: Value) -> EvalResult {
    match operand {
        Value::Integer(i) => checked(i.checked_neg(), "negation"),
        Value::Real(r) => Ok(Value::Real(-r)),
        other => Err(negate_mismatch(other.shank_type())),
    }
}
