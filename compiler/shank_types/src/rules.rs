//! Operator and assignment typing rules.

use shank_ir::{CompareOp, MathOp, ShankType};

/// Result type of `left op right`, `None` when the operation is undefined.
///
/// Two integers stay integer. Any other numeric mix produces real, except
/// `mod`, which is only defined on integers. Strings support `+` only.
pub fn math_result(op: MathOp, left: &ShankType, right: &ShankType) -> Option<ShankType> {
    match (left, right) {
        (ShankType::Integer, ShankType::Integer) => Some(ShankType::Integer),
        (l, r) if l.is_numeric() && r.is_numeric() => {
            (op != MathOp::Mod).then_some(ShankType::Real)
        }
        (ShankType::String, ShankType::String) => (op == MathOp::Add).then_some(ShankType::String),
        _ => None,
    }
}

/// Whether `left op right` is a valid comparison.
///
/// Operands must have the same type or be an integer/real mix. Strings,
/// booleans, and arrays only support equality.
pub fn comparable(op: CompareOp, left: &ShankType, right: &ShankType) -> bool {
    let numeric = left.is_numeric() && right.is_numeric();
    if left != right && !numeric {
        return false;
    }
    match left {
        ShankType::String | ShankType::Boolean | ShankType::Array(_) => op.is_equality(),
        ShankType::Integer | ShankType::Real | ShankType::Character => true,
    }
}

/// Whether a value of type `value` may be stored into `target`.
pub fn assignable(target: &ShankType, value: &ShankType) -> bool {
    target == value || (*target == ShankType::Real && *value == ShankType::Integer)
}

#[cfg(test)]
mod tests;
