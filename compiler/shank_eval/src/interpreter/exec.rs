//! Statements and expressions.

use shank_ir::{Expr, IfStmt, Stmt, VariableRef};
use shank_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{
    assign_mismatch, condition_not_boolean, for_not_integer, index_not_integer,
    index_out_of_bounds, not_an_array, undefined_variable, EvalResult,
};
use crate::operators::{evaluate_compare, evaluate_math, evaluate_negate};
use crate::{Activation, Slot, Value};

/// Largest array an indexed store may grow to.
pub const MAX_ARRAY_LEN: usize = 1 << 24;

impl<'p> Interpreter<'p> {
    pub(super) fn exec_block(&mut self, body: &'p [Stmt], frame: &Activation) -> EvalResult<()> {
        body.iter().try_for_each(|stmt| self.exec_stmt(stmt, frame))
    }

    fn exec_stmt(&mut self, stmt: &'p Stmt, frame: &Activation) -> EvalResult<()> {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Assignment { target, value } => {
                let value = eval_expr(value, frame)?;
                assign(target, value, frame)
            }
            Stmt::If(chain) => self.exec_if(chain, frame),
            Stmt::While { condition, body } => {
                while eval_condition("While", condition, frame)? {
                    self.exec_block(body, frame)?;
                }
                Ok(())
            }
            Stmt::Repeat { body, condition } => loop {
                self.exec_block(body, frame)?;
                if eval_condition("Repeat-until", condition, frame)? {
                    break Ok(());
                }
            },
            Stmt::For {
                var,
                from,
                to,
                body,
            } => {
                let first = eval_bound("start value", from, frame)?;
                let last = eval_bound("end value", to, frame)?;
                let step = if first <= last { 1 } else { -1 };
                let mut current = first;
                loop {
                    // Rebinding each round discards writes the body made.
                    assign(var, Value::Integer(current), frame)?;
                    self.exec_block(body, frame)?;
                    if current == last {
                        break Ok(());
                    }
                    current += step;
                }
            }
            Stmt::Call(call) => self.exec_call(call, frame),
        })
    }

    fn exec_if(&mut self, chain: &'p IfStmt, frame: &Activation) -> EvalResult<()> {
        for (position, link) in chain.links().enumerate() {
            let taken = match &link.condition {
                None => true,
                Some(condition) => {
                    let construct = if position == 0 { "If" } else { "Else-if" };
                    eval_condition(construct, condition, frame)?
                }
            };
            if taken {
                tracing::trace!(branch = position, "if branch taken");
                return self.exec_block(&link.body, frame);
            }
        }
        Ok(())
    }
}

/// Evaluate an expression against the current activation.
pub(crate) fn eval_expr(expr: &Expr, frame: &Activation) -> EvalResult {
    ensure_sufficient_stack(|| match expr {
        Expr::Integer(i) => Ok(Value::Integer(*i)),
        Expr::Real(r) => Ok(Value::Real(*r)),
        Expr::Str(s) => Ok(Value::Str(s.clone())),
        Expr::Char(c) => Ok(Value::Char(*c)),
        Expr::Bool(b) => Ok(Value::Bool(*b)),
        Expr::Variable(var) => read_variable(var, frame),
        Expr::Math { op, left, right } => {
            let left = eval_expr(left, frame)?;
            let right = eval_expr(right, frame)?;
            evaluate_math(*op, left, right)
        }
        Expr::Compare { op, left, right } => {
            let left = eval_expr(left, frame)?;
            let right = eval_expr(right, frame)?;
            evaluate_compare(*op, &left, &right).map(Value::Bool)
        }
        Expr::Negate(operand) => evaluate_negate(eval_expr(operand, frame)?),
    })
}

fn eval_condition(
    construct: &'static str,
    condition: &Expr,
    frame: &Activation,
) -> EvalResult<bool> {
    match eval_expr(condition, frame)? {
        Value::Bool(b) => Ok(b),
        other => Err(condition_not_boolean(construct, other.shank_type())),
    }
}

fn eval_bound(part: &'static str, expr: &Expr, frame: &Activation) -> EvalResult<i32> {
    match eval_expr(expr, frame)? {
        Value::Integer(i) => Ok(i),
        other => Err(for_not_integer(part, other.shank_type())),
    }
}

pub(crate) fn lookup<'f>(name: &str, frame: &'f Activation) -> EvalResult<&'f Slot> {
    frame.slot(name).ok_or_else(|| undefined_variable(name))
}

/// Evaluate an array index. Range checks happen where the array is known.
pub(crate) fn eval_index(var: &VariableRef, index: &Expr, frame: &Activation) -> EvalResult<i32> {
    match eval_expr(index, frame)? {
        Value::Integer(i) => Ok(i),
        other => Err(index_not_integer(&var.name, other.shank_type())),
    }
}

/// Current value of a variable or array element.
pub(crate) fn read_variable(var: &VariableRef, frame: &Activation) -> EvalResult {
    let slot = lookup(&var.name, frame)?;
    let Some(index) = &var.index else {
        return Ok(slot.get());
    };
    let position = eval_index(var, index, frame)?;
    read_element(&var.name, slot, position)
}

pub(crate) fn read_element(name: &str, slot: &Slot, position: i32) -> EvalResult {
    match &*slot.borrow() {
        Value::Array(array) => usize::try_from(position)
            .ok()
            .and_then(|i| array.get(i))
            .cloned()
            .ok_or_else(|| index_out_of_bounds(name, position, array.items.len())),
        other => Err(not_an_array(name, other.shank_type())),
    }
}

/// Store into a variable or array element, widening integers into reals.
pub(crate) fn assign(target: &VariableRef, value: Value, frame: &Activation) -> EvalResult<()> {
    let slot = lookup(&target.name, frame)?;
    match &target.index {
        None => {
            let expected = slot.borrow().shank_type();
            let stored = value
                .coerce_to(&expected)
                .map_err(|value| assign_mismatch(&target.name, expected, value.shank_type()))?;
            slot.set(stored);
            Ok(())
        }
        Some(index) => {
            // Index first: it may read the same array.
            let position = eval_index(target, index, frame)?;
            store_element(&target.name, slot, position, value)
        }
    }
}

/// Store into `slot[position]`, growing the array with defaults when
/// `position` is past the end.
pub(crate) fn store_element(
    name: &str,
    slot: &Slot,
    position: i32,
    value: Value,
) -> EvalResult<()> {
    let mut current = slot.borrow_mut();
    let array = match &mut *current {
        Value::Array(array) => array,
        other => return Err(not_an_array(name, other.shank_type())),
    };
    let index = usize::try_from(position)
        .ok()
        .filter(|i| *i < MAX_ARRAY_LEN)
        .ok_or_else(|| index_out_of_bounds(name, position, array.items.len()))?;
    let stored = value
        .coerce_to(&array.element)
        .map_err(|value| assign_mismatch(name, array.element.clone(), value.shank_type()))?;
    array.store(index, stored);
    Ok(())
}
