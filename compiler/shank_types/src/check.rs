//! Function body checking.

use shank_ir::{Argument, Expr, Function, IfStmt, ShankType, Stmt, VariableRef};
use shank_stack::ensure_sufficient_stack;

use crate::rules::{assignable, comparable, math_result};
use crate::{SemanticError, SemanticErrorKind, TypeEnv};

type CheckResult<T = ()> = Result<T, SemanticErrorKind>;

#[tracing::instrument(level = "trace", skip_all, fields(function = %function.name))]
pub(crate) fn check_function(function: &Function) -> Result<(), SemanticError> {
    let checker = Checker::new(TypeEnv::for_function(function));
    checker
        .check_block(&function.body)
        .map_err(|kind| kind.in_function(&function.name))
}

/// Checks statements and derives expression types against a [`TypeEnv`].
pub struct Checker {
    env: TypeEnv,
}

impl Checker {
    pub fn new(env: TypeEnv) -> Self {
        Checker { env }
    }

    pub fn check_block(&self, body: &[Stmt]) -> CheckResult {
        body.iter().try_for_each(|stmt| self.check_stmt(stmt))
    }

    pub fn check_stmt(&self, stmt: &Stmt) -> CheckResult {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Assignment { target, value } => {
                let expected = self.variable_type(target)?;
                let found = self.expr_type(value)?;
                if assignable(&expected, &found) {
                    Ok(())
                } else {
                    Err(SemanticErrorKind::AssignmentMismatch {
                        target: target.name.clone(),
                        expected,
                        found,
                    })
                }
            }
            Stmt::If(chain) => self.check_if(chain),
            Stmt::While { condition, body } => {
                self.check_condition("While", condition)?;
                self.check_block(body)
            }
            Stmt::Repeat { body, condition } => {
                self.check_block(body)?;
                self.check_condition("Repeat-until", condition)
            }
            Stmt::For {
                var,
                from,
                to,
                body,
            } => {
                let found = self.variable_type(var)?;
                if found != ShankType::Integer {
                    return Err(SemanticErrorKind::ForVariable {
                        name: var.name.clone(),
                        found,
                    });
                }
                self.check_bound("start", from)?;
                self.check_bound("end", to)?;
                self.check_block(body)
            }
            Stmt::Call(call) => {
                for arg in &call.args {
                    match arg {
                        Argument::Value(expr) => {
                            self.expr_type(expr)?;
                        }
                        Argument::Var(var) => {
                            self.variable_type(var)?;
                        }
                    }
                }
                Ok(())
            }
        })
    }

    fn check_if(&self, chain: &IfStmt) -> CheckResult {
        for (position, link) in chain.links().enumerate() {
            if let Some(condition) = &link.condition {
                let construct = if position == 0 { "If" } else { "Else-if" };
                self.check_condition(construct, condition)?;
            }
            self.check_block(&link.body)?;
        }
        Ok(())
    }

    fn check_condition(&self, construct: &'static str, condition: &Expr) -> CheckResult {
        let found = self.expr_type(condition)?;
        if found == ShankType::Boolean {
            Ok(())
        } else {
            Err(SemanticErrorKind::ConditionNotBoolean { construct, found })
        }
    }

    fn check_bound(&self, bound: &'static str, expr: &Expr) -> CheckResult {
        let found = self.expr_type(expr)?;
        if found == ShankType::Integer {
            Ok(())
        } else {
            Err(SemanticErrorKind::ForBound { bound, found })
        }
    }

    /// Derive the static type of an expression.
    pub fn expr_type(&self, expr: &Expr) -> CheckResult<ShankType> {
        ensure_sufficient_stack(|| match expr {
            Expr::Integer(_) => Ok(ShankType::Integer),
            Expr::Real(_) => Ok(ShankType::Real),
            Expr::Str(_) => Ok(ShankType::String),
            Expr::Char(_) => Ok(ShankType::Character),
            Expr::Bool(_) => Ok(ShankType::Boolean),
            Expr::Variable(var) => self.variable_type(var),
            Expr::Math { op, left, right } => {
                let left = self.expr_type(left)?;
                let right = self.expr_type(right)?;
                math_result(*op, &left, &right)
                    .ok_or(SemanticErrorKind::MathOperands { op: *op, left, right })
            }
            Expr::Compare { op, left, right } => {
                let left = self.expr_type(left)?;
                let right = self.expr_type(right)?;
                if comparable(*op, &left, &right) {
                    Ok(ShankType::Boolean)
                } else {
                    Err(SemanticErrorKind::CompareOperands { op: *op, left, right })
                }
            }
            Expr::Negate(operand) => {
                let found = self.expr_type(operand)?;
                if found.is_numeric() {
                    Ok(found)
                } else {
                    Err(SemanticErrorKind::NegateOperand { found })
                }
            }
        })
    }

    /// Type of a variable reference; element type when indexed.
    pub fn variable_type(&self, var: &VariableRef) -> CheckResult<ShankType> {
        let declared = self
            .env
            .lookup(&var.name)
            .ok_or_else(|| SemanticErrorKind::UndeclaredVariable {
                name: var.name.clone(),
            })?;
        let Some(index) = &var.index else {
            return Ok(declared.clone());
        };
        let element = declared
            .element()
            .cloned()
            .ok_or_else(|| SemanticErrorKind::NotAnArray {
                name: var.name.clone(),
                found: declared.clone(),
            })?;
        let index_type = self.expr_type(index)?;
        if index_type != ShankType::Integer {
            return Err(SemanticErrorKind::IndexNotInteger {
                name: var.name.clone(),
                found: index_type,
            });
        }
        Ok(element)
    }
}

#[cfg(test)]
mod tests;
