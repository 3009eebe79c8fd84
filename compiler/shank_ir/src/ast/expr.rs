//! Expressions.

use super::{CompareOp, MathOp};

/// A reference to a variable, optionally indexed (`a[i]`).
#[derive(Clone, PartialEq, Debug)]
pub struct VariableRef {
    pub name: String,
    pub index: Option<Box<Expr>>,
}

impl VariableRef {
    pub fn new(name: impl Into<String>) -> Self {
        VariableRef {
            name: name.into(),
            index: None,
        }
    }

    pub fn indexed(name: impl Into<String>, index: Expr) -> Self {
        VariableRef {
            name: name.into(),
            index: Some(Box::new(index)),
        }
    }
}

/// Expression nodes.
///
/// There is no call expression: Shank functions produce results through
/// `var` parameters only.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Integer(i32),
    Real(f32),
    Str(String),
    Char(char),
    Bool(bool),
    Variable(VariableRef),
    Math {
        op: MathOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Compare {
        op: CompareOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Negate(Box<Expr>),
}

impl Expr {
    pub fn math(op: MathOp, left: Expr, right: Expr) -> Self {
        Expr::Math {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn compare(op: CompareOp, left: Expr, right: Expr) -> Self {
        Expr::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(VariableRef::new(name))
    }
}
