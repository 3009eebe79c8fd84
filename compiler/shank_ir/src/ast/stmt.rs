//! Statements.

use super::{Expr, VariableRef};

/// Statement nodes.
#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    Assignment {
        target: VariableRef,
        value: Expr,
    },
    If(IfStmt),
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },
    /// Body runs at least once; loop ends when the condition becomes true.
    Repeat {
        body: Vec<Stmt>,
        condition: Expr,
    },
    /// Inclusive bounds; counts down when `from > to`.
    For {
        var: VariableRef,
        from: Expr,
        to: Expr,
        body: Vec<Stmt>,
    },
    Call(FunctionCall),
}

/// One link of an `if` / `elsif` / `else` chain.
///
/// The `else` link is the one without a condition and is always last.
#[derive(Clone, PartialEq, Debug)]
pub struct IfStmt {
    pub condition: Option<Expr>,
    pub body: Vec<Stmt>,
    pub next: Option<Box<IfStmt>>,
}

impl IfStmt {
    /// Iterate the chain from this link to the end.
    pub fn links(&self) -> impl Iterator<Item = &IfStmt> {
        std::iter::successors(Some(self), |link| link.next.as_deref())
    }
}

/// A call statement.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Argument>,
    pub line: u32,
}

/// A call argument. `Var` arguments were written `var x` at the call site
/// and may be aliased by the callee.
#[derive(Clone, PartialEq, Debug)]
pub enum Argument {
    Value(Expr),
    Var(VariableRef),
}
