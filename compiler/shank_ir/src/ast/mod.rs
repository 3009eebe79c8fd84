//! Shank AST.
//!
//! A [`Program`] is a set of [`Function`]s. Each function holds three groups
//! of [`VariableDecl`] (parameters, constants, locals) and a statement body.
//! Nodes own their children; there is no sharing between nodes.

mod display;
mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, VariableRef};
pub use operators::{CompareOp, MathOp};
pub use stmt::{Argument, FunctionCall, IfStmt, Stmt};

use rustc_hash::FxHashMap;

use crate::{fold_name, ShankType};

/// All functions of a source file.
///
/// Lookup is case-insensitive; iteration follows declaration order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Program {
    functions: Vec<Function>,
    by_name: FxHashMap<String, usize>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function. A second definition of the same (case-folded) name is
    /// handed back unchanged.
    pub fn insert(&mut self, function: Function) -> Result<(), Function> {
        let key = fold_name(&function.name);
        if self.by_name.contains_key(&key) {
            return Err(function);
        }
        self.by_name.insert(key, self.functions.len());
        self.functions.push(function);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.by_name
            .get(&fold_name(name))
            .and_then(|&idx| self.functions.get(idx))
    }

    pub fn functions(&self) -> std::slice::Iter<'_, Function> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// A user-defined function.
#[derive(Clone, PartialEq, Debug)]
pub struct Function {
    pub name: String,
    pub params: Vec<VariableDecl>,
    pub constants: Vec<VariableDecl>,
    pub locals: Vec<VariableDecl>,
    pub body: Vec<Stmt>,
    /// Line of the `define` keyword.
    pub line: u32,
}

impl Function {
    /// Every declaration visible in the body, in binding order: parameters,
    /// then constants, then locals.
    pub fn declarations(&self) -> impl Iterator<Item = &VariableDecl> {
        self.params
            .iter()
            .chain(self.constants.iter())
            .chain(self.locals.iter())
    }
}

/// A parameter, constant, or local variable declaration.
#[derive(Clone, PartialEq, Debug)]
pub struct VariableDecl {
    pub name: String,
    pub ty: ShankType,
    /// `var` parameter: the callee may write through to the caller.
    pub is_var: bool,
    /// Literal value of a constant.
    pub initializer: Option<Expr>,
    /// Declared `from .. to` bounds. Recorded, never enforced.
    pub range: Option<RangeConstraint>,
}

impl VariableDecl {
    pub fn param(name: impl Into<String>, ty: ShankType, is_var: bool) -> Self {
        VariableDecl {
            name: name.into(),
            ty,
            is_var,
            initializer: None,
            range: None,
        }
    }

    pub fn constant(name: impl Into<String>, ty: ShankType, value: Expr) -> Self {
        VariableDecl {
            name: name.into(),
            ty,
            is_var: false,
            initializer: Some(value),
            range: None,
        }
    }

    pub fn local(name: impl Into<String>, ty: ShankType, range: Option<RangeConstraint>) -> Self {
        VariableDecl {
            name: name.into(),
            ty,
            is_var: false,
            initializer: None,
            range,
        }
    }
}

/// `from X to Y` bounds on a variable declaration.
///
/// Strings use the integer form to bound their length.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum RangeConstraint {
    Integer { from: i32, to: i32 },
    Real { from: f32, to: f32 },
}
