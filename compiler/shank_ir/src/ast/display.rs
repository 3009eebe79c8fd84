//! Surface-syntax rendering of the AST, used by `shank --ast`.
//!
//! Binary expressions are fully parenthesized so the echo shows how the
//! parser grouped them.

use std::fmt;

use super::{
    Argument, Expr, Function, FunctionCall, IfStmt, Program, RangeConstraint, Stmt, VariableDecl,
    VariableRef,
};

const INDENT: &str = "    ";

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, function) in self.functions().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{function}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "define {}(", self.name)?;
        for (idx, param) in self.params.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            if param.is_var {
                write!(f, "var ")?;
            }
            write!(f, "{} : {}", param.name, param.ty)?;
        }
        writeln!(f, ")")?;
        for constant in &self.constants {
            writeln!(f, "constants {constant}")?;
        }
        for local in &self.locals {
            writeln!(f, "variables {local}")?;
        }
        write_block(f, &self.body, 1)
    }
}

impl fmt::Display for VariableDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = &self.initializer {
            return write!(f, "{} = {value}", self.name);
        }
        write!(f, "{} : {}", self.name, self.ty)?;
        match self.range {
            Some(RangeConstraint::Integer { from, to }) => write!(f, " from {from} to {to}"),
            Some(RangeConstraint::Real { from, to }) => write!(f, " from {from:?} to {to:?}"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for VariableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.index {
            Some(index) => write!(f, "{}[{index}]", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(n) => write!(f, "{n}"),
            Expr::Real(r) => write!(f, "{r:?}"),
            Expr::Str(s) => write!(f, "\"{s}\""),
            Expr::Char(c) => write!(f, "'{c}'"),
            Expr::Bool(b) => write!(f, "{b}"),
            Expr::Variable(var) => write!(f, "{var}"),
            Expr::Math { op, left, right } => write!(f, "({left} {} {right})", op.as_symbol()),
            Expr::Compare { op, left, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            Expr::Negate(operand) => write!(f, "-{operand}"),
        }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (idx, arg) in self.args.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            match arg {
                Argument::Value(expr) => write!(f, "{expr}")?,
                Argument::Var(var) => write!(f, "var {var}")?,
            }
        }
        write!(f, ")")
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, body: &[Stmt], depth: usize) -> fmt::Result {
    for stmt in body {
        write_stmt(f, stmt, depth)?;
    }
    Ok(())
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    match stmt {
        Stmt::Assignment { target, value } => writeln!(f, "{pad}{target} := {value}"),
        Stmt::If(chain) => write_if(f, chain, depth),
        Stmt::While { condition, body } => {
            writeln!(f, "{pad}while {condition}")?;
            write_block(f, body, depth + 1)
        }
        Stmt::Repeat { body, condition } => {
            writeln!(f, "{pad}repeat")?;
            write_block(f, body, depth + 1)?;
            writeln!(f, "{pad}until {condition}")
        }
        Stmt::For {
            var,
            from,
            to,
            body,
        } => {
            writeln!(f, "{pad}for {var} from {from} to {to}")?;
            write_block(f, body, depth + 1)
        }
        Stmt::Call(call) => writeln!(f, "{pad}{call}"),
    }
}

fn write_if(f: &mut fmt::Formatter<'_>, chain: &IfStmt, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    for (idx, link) in chain.links().enumerate() {
        match (&link.condition, idx) {
            (Some(cond), 0) => writeln!(f, "{pad}if {cond} then")?,
            (Some(cond), _) => writeln!(f, "{pad}elsif {cond} then")?,
            (None, _) => writeln!(f, "{pad}else")?,
        }
        write_block(f, &link.body, depth + 1)?;
    }
    Ok(())
}
