//! Semantic error types.

use shank_diagnostic::{Diagnostic, ErrorCode};
use shank_ir::{CompareOp, MathOp, ShankType};

/// A type error inside a named function.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("In function '{function}': {kind}")]
pub struct SemanticError {
    pub function: String,
    pub kind: SemanticErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SemanticErrorKind {
    #[error("Variable '{name}' not declared")]
    UndeclaredVariable { name: String },

    #[error("Type mismatch in assignment to '{target}'. Expected '{expected}' but got '{found}'")]
    AssignmentMismatch {
        target: String,
        expected: ShankType,
        found: ShankType,
    },

    #[error(
        "Incompatible types for math operation. Left: '{left}', Right: '{right}', Operation: {}",
        op.as_symbol()
    )]
    MathOperands {
        op: MathOp,
        left: ShankType,
        right: ShankType,
    },

    #[error(
        "Incompatible types for comparison. Left: '{left}', Right: '{right}', Comparison: {}",
        op.as_symbol()
    )]
    CompareOperands {
        op: CompareOp,
        left: ShankType,
        right: ShankType,
    },

    #[error("Cannot negate a value of type '{found}'")]
    NegateOperand { found: ShankType },

    /// `construct` is `If`, `Else-if`, `While`, or `Repeat-until`.
    #[error("{construct} condition must be boolean, but got '{found}'")]
    ConditionNotBoolean {
        construct: &'static str,
        found: ShankType,
    },

    #[error("For loop variable '{name}' must be integer, but is '{found}'")]
    ForVariable { name: String, found: ShankType },

    /// `bound` is `start` or `end`.
    #[error("For loop {bound} value must be integer, but got '{found}'")]
    ForBound {
        bound: &'static str,
        found: ShankType,
    },

    #[error("Variable '{name}' of type '{found}' cannot be indexed")]
    NotAnArray { name: String, found: ShankType },

    #[error("Index into '{name}' must be integer, but got '{found}'")]
    IndexNotInteger { name: String, found: ShankType },
}

impl SemanticErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            SemanticErrorKind::UndeclaredVariable { .. } => ErrorCode::E2002,
            SemanticErrorKind::AssignmentMismatch { .. }
            | SemanticErrorKind::ForVariable { .. }
            | SemanticErrorKind::ForBound { .. } => ErrorCode::E2001,
            SemanticErrorKind::MathOperands { .. }
            | SemanticErrorKind::CompareOperands { .. }
            | SemanticErrorKind::NegateOperand { .. } => ErrorCode::E2003,
            SemanticErrorKind::ConditionNotBoolean { .. } => ErrorCode::E2004,
            SemanticErrorKind::NotAnArray { .. } | SemanticErrorKind::IndexNotInteger { .. } => {
                ErrorCode::E2005
            }
        }
    }

    /// Attach the enclosing function.
    pub fn in_function(self, function: &str) -> SemanticError {
        SemanticError {
            function: function.to_string(),
            kind: self,
        }
    }
}

impl SemanticError {
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string())
    }
}
