//! Runtime errors.
//!
//! Every failure aborts the run. Errors are built through the `#[cold]`
//! constructors below; the interpreter attaches the enclosing function name
//! as the error leaves a function body.

use std::fmt;

use shank_diagnostic::{Diagnostic, ErrorCode};
use shank_ir::ShankType;

pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Modulo by zero")]
    ModuloByZero,

    #[error("Integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("Variable '{name}' not declared")]
    UndefinedVariable { name: String },

    #[error("Unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("Function '{function}' expects {expected} argument(s) but got {found}")]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },

    #[error("Cannot apply '{op}' to {left} and {right}")]
    OperandMismatch {
        op: &'static str,
        left: ShankType,
        right: ShankType,
    },

    #[error("Cannot negate a value of type {found}")]
    NegateMismatch { found: ShankType },

    #[error("Cannot assign a {found} value to '{name}' of type {expected}")]
    AssignMismatch {
        name: String,
        expected: ShankType,
        found: ShankType,
    },

    #[error("Argument {position} of '{function}' expects {expected} but got {found}")]
    ArgumentMismatch {
        function: String,
        position: usize,
        expected: ShankType,
        found: ShankType,
    },

    #[error("{construct} condition must be boolean, but got {found}")]
    ConditionNotBoolean {
        construct: &'static str,
        found: ShankType,
    },

    #[error("For loop {part} must be integer, but got {found}")]
    ForNotInteger {
        part: &'static str,
        found: ShankType,
    },

    #[error("Variable '{name}' of type {found} cannot be indexed")]
    NotAnArray { name: String, found: ShankType },

    #[error("Index into '{name}' must be integer, but got {found}")]
    IndexNotInteger { name: String, found: ShankType },

    #[error("Index {index} is out of bounds for '{name}' (length {len})")]
    IndexOutOfBounds {
        name: String,
        index: i32,
        len: usize,
    },

    #[error("Program has no 'main' function")]
    MissingMain,

    #[error("Function 'main' must not declare parameters")]
    MainHasParameters,

    #[error("{function}: {message}")]
    BuiltinArgument {
        function: &'static str,
        message: String,
    },

    #[error("Input failed: {message}")]
    InputFailure { message: String },

    #[error("Output failed: {message}")]
    OutputFailure { message: String },

    #[error("Call depth limit of {limit} exceeded")]
    CallDepthExceeded { limit: usize },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DivisionByZero => ErrorCode::E6001,
            Self::ModuloByZero => ErrorCode::E6002,
            Self::UndefinedVariable { .. } => ErrorCode::E6003,
            Self::UnknownFunction { .. } => ErrorCode::E6004,
            Self::ArityMismatch { .. } => ErrorCode::E6005,
            Self::OperandMismatch { .. }
            | Self::NegateMismatch { .. }
            | Self::AssignMismatch { .. }
            | Self::ArgumentMismatch { .. }
            | Self::ConditionNotBoolean { .. }
            | Self::ForNotInteger { .. }
            | Self::NotAnArray { .. }
            | Self::IndexNotInteger { .. } => ErrorCode::E6006,
            Self::IntegerOverflow { .. } => ErrorCode::E6007,
            Self::MissingMain | Self::MainHasParameters => ErrorCode::E6008,
            Self::BuiltinArgument { .. } => ErrorCode::E6009,
            Self::IndexOutOfBounds { .. } => ErrorCode::E6010,
            Self::InputFailure { .. } => ErrorCode::E6011,
            Self::OutputFailure { .. } => ErrorCode::E6013,
            Self::CallDepthExceeded { .. } => ErrorCode::E6012,
        }
    }
}

/// A runtime failure, with the function it happened in when known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub function: Option<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            function: None,
        }
    }

    /// Record the enclosing function. The innermost function wins.
    #[must_use]
    pub fn in_function(mut self, function: &str) -> Self {
        if self.function.is_none() {
            self.function = Some(function.to_string());
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string())
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.function {
            Some(function) => write!(f, "In function '{function}': {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn operand_mismatch(op: &'static str, left: ShankType, right: ShankType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandMismatch { op, left, right })
}

#[cold]
pub fn negate_mismatch(found: ShankType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegateMismatch { found })
}

// Variables and storage

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn assign_mismatch(name: &str, expected: ShankType, found: ShankType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AssignMismatch {
        name: name.to_string(),
        expected,
        found,
    })
}

#[cold]
pub fn not_an_array(name: &str, found: ShankType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnArray {
        name: name.to_string(),
        found,
    })
}

#[cold]
pub fn index_not_integer(name: &str, found: ShankType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotInteger {
        name: name.to_string(),
        found,
    })
}

#[cold]
pub fn index_out_of_bounds(name: &str, index: i32, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds {
        name: name.to_string(),
        index,
        len,
    })
}

// Control flow

#[cold]
pub fn condition_not_boolean(construct: &'static str, found: ShankType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConditionNotBoolean { construct, found })
}

#[cold]
pub fn for_not_integer(part: &'static str, found: ShankType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ForNotInteger { part, found })
}

// Calls

#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn wrong_arg_count(function: &str, expected: usize, found: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        found,
    })
}

#[cold]
pub fn argument_mismatch(
    function: &str,
    position: usize,
    expected: ShankType,
    found: ShankType,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentMismatch {
        function: function.to_string(),
        position,
        expected,
        found,
    })
}

#[cold]
pub fn missing_main() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingMain)
}

#[cold]
pub fn main_has_parameters() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MainHasParameters)
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallDepthExceeded { limit })
}

// Built-ins

#[cold]
pub fn builtin_argument(function: &'static str, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BuiltinArgument {
        function,
        message: message.into(),
    })
}

#[cold]
pub fn input_failure(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InputFailure {
        message: message.into(),
    })
}

#[cold]
pub fn output_failure(err: &std::io::Error) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OutputFailure {
        message: err.to_string(),
    })
}
