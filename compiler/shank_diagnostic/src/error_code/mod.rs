//! Error codes for all Shank diagnostics.
//!
//! The first digit names the stage that reported the error.

use std::fmt;

/// Error codes.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Semantic errors
/// - E6xxx: Runtime errors
/// - E9xxx: Driver errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Unterminated character literal
    E0003,
    /// Character literal is not exactly one character
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,
    /// Invalid function definition
    E1006,
    /// Missing function body
    E1007,
    /// Invalid number literal
    E1008,
    /// Invalid range constraint
    E1009,
    /// Duplicate function definition
    E1010,
    /// Function call used as a value
    E1011,

    // Semantic Errors (E2xxx)
    /// Type mismatch
    E2001,
    /// Undeclared variable
    E2002,
    /// Operator not defined for operand types
    E2003,
    /// Condition is not boolean
    E2004,
    /// Invalid array indexing
    E2005,

    // Runtime Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Modulo by zero
    E6002,
    /// Undefined variable
    E6003,
    /// Unknown function
    E6004,
    /// Argument count mismatch
    E6005,
    /// Operand or value type mismatch
    E6006,
    /// Integer overflow
    E6007,
    /// Missing or malformed `main`
    E6008,
    /// Invalid built-in argument
    E6009,
    /// Array index out of bounds
    E6010,
    /// Console input failure
    E6011,
    /// Call depth limit exceeded
    E6012,
    /// Console output failure
    E6013,

    // Driver Errors (E9xxx)
    /// Source file could not be read
    E9001,
    /// Echo output could not be written
    E9002,
}

/// Pipeline stage a code belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexical,
    Syntax,
    Semantic,
    Runtime,
    Driver,
}

impl Phase {
    /// Label printed at the start of a rendered diagnostic.
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Lexical => "Lexical Error",
            Phase::Syntax => "Syntax Error",
            Phase::Semantic => "Semantic Error",
            Phase::Runtime => "Runtime Error",
            Phase::Driver => "Error",
        }
    }
}

impl ErrorCode {
    /// All error codes, for iteration and lookup.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E6008,
        ErrorCode::E6009,
        ErrorCode::E6010,
        ErrorCode::E6011,
        ErrorCode::E6012,
        ErrorCode::E6013,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E6013 => "E6013",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Stage that reports this code.
    pub fn phase(&self) -> Phase {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 | ErrorCode::E0004 => {
                Phase::Lexical
            }
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004
            | ErrorCode::E1005
            | ErrorCode::E1006
            | ErrorCode::E1007
            | ErrorCode::E1008
            | ErrorCode::E1009
            | ErrorCode::E1010
            | ErrorCode::E1011 => Phase::Syntax,
            ErrorCode::E2001
            | ErrorCode::E2002
            | ErrorCode::E2003
            | ErrorCode::E2004
            | ErrorCode::E2005 => Phase::Semantic,
            ErrorCode::E6001
            | ErrorCode::E6002
            | ErrorCode::E6003
            | ErrorCode::E6004
            | ErrorCode::E6005
            | ErrorCode::E6006
            | ErrorCode::E6007
            | ErrorCode::E6008
            | ErrorCode::E6009
            | ErrorCode::E6010
            | ErrorCode::E6011
            | ErrorCode::E6012
            | ErrorCode::E6013 => Phase::Runtime,
            ErrorCode::E9001 | ErrorCode::E9002 => Phase::Driver,
        }
    }

    /// One-line description, as listed on the variant.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character in source",
            ErrorCode::E0003 => "unterminated character literal",
            ErrorCode::E0004 => "character literal is not exactly one character",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type",
            ErrorCode::E1006 => "invalid function definition",
            ErrorCode::E1007 => "missing function body",
            ErrorCode::E1008 => "invalid number literal",
            ErrorCode::E1009 => "invalid range constraint",
            ErrorCode::E1010 => "duplicate function definition",
            ErrorCode::E1011 => "function call used as a value",
            ErrorCode::E2001 => "type mismatch",
            ErrorCode::E2002 => "undeclared variable",
            ErrorCode::E2003 => "operator not defined for operand types",
            ErrorCode::E2004 => "condition is not boolean",
            ErrorCode::E2005 => "invalid array indexing",
            ErrorCode::E6001 => "division by zero",
            ErrorCode::E6002 => "modulo by zero",
            ErrorCode::E6003 => "undefined variable",
            ErrorCode::E6004 => "unknown function",
            ErrorCode::E6005 => "argument count mismatch",
            ErrorCode::E6006 => "type mismatch",
            ErrorCode::E6007 => "integer overflow",
            ErrorCode::E6008 => "missing or malformed main",
            ErrorCode::E6009 => "invalid built-in argument",
            ErrorCode::E6010 => "array index out of bounds",
            ErrorCode::E6011 => "console input failure",
            ErrorCode::E6012 => "call depth limit exceeded",
            ErrorCode::E6013 => "console output failure",
            ErrorCode::E9001 => "source file could not be read",
            ErrorCode::E9002 => "echo output could not be written",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string, ignoring case.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
