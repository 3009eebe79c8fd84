//! The rendered form of a stage error.

use std::fmt;

use crate::{ErrorCode, Phase};

/// A single reportable error.
///
/// Rendering depends on the phase. The error code trails the line so the
/// phase label, line and message keep their fixed layout:
///
/// ```text
/// Lexical Error at line 4: Unexpected character: $ [E0002]
/// Syntax Error at line 7: expected ':=' - Token: IDENTIFIER(x) [E1001]
/// Semantic Error: In function 'main': cannot assign string to integer [E2001]
/// Runtime Error: In function 'main': division by zero [E6001]
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// 1-based source line, when the stage tracks one.
    pub line: Option<u32>,
    /// Offending token, already formatted.
    pub token: Option<String>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            line: None,
            token: None,
        }
    }

    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn phase(&self) -> Phase {
        self.code.phase()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phase().label())?;
        if let Some(line) = self.line {
            write!(f, " at line {line}")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(token) = &self.token {
            write!(f, " - Token: {token}")?;
        }
        write!(f, " [{}]", self.code)
    }
}
