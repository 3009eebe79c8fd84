//! Parse error type.

use shank_diagnostic::{Diagnostic, ErrorCode};
use shank_ir::Token;

/// A syntax error. Parsing stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    /// 1-based line of the offending token.
    pub line: u32,
    /// `None` when input ended before the expected token.
    pub token: Option<Token>,
}

impl ParseError {
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        line: u32,
        token: Option<Token>,
    ) -> Self {
        ParseError {
            code,
            message: message.into(),
            line,
            token,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::new(self.code, self.message.clone()).at_line(self.line);
        match &self.token {
            Some(token) => diag.with_token(token.to_string()),
            None => diag.with_token("end of input"),
        }
    }
}
