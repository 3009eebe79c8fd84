//! Lexer error types.

use shank_diagnostic::{Diagnostic, ErrorCode};

/// A lexer failure on a specific source line. Lexing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line number.
    pub line: u32,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated character literal")]
    UnterminatedCharacter,
    /// `''` or `'ab'`.
    #[error("Character literal must contain exactly one character")]
    CharacterLength,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32) -> Self {
        LexError { kind, line }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
            LexErrorKind::UnterminatedCharacter => ErrorCode::E0003,
            LexErrorKind::CharacterLength => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.kind.to_string()).at_line(self.line)
    }
}
