//! Pipeline failures.
//!
//! Each stage keeps its own error type; a [`Problem`] wraps whichever one
//! stopped the run and renders it as a [`Diagnostic`].

use std::path::PathBuf;

use shank_diagnostic::{Diagnostic, ErrorCode};
use shank_eval::EvalError;
use shank_lexer::LexError;
use shank_parse::ParseError;
use shank_types::SemanticError;

#[derive(Debug, thiserror::Error)]
pub enum Problem {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write echo output: {0}")]
    Echo(#[source] std::io::Error),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Runtime(#[from] EvalError),
}

impl Problem {
    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::Io { .. } => ErrorCode::E9001,
            Problem::Echo(_) => ErrorCode::E9002,
            Problem::Lex(err) => err.code(),
            Problem::Parse(err) => err.code,
            Problem::Semantic(err) => err.code(),
            Problem::Runtime(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Problem::Io { .. } | Problem::Echo(_) => Diagnostic::new(self.code(), self.to_string()),
            Problem::Lex(err) => err.to_diagnostic(),
            Problem::Parse(err) => err.to_diagnostic(),
            Problem::Semantic(err) => err.to_diagnostic(),
            Problem::Runtime(err) => err.to_diagnostic(),
        }
    }
}
