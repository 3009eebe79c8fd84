//! Recursive descent parser for Shank.
//!
//! Turns the lexer's token stream into a [`Program`]. Each production takes
//! an immutable [`Pos`] and returns a [`ParseResult`]: a value plus the next
//! position, no match, or a committed [`ParseError`]. Backtracking is free
//! because no production mutates shared state.
//!
//! Grammar overview:
//!
//! ```text
//! program     := { function }
//! function    := 'define' IDENT '(' [params] ')' EOL { decls } INDENT block DEDENT
//! statement   := if | while | repeat | for | call | assignment
//! boolCompare := expression [ compareOp expression ]
//! expression  := term { ('+'|'-') term }
//! term        := factor { ('*'|'/'|'mod') factor }
//! ```

mod cursor;
mod error;
mod grammar;
mod outcome;

pub use cursor::{Cursor, Pos};
pub use error::ParseError;
pub use outcome::{ParseResult, Parsed};

use shank_ir::{Program, Token};

/// Parser over a borrowed token stream.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }
}

/// Parse a complete token stream into a program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    let program = Parser::new(tokens).parse_program()?;
    tracing::debug!(functions = program.len(), "parsing complete");
    Ok(program)
}

#[cfg(test)]
mod tests;
