//! Parser tests.
//!
//! - `grammar`: shapes produced for declarations, statements, and expressions
//! - `errors`: committed failures, their codes, and where they point
//! - `positions`: production results and backtracking over `Pos`


use crate::{parse, ParseError};
use shank_ir::{Function, Program};

fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = match shank_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("test source failed to lex: {err}"),
    };
    parse(&tokens)
}

/// Parse a single `main` whose body is `body` (already indented).
fn parse_main(decls: &str, body: &str) -> Result<Function, ParseError> {
    let source = format!("define main()\n{decls}{body}");
    let program = parse_source(&source)?;
    match program.get("main") {
        Some(function) => Ok(function.clone()),
        None => panic!("main missing from parsed program"),
    }
}
