//! Lexer for the Shank language.
//!
//! Source is fed one physical line at a time. Each line is tokenized by a
//! character-level state machine, and the lexer then synthesizes the layout
//! tokens the parser relies on:
//!
//! - `INDENT` / `DEDENT`: one per level of change in leading whitespace
//!   (four columns per level, a tab counts as four) relative to the previous
//!   line that had content
//! - `ENDOFLINE`: exactly one after every line, blank lines included
//!
//! Lines with no content tokens (blank, or only a comment) leave the
//! indentation level untouched. A line that begins inside an unfinished
//! `{ ... }` comment is measured from the text after the closing `}`, so
//! `}    write(x)` sits one level deep. [`Lexer::finish`] closes any open
//! levels.

mod keywords;
mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};

use shank_ir::{Token, TokenKind};
use tracing::trace;

/// Columns per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Line-at-a-time lexer state.
#[derive(Debug, Default)]
pub struct Lexer {
    tokens: Vec<Token>,
    /// Number of the most recently lexed line.
    line: u32,
    /// Indentation level of the last line with content.
    level: usize,
    in_comment: bool,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize the next physical line. `text` must not contain a line break.
    pub fn lex_line(&mut self, text: &str) -> Result<(), LexError> {
        self.line += 1;
        let began_in_comment = self.in_comment;
        let content = scanner::scan_line(text, self.line, &mut self.in_comment)?;

        if !content.is_empty() {
            let measured = if began_in_comment {
                text.split_once('}').map_or(text, |(_, tail)| tail)
            } else {
                text
            };
            self.update_indentation(measured);
        }
        trace!(line = self.line, tokens = content.len(), "lexed line");
        self.tokens.extend(content);
        self.tokens.push(Token::new(TokenKind::EndOfLine, self.line));
        Ok(())
    }

    /// True while a `{ ... }` comment is still open.
    #[cfg(test)]
    pub(crate) fn in_comment(&self) -> bool {
        self.in_comment
    }

    /// Close every open indentation level and return the token stream.
    pub fn finish(mut self) -> Vec<Token> {
        for _ in 0..self.level {
            self.tokens.push(Token::new(TokenKind::Dedent, self.line));
        }
        self.level = 0;
        self.tokens
    }

    fn update_indentation(&mut self, text: &str) {
        let level = indent_level(text);
        let kind = if level > self.level {
            TokenKind::Indent
        } else {
            TokenKind::Dedent
        };
        for _ in 0..level.abs_diff(self.level) {
            self.tokens.push(Token::new(kind, self.line));
        }
        self.level = level;
    }
}

/// Leading whitespace measured in levels; partial levels round down.
pub fn indent_level(text: &str) -> usize {
    let columns: usize = text
        .chars()
        .map_while(|c| match c {
            ' ' => Some(1),
            '\t' => Some(INDENT_WIDTH),
            _ => None,
        })
        .sum();
    columns / INDENT_WIDTH
}

/// Lex a whole source text.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new();
    for line in source.lines() {
        lexer.lex_line(line)?;
    }
    let tokens = lexer.finish();
    tracing::debug!(count = tokens.len(), "lexing complete");
    Ok(tokens)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
