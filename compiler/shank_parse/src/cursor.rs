//! Read-only view of the token stream.
//!
//! Productions never move a shared cursor. They receive a [`Pos`], look at
//! tokens through [`Cursor`], and hand back the position after whatever they
//! matched. Abandoning an alternative is just dropping a `Pos`.

use shank_diagnostic::ErrorCode;
use shank_ir::{Token, TokenKind};

use crate::ParseError;

/// Index of a token in the stream.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Pos(usize);

impl Pos {
    pub const START: Pos = Pos(0);

    #[cfg(test)]
    pub(crate) fn index(self) -> usize {
        self.0
    }

    /// The position one token further on.
    #[inline]
    #[must_use]
    pub fn next(self) -> Pos {
        Pos(self.0 + 1)
    }
}

/// Token navigation without mutation.
#[derive(Copy, Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens }
    }

    #[inline]
    pub fn token(&self, pos: Pos) -> Option<&'a Token> {
        self.tokens.get(pos.0)
    }

    #[inline]
    pub fn kind(&self, pos: Pos) -> Option<TokenKind> {
        self.token(pos).map(|t| t.kind)
    }

    #[inline]
    pub fn check(&self, pos: Pos, kind: TokenKind) -> bool {
        self.kind(pos) == Some(kind)
    }

    #[inline]
    pub fn is_at_end(&self, pos: Pos) -> bool {
        pos.0 >= self.tokens.len()
    }

    /// Match a token of `kind`, returning it and the following position.
    #[inline]
    pub fn eat(&self, pos: Pos, kind: TokenKind) -> Option<(&'a Token, Pos)> {
        self.token(pos)
            .filter(|t| t.kind == kind)
            .map(|t| (t, pos.next()))
    }

    /// Like [`Cursor::eat`], but a mismatch is a committed failure.
    pub fn expect(
        &self,
        pos: Pos,
        kind: TokenKind,
        code: ErrorCode,
        message: &str,
    ) -> Result<(&'a Token, Pos), ParseError> {
        self.eat(pos, kind)
            .ok_or_else(|| self.error(pos, code, message))
    }

    /// Skip any number of `ENDOFLINE` tokens.
    pub fn skip_eols(&self, mut pos: Pos) -> Pos {
        while self.check(pos, TokenKind::EndOfLine) {
            pos = pos.next();
        }
        pos
    }

    /// Require at least one `ENDOFLINE`, then skip any blank lines after it.
    pub fn expect_eols(&self, pos: Pos, message: &str) -> Result<Pos, ParseError> {
        let (_, pos) = self.expect(pos, TokenKind::EndOfLine, ErrorCode::E1001, message)?;
        Ok(self.skip_eols(pos))
    }

    /// Build an error pointing at the token at `pos`, or past the last token.
    pub fn error(&self, pos: Pos, code: ErrorCode, message: impl Into<String>) -> ParseError {
        match self.token(pos) {
            Some(token) => ParseError::new(code, message, token.line, Some(token.clone())),
            None => {
                let line = self.tokens.last().map_or(1, |t| t.line);
                ParseError::new(code, message, line, None)
            }
        }
    }
}
