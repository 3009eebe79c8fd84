//! Production results.
//!
//! | Result | Meaning |
//! |--------|---------|
//! | `Ok(Some(parsed))` | matched; continue at `parsed.next` |
//! | `Ok(None)` | did not match, nothing committed; try another alternative |
//! | `Err(err)` | committed to this production and it failed |

use crate::{ParseError, Pos};

/// A parsed value and the position right after it.
#[derive(Clone, PartialEq, Debug)]
pub struct Parsed<T> {
    pub value: T,
    pub next: Pos,
}

impl<T> Parsed<T> {
    #[inline]
    pub fn new(value: T, next: Pos) -> Self {
        Parsed { value, next }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            next: self.next,
        }
    }
}

/// Result of an optional production.
pub type ParseResult<T> = Result<Option<Parsed<T>>, ParseError>;

/// Turn "did not match" into a committed failure.
pub(crate) trait Required<T> {
    fn required(self, missing: impl FnOnce() -> ParseError) -> Result<Parsed<T>, ParseError>;
}

impl<T> Required<T> for ParseResult<T> {
    #[inline]
    fn required(self, missing: impl FnOnce() -> ParseError) -> Result<Parsed<T>, ParseError> {
        self?.ok_or_else(missing)
    }
}
