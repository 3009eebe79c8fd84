//! String slicing built-ins. Positions count characters, starting at 1.

use super::BuiltinArgs;
use crate::errors::EvalResult;
use crate::{EvalContext, Value};

fn char_count(args: &BuiltinArgs, s: &str) -> EvalResult<i32> {
    i32::try_from(s.chars().count()).map_err(|_| args.fail("string is too long"))
}

/// `left(s, n, var r)`: the first `n` characters.
pub(super) fn left(args: &mut BuiltinArgs, _ctx: &mut EvalContext) -> EvalResult<()> {
    let n = args.integer(1)?;
    let result: String = match usize::try_from(n) {
        Ok(n) => args.string(0)?.chars().take(n).collect(),
        Err(_) => String::new(),
    };
    args.set(2, Value::Str(result))
}

/// `right(s, n, var r)`: the last `n` characters.
pub(super) fn right(args: &mut BuiltinArgs, _ctx: &mut EvalContext) -> EvalResult<()> {
    let n = args.integer(1)?;
    let s = args.string(0)?;
    let result: String = match usize::try_from(n) {
        Ok(n) => {
            let len = s.chars().count();
            s.chars().skip(len.saturating_sub(n)).collect()
        }
        Err(_) => String::new(),
    };
    args.set(2, Value::Str(result))
}

/// `substring(s, start, n, var r)`: `n` characters from 1-based `start`,
/// clamped to the end of `s`.
pub(super) fn substring(args: &mut BuiltinArgs, _ctx: &mut EvalContext) -> EvalResult<()> {
    let start = args.integer(1)?;
    let n = args.integer(2)?;
    let s = args.string(0)?;
    let len = char_count(args, s)?;
    let result: String = if start < 1 || start > len || n <= 0 {
        String::new()
    } else {
        let skip = usize::try_from(start - 1).unwrap_or(0);
        let take = usize::try_from(n).unwrap_or(0);
        s.chars().skip(skip).take(take).collect()
    };
    args.set(3, Value::Str(result))
}

/// `start(s, var i)`: index of the first character, 0 when empty.
pub(super) fn start(args: &mut BuiltinArgs, _ctx: &mut EvalContext) -> EvalResult<()> {
    let first = i32::from(!args.string(0)?.is_empty());
    args.set(1, Value::Integer(first))
}

/// `end(s, var i)`: index of the last character, 0 when empty.
pub(super) fn end(args: &mut BuiltinArgs, _ctx: &mut EvalContext) -> EvalResult<()> {
    let last = char_count(args, args.string(0)?)?;
    args.set(1, Value::Integer(last))
}
