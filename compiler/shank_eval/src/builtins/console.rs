//! `write` and `read`.

use super::BuiltinArgs;
use crate::errors::{output_failure, EvalResult};
use crate::EvalContext;

/// Print every argument, separated by single spaces, then a newline.
pub(super) fn write(args: &mut BuiltinArgs, ctx: &mut EvalContext) -> EvalResult<()> {
    let line = args
        .values()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    ctx.output()
        .write_line(&line)
        .map_err(|err| output_failure(&err))
}

/// Read one line per argument, parsed as the argument's kind.
pub(super) fn read(args: &mut BuiltinArgs, ctx: &mut EvalContext) -> EvalResult<()> {
    for position in 0..args.len() {
        if !args.is_by_ref(position) {
            return Err(args.fail(format!(
                "argument {} must be passed with 'var'",
                position + 1
            )));
        }
        let line = ctx.read_line()?;
        let parsed = args.values()[position]
            .parse_like(&line)
            .ok_or_else(|| args.fail("cannot read into an array"))?;
        args.set(position, parsed)?;
    }
    Ok(())
}
