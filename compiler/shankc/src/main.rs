//! `shank` - run a Shank program.

use std::process::ExitCode;

use shank_eval::EvalContext;
use shankc::{Invocation, USAGE};

fn main() -> ExitCode {
    shankc::init_tracing();

    let invocation = match Invocation::from_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match shankc::run_file(&invocation.path, invocation.options, EvalContext::new()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(problem) => {
            eprintln!("{}", problem.to_diagnostic());
            ExitCode::FAILURE
        }
    }
}
