//! Shank driver: source file in, program output and diagnostics out.
//!
//! The pipeline is strictly sequential and fail-fast:
//!
//! ```text
//! read file -> lex -> parse -> analyze -> interpret
//! ```
//!
//! The first failure becomes a [`Problem`], rendered as a single
//! diagnostic line by the `shank` binary.

mod cli;
mod problem;

use std::path::Path;
use std::sync::Once;

use shank_eval::EvalContext;
use shank_ir::{Token, TokenKind};

pub use cli::{Invocation, RunOptions, USAGE};
pub use problem::Problem;

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber when `RUST_LOG` is set. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Read a source file.
pub fn read_source(path: &Path) -> Result<String, Problem> {
    std::fs::read_to_string(path).map_err(|source| Problem::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Render tokens one source line per output line.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push(if token.is(TokenKind::EndOfLine) { '\n' } else { ' ' });
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.pop();
        out.push('\n');
    }
    out
}

/// Run Shank source text. Echo output requested by `options` goes to the
/// context's output handler ahead of the program's own output.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn run_source(source: &str, options: RunOptions, ctx: EvalContext) -> Result<(), Problem> {
    let tokens = shank_lexer::lex(source)?;
    if options.echo_tokens {
        ctx.output()
            .write(&format_tokens(&tokens))
            .map_err(Problem::Echo)?;
    }

    let program = shank_parse::parse(&tokens)?;
    if options.echo_ast {
        ctx.output()
            .write(&program.to_string())
            .map_err(Problem::Echo)?;
    }

    shank_types::analyze(&program)?;
    shank_eval::interpret(&program, ctx)?;
    Ok(())
}

/// Read and run a source file.
pub fn run_file(path: &Path, options: RunOptions, ctx: EvalContext) -> Result<(), Problem> {
    tracing::debug!(path = %path.display(), "running file");
    let source = read_source(path)?;
    run_source(&source, options, ctx)
}
