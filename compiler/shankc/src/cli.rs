//! Command-line arguments.

use std::path::PathBuf;

pub const USAGE: &str = "Usage: shank [--tokens] [--ast] <file>

Options:
  --tokens    Print the token stream before running
  --ast       Print the parsed program before running";

/// Pipeline switches set from the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub echo_tokens: bool,
    pub echo_ast: bool,
}

/// A validated command line: one source file plus options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub path: PathBuf,
    pub options: RunOptions,
}

impl Invocation {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = RunOptions::default();
        let mut path = None;
        for arg in args {
            match arg.as_str() {
                "--tokens" => options.echo_tokens = true,
                "--ast" => options.echo_ast = true,
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown option '{flag}'"));
                }
                _ if path.is_some() => {
                    return Err(format!("unexpected extra argument '{arg}'"));
                }
                _ => path = Some(PathBuf::from(arg)),
            }
        }
        let path = path.ok_or_else(|| "missing source file".to_string())?;
        Ok(Invocation { path, options })
    }
}
