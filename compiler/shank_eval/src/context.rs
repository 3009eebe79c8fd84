//! I/O and randomness available to a running program.
//!
//! An [`EvalContext`] is handed to the interpreter at construction. Hosts
//! pick where output goes, where `read` takes its lines from, and how the
//! random source is seeded:
//!
//! ```ignore
//! let ctx = EvalContext::builder()
//!     .output(buffer_handler())
//!     .scripted_input(["42", "yes"])
//!     .seed(7)
//!     .build();
//! ```

use std::collections::VecDeque;
use std::io::BufRead;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{input_failure, EvalResult};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Where `read` gets its lines.
#[derive(Debug)]
pub enum InputSource {
    Stdin,
    /// Pre-supplied lines, consumed front to back.
    Scripted(VecDeque<String>),
}

pub struct EvalContext {
    output: SharedPrintHandler,
    input: InputSource,
    rng: StdRng,
}

impl EvalContext {
    /// Stdout, stdin, and an entropy-seeded random source.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> EvalContextBuilder {
        EvalContextBuilder::default()
    }

    pub fn output(&self) -> &SharedPrintHandler {
        &self.output
    }

    /// Next input line without its line terminator.
    pub fn read_line(&mut self) -> EvalResult<String> {
        match &mut self.input {
            InputSource::Scripted(lines) => lines
                .pop_front()
                .ok_or_else(|| input_failure("no more input lines")),
            InputSource::Stdin => {
                let mut line = String::new();
                let read = std::io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(|err| input_failure(err.to_string()))?;
                if read == 0 {
                    return Err(input_failure("end of input"));
                }
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(line)
            }
        }
    }

    /// Uniform in `[0, 1)`.
    pub fn random(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct EvalContextBuilder {
    output: Option<SharedPrintHandler>,
    input: Option<InputSource>,
    seed: Option<u64>,
}

impl EvalContextBuilder {
    #[must_use]
    pub fn output(mut self, handler: SharedPrintHandler) -> Self {
        self.output = Some(handler);
        self
    }

    /// Serve `read` from these lines instead of stdin.
    #[must_use]
    pub fn scripted_input<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input = Some(InputSource::Scripted(
            lines.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Fix the random seed so `getRandom` is reproducible.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> EvalContext {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        EvalContext {
            output: self.output.unwrap_or_else(stdout_handler),
            input: self.input.unwrap_or(InputSource::Stdin),
            rng,
        }
    }
}

#[cfg(test)]
mod tests;
