//! Diagnostics for the Shank toolchain.
//!
//! Every pipeline stage fails fast with its own error type. The driver turns
//! whichever error stopped the run into a [`Diagnostic`]: an [`ErrorCode`]
//! for searchability plus the message, line, and offending token, rendered
//! as a single line on stderr.

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, Phase};
