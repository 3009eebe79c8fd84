//! Destinations for program output.
//!
//! `write` output goes to stdout when running a file and into a buffer
//! when a host (tests, embedding) wants to inspect it. Dispatch is over a
//! closed enum; no trait objects.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes straight to the process's stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }

    pub fn write(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Collects output in memory.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn write_line(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    pub fn write(&self, text: &str) {
        self.buffer.lock().push_str(text);
    }

    pub fn captured(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Write `line` followed by a newline. Only stdout can fail.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.write_line(line),
            Self::Buffer(h) => {
                h.write_line(line);
                Ok(())
            }
        }
    }

    pub fn write(&self, text: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.write(text),
            Self::Buffer(h) => {
                h.write(text);
                Ok(())
            }
        }
    }

    /// Output captured so far; empty for stdout.
    pub fn captured(&self) -> String {
        match self {
            Self::Buffer(h) => h.captured(),
            Self::Stdout(_) => String::new(),
        }
    }
}

/// Handle kept by both the interpreter and its host.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
