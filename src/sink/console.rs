//! Standard-output sink.

use std::io::{self, Write};

use super::Sink;

/// Stateless sink that writes lines verbatim to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a console sink.
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, line: &str) -> io::Result<()> {
        io::stdout().lock().write_all(line.as_bytes())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
