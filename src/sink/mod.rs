//! Output sinks for formatted log lines.

mod console;
mod rolling;

pub use console::ConsoleSink;
pub use rolling::RollingFileSink;

use std::io;
use std::path::PathBuf;

/// A terminal destination for formatted log lines.
///
/// Sinks hold their own resources exclusively and perform no internal
/// locking; a sink expects one logical writer at a time (see the crate-level
/// concurrency notes).
pub trait Sink: Send {
    /// Write one line, verbatim. Callers supply the terminator.
    ///
    /// Errors are reported to whoever holds the sink directly, but a channel
    /// fanning out a line swallows them so the remaining sinks still receive
    /// it.
    fn write(&mut self, line: &str) -> io::Result<()>;

    /// Flush buffered output and release held resources.
    ///
    /// Must be idempotent: a second close is a harmless no-op.
    fn close(&mut self) -> io::Result<()>;
}

/// Failure classes a file-backed sink can hit.
///
/// These are never propagated to logging call sites. They are rendered to
/// stderr as a diagnostic while the sink degrades to dropping writes.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The base file could not be created or opened.
    #[error("failed to open log file {path}: {source}")]
    Open {
        /// Path of the base file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The base file could not be reopened after a rollover.
    #[error("failed to reopen log file {path} after rotation: {source}")]
    Rotate {
        /// Path of the base file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}
