//! Size-rotating file sink.
//!
//! Appends lines to a base file. Once an incoming line would push the file
//! past the configured size, the base file is renamed into a numbered backup
//! series (`base.1` newest, `base.N` oldest) and a fresh base file is
//! started. The series length is bounded: the oldest generation is evicted
//! on every rollover.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::{Sink, SinkError};

/// File sink with size-based rotation.
///
/// Failure modes degrade instead of propagating: a sink that cannot open or
/// reopen its base file prints one diagnostic to stderr and silently drops
/// subsequent writes. Log loss is an accepted property of this crate; the
/// logging subsystem must never take the host process down with it.
///
/// Writes are buffered. Only a rollover and `close` force a flush, so a
/// crashed process can lose the tail of the current file.
pub struct RollingFileSink {
    base_path: PathBuf,
    max_size: u64,
    max_backups: u16,
    current_size: u64,
    writer: Option<BufWriter<File>>,
}

impl RollingFileSink {
    /// Open or create `base_path` in append mode.
    ///
    /// `current_size` is seeded from the file's existing length, so a
    /// restarted process continues size accounting instead of immediately
    /// re-triggering rotation. The parent directory is created if missing.
    /// With `max_backups == 0` rotation is disabled and the file grows
    /// without bound.
    pub fn open(base_path: impl Into<PathBuf>, max_size: u64, max_backups: u16) -> Self {
        let mut sink = Self {
            base_path: base_path.into(),
            max_size,
            max_backups,
            current_size: 0,
            writer: None,
        };
        match sink.open_writer() {
            Ok((writer, existing)) => {
                sink.writer = Some(writer);
                sink.current_size = existing;
            }
            Err(source) => {
                let err = SinkError::Open {
                    path: sink.base_path.clone(),
                    source,
                };
                eprintln!("fanlog: {err}");
            }
        }
        sink
    }

    /// Bytes written to the currently open base file.
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    /// Whether the sink holds an open writer. `false` once closed or after
    /// an open/reopen failure left the sink degraded.
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn open_writer(&self) -> io::Result<(BufWriter<File>, u64)> {
        if let Some(parent) = self.base_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.base_path)?;
        let existing = file.metadata()?.len();
        Ok((BufWriter::new(file), existing))
    }

    fn backup_path(&self, generation: u16) -> PathBuf {
        let mut name = self.base_path.as_os_str().to_os_string();
        name.push(format!(".{generation}"));
        PathBuf::from(name)
    }

    /// Shift the backup series and start a fresh base file.
    ///
    /// Each remove/rename step is tolerated individually: a missing
    /// generation is normal, and a failed rename only costs that generation.
    /// If the fresh base file cannot be opened the sink degrades and drops
    /// writes until closed.
    fn roll_over(&mut self) {
        if self.max_backups == 0 {
            return;
        }

        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
        self.current_size = 0;

        let _ = fs::remove_file(self.backup_path(self.max_backups));
        // Shift in decreasing order so no generation lands on a
        // not-yet-moved file.
        for generation in (1..self.max_backups).rev() {
            let _ = fs::rename(self.backup_path(generation), self.backup_path(generation + 1));
        }
        let _ = fs::rename(&self.base_path, self.backup_path(1));

        match self.open_writer() {
            Ok((writer, existing)) => {
                self.writer = Some(writer);
                self.current_size = existing;
            }
            Err(source) => {
                let err = SinkError::Rotate {
                    path: self.base_path.clone(),
                    source,
                };
                eprintln!("fanlog: {err}");
            }
        }
    }
}

impl Sink for RollingFileSink {
    fn write(&mut self, line: &str) -> io::Result<()> {
        if self.writer.is_none() {
            // Degraded; the open diagnostic already went to stderr.
            return Ok(());
        }
        let incoming = line.len() as u64;
        if self.current_size + incoming > self.max_size {
            self.roll_over();
        }
        if let Some(writer) = self.writer.as_mut() {
            writer.write_all(line.as_bytes())?;
            self.current_size += incoming;
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.current_size = 0;
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}
