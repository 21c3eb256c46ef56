//! Fanout of formatted lines to a bounded, ordered set of sinks.

use crate::sink::Sink;

/// Maximum number of sinks a channel will hold.
///
/// The bound is an intentional simplicity constraint, not a resource limit:
/// adding a sink to a full channel is silently ignored.
pub const MAX_SINKS: usize = 4;

/// A named fanout point over an ordered, bounded list of sinks.
///
/// Sinks are only ever appended; the list lives and dies with the channel.
/// The channel performs no locking, so it expects one logical writer at a
/// time (see the crate-level concurrency notes).
pub struct Channel {
    name: String,
    sinks: Vec<Box<dyn Sink>>,
}

impl Channel {
    /// Create an empty channel. The name is informational only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sinks: Vec::new(),
        }
    }

    /// Channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a sink, keeping insertion order.
    ///
    /// Silently ignored once the channel already holds [`MAX_SINKS`] sinks.
    pub fn add_sink(&mut self, sink: Box<dyn Sink>) {
        if self.sinks.len() >= MAX_SINKS {
            return;
        }
        self.sinks.push(sink);
    }

    /// Sink at `index`, or `None` when out of range.
    pub fn sink(&self, index: usize) -> Option<&dyn Sink> {
        self.sinks.get(index).map(|sink| sink.as_ref())
    }

    /// Number of attached sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no sinks are attached.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Write `line` unmodified to every sink in insertion order.
    ///
    /// Synchronous: returns only after every sink's write has returned. One
    /// sink failing must not keep the line from the rest, so per-sink errors
    /// are swallowed here.
    pub fn dispatch(&mut self, line: &str) {
        for sink in &mut self.sinks {
            let _ = sink.write(line);
        }
    }

    /// Close every sink in insertion order, even when an earlier one reports
    /// an error. Buffered sinks flush here, so this must run before the
    /// channel is dropped if the last lines matter.
    pub fn close(&mut self) {
        for sink in &mut self.sinks {
            let _ = sink.close();
        }
    }
}
