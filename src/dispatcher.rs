//! Category-routing log dispatcher.

use std::collections::HashMap;

use chrono::{Local, NaiveDateTime};

use crate::callsite::CallSite;
use crate::channel::Channel;
use crate::level::{Category, Level};

/// Routes formatted lines to one channel per severity category plus any
/// number of named debug streams.
///
/// Every line is stamped with the dispatcher's *stored* time, not the wall
/// clock. Embedders drive it with [`set_time`](Self::set_time) once per tick
/// or frame, which also makes output byte-deterministic under test. The
/// clock starts at the local wall-clock time, so an un-driven dispatcher
/// still stamps a sensible value.
///
/// The dispatcher exclusively owns its channels, and each channel its sinks.
/// Two channels that should log to the same physical file need two
/// independent sink instances.
pub struct Dispatcher {
    fatal: Channel,
    error: Channel,
    warn: Channel,
    info: Channel,
    debug: HashMap<String, Channel>,
    now: NaiveDateTime,
}

impl Dispatcher {
    /// Create a dispatcher with empty category channels and no debug
    /// streams. Wiring attaches sinks through [`channel_mut`](Self::channel_mut)
    /// and [`register_debug_channel`](Self::register_debug_channel).
    pub fn new() -> Self {
        Self {
            fatal: Channel::new("fatal"),
            error: Channel::new("error"),
            warn: Channel::new("warn"),
            info: Channel::new("info"),
            debug: HashMap::new(),
            now: Local::now().naive_local(),
        }
    }

    /// Set the time stamped into subsequently formatted lines.
    pub fn set_time(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// Mutable access to a fixed category channel, for sink wiring.
    pub fn channel_mut(&mut self, category: Category) -> &mut Channel {
        match category {
            Category::Fatal => &mut self.fatal,
            Category::Error => &mut self.error,
            Category::Warn => &mut self.warn,
            Category::Info => &mut self.info,
        }
    }

    /// Register a named debug stream. Registering the same name again
    /// replaces the earlier channel.
    pub fn register_debug_channel(&mut self, name: impl Into<String>, channel: Channel) {
        self.debug.insert(name.into(), channel);
    }

    /// Mutable access to a registered debug stream, if any.
    pub fn debug_channel_mut(&mut self, name: &str) -> Option<&mut Channel> {
        self.debug.get_mut(name)
    }

    /// Format `content` and fan it out on the category channel.
    pub fn message(&mut self, category: Category, call_site: Option<CallSite>, content: &str) {
        let line = self.format_line(category.level(), call_site, content);
        self.channel_mut(category).dispatch(&line);
    }

    /// Format `content` and fan it out on the named debug stream.
    ///
    /// A name with no registered channel drops the message silently; an
    /// unwired debug call site must never be fatal.
    pub fn debug_message(&mut self, name: &str, call_site: Option<CallSite>, content: &str) {
        let line = self.format_line(Level::Debug, call_site, content);
        if let Some(channel) = self.debug.get_mut(name) {
            channel.dispatch(&line);
        }
    }

    /// Close every channel, fixed categories and debug streams alike,
    /// flushing their sinks. Call on shutdown and on crash paths: buffered
    /// file sinks lose their tail otherwise.
    pub fn close(&mut self) {
        self.fatal.close();
        self.error.close();
        self.warn.close();
        self.info.close();
        for channel in self.debug.values_mut() {
            channel.close();
        }
    }

    fn format_line(&self, level: Level, call_site: Option<CallSite>, content: &str) -> String {
        let location = call_site.map(|site| site.to_string()).unwrap_or_default();
        format!(
            "[{}] {} : {}{}\n",
            self.now.format("%Y-%m-%d %H:%M:%S"),
            level.as_str(),
            location,
            content
        )
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io;
    use std::sync::{Arc, Mutex};

    use crate::sink::Sink;

    /// Collects dispatched lines for assertions.
    struct CaptureSink {
        lines: Arc<Mutex<Vec<String>>>,
        closed: Arc<Mutex<bool>>,
    }

    impl CaptureSink {
        fn new(lines: &Arc<Mutex<Vec<String>>>, closed: &Arc<Mutex<bool>>) -> Self {
            Self {
                lines: Arc::clone(lines),
                closed: Arc::clone(closed),
            }
        }
    }

    impl Sink for CaptureSink {
        fn write(&mut self, line: &str) -> io::Result<()> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }

        fn close(&mut self) -> io::Result<()> {
            *self.closed.lock().unwrap() = true;
            Ok(())
        }
    }

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(13, 5, 9)
            .unwrap()
    }

    fn capturing_dispatcher(category: Category) -> (Dispatcher, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let closed = Arc::new(Mutex::new(false));
        let mut dispatcher = Dispatcher::new();
        dispatcher.set_time(fixed_time());
        dispatcher
            .channel_mut(category)
            .add_sink(Box::new(CaptureSink::new(&lines, &closed)));
        (dispatcher, lines)
    }

    #[test]
    fn test_line_format_without_call_site() {
        let (mut dispatcher, lines) = capturing_dispatcher(Category::Info);
        dispatcher.message(Category::Info, None, "server started");

        let lines = lines.lock().unwrap();
        assert_eq!(*lines, vec!["[2026-08-07 13:05:09] Info : server started\n"]);
    }

    #[test]
    fn test_line_format_with_call_site() {
        let (mut dispatcher, lines) = capturing_dispatcher(Category::Error);
        dispatcher.message(Category::Error, Some(crate::callsite!()), "boom");

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert!(line.starts_with("[2026-08-07 13:05:09] Error : [ dispatcher.rs: "));
        assert!(line.contains("]["));
        assert!(line.ends_with("boom\n"));
    }

    #[test]
    fn test_categories_route_to_their_own_channel() {
        let (mut dispatcher, warn_lines) = capturing_dispatcher(Category::Warn);
        dispatcher.message(Category::Warn, None, "low disk");
        dispatcher.message(Category::Info, None, "ignored, no sink");

        let warn_lines = warn_lines.lock().unwrap();
        assert_eq!(warn_lines.len(), 1);
        assert!(warn_lines[0].contains("Warn : low disk"));
    }

    #[test]
    fn test_registered_debug_stream_routes() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let closed = Arc::new(Mutex::new(false));
        let mut dispatcher = Dispatcher::new();
        dispatcher.set_time(fixed_time());

        let mut channel = Channel::new("ai");
        channel.add_sink(Box::new(CaptureSink::new(&lines, &closed)));
        dispatcher.register_debug_channel("ai", channel);

        dispatcher.debug_message("ai", None, "path found");

        let lines = lines.lock().unwrap();
        assert_eq!(*lines, vec!["[2026-08-07 13:05:09] Debug : path found\n"]);
    }

    #[test]
    fn test_unregistered_debug_stream_is_noop() {
        let (mut dispatcher, lines) = capturing_dispatcher(Category::Info);
        dispatcher.debug_message("nope", None, "dropped");
        assert!(lines.lock().unwrap().is_empty());
    }

    #[test]
    fn test_set_time_makes_output_deterministic() {
        let (mut dispatcher, lines) = capturing_dispatcher(Category::Info);
        dispatcher.message(Category::Info, None, "first");
        dispatcher.set_time(
            NaiveDate::from_ymd_opt(2027, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        );
        dispatcher.message(Category::Info, None, "second");

        let lines = lines.lock().unwrap();
        assert_eq!(lines[0], "[2026-08-07 13:05:09] Info : first\n");
        assert_eq!(lines[1], "[2027-01-02 03:04:05] Info : second\n");
    }

    #[test]
    fn test_close_reaches_fixed_and_debug_channels() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let info_closed = Arc::new(Mutex::new(false));
        let debug_closed = Arc::new(Mutex::new(false));

        let mut dispatcher = Dispatcher::new();
        dispatcher
            .channel_mut(Category::Info)
            .add_sink(Box::new(CaptureSink::new(&lines, &info_closed)));
        let mut channel = Channel::new("net");
        channel.add_sink(Box::new(CaptureSink::new(&lines, &debug_closed)));
        dispatcher.register_debug_channel("net", channel);

        dispatcher.close();

        assert!(*info_closed.lock().unwrap());
        assert!(*debug_closed.lock().unwrap());
    }
}
