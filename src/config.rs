//! Typed configuration surface consumed by external wiring.
//!
//! This crate does not read or parse configuration files. The embedder
//! deserializes these types from whatever format it uses (TOML in practice)
//! and calls the documented constructors: one
//! [`RollingFileSink::open`](crate::sink::RollingFileSink::open) per file
//! entry, [`Channel::add_sink`](crate::Channel::add_sink) in list order, and
//! [`Dispatcher::register_debug_channel`](crate::Dispatcher::register_debug_channel)
//! per named debug stream.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for one [`RollingFileSink`](crate::sink::RollingFileSink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSinkSettings {
    /// Base log file path; backups are `<base>.1` through `<base>.N`.
    pub base_file_name: PathBuf,
    /// Size threshold in bytes past which the sink rolls over.
    pub max_file_size: u64,
    /// Retained backup generations. `0` disables rotation.
    #[serde(default)]
    pub max_backups: u16,
}

/// One sink entry in a channel's ordered sink list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SinkSettings {
    /// Sink writing to standard output.
    Console,
    /// Size-rotating file sink.
    File(FileSinkSettings),
}

/// Ordered sink list for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChannelSettings {
    /// Fanout order. Entries beyond the channel capacity are ignored by
    /// [`Channel::add_sink`](crate::Channel::add_sink).
    #[serde(default)]
    pub sinks: Vec<SinkSettings>,
}

/// A named debug stream registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugChannelSettings {
    /// Stream name referenced by `log_debug!` call sites.
    pub name: String,
    /// Sinks for the stream.
    #[serde(flatten)]
    pub channel: ChannelSettings,
}
