//! Fanlog - synchronous leveled logging with sink fanout and size-based
//! file rotation.
//!
//! This library provides the core functionality for process-local logging:
//! - Four fixed severity categories (fatal, error, warn, info), each bound
//!   to its own [`Channel`], plus dynamically named debug streams
//! - Pluggable [`Sink`]s per channel: console and size-rotating file
//! - Optional call-site annotation (file, line, function) per line
//!
//! # Example
//!
//! ```
//! use fanlog::{Category, ConsoleSink, Dispatcher};
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher
//!     .channel_mut(Category::Info)
//!     .add_sink(Box::new(ConsoleSink::new()));
//!
//! fanlog::log_info!(dispatcher, "listening on {}", 8080);
//! dispatcher.close();
//! ```
//!
//! # Concurrency
//!
//! Channels and sinks do no internal locking; one logical writer per
//! dispatcher is a precondition. Wrap the dispatcher in a
//! [`SharedDispatcher`] when several threads must log through it.
//!
//! # Failure policy
//!
//! A logging subsystem must never be the reason the host process crashes.
//! Open and rotation failures degrade the affected sink to dropping writes,
//! with a single stderr diagnostic; misuse (over-capacity add, out-of-range
//! index, unregistered debug name) is a silent no-op. Log loss under these
//! conditions is an accepted, documented property.

pub mod callsite;
pub mod channel;
pub mod config;
pub mod dispatcher;
pub mod level;
mod macros;
pub mod sink;
pub mod sync;

pub use callsite::CallSite;
pub use channel::{Channel, MAX_SINKS};
pub use dispatcher::Dispatcher;
pub use level::{Category, Level};
pub use sink::{ConsoleSink, RollingFileSink, Sink, SinkError};
pub use sync::SharedDispatcher;
