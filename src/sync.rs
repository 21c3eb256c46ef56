//! Opt-in synchronized wrapper around [`Dispatcher`].
//!
//! The plain dispatcher is deliberately single-writer: no internal locking
//! anywhere on the write path. Embedders that need to log from several
//! threads wrap it here instead. Every call takes the one mutex for the
//! duration of the fanout, so a slow sink blocks all logging threads; that
//! is the documented cost of the synchronous design.

use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use crate::callsite::CallSite;
use crate::dispatcher::Dispatcher;
use crate::level::Category;

/// Cloneable, internally synchronized handle over a [`Dispatcher`].
///
/// The logging macros work through this handle unchanged, since it exposes
/// the same entry points with `&self`. A poisoned lock (a thread panicked
/// while logging) drops the message instead of propagating the panic; the
/// logging subsystem never takes the host process down.
#[derive(Clone)]
pub struct SharedDispatcher {
    inner: Arc<Mutex<Dispatcher>>,
}

impl SharedDispatcher {
    /// Wrap a fully wired dispatcher.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dispatcher)),
        }
    }

    /// Run `f` with exclusive access to the wrapped dispatcher, e.g. for
    /// late sink wiring or debug-channel registration. Returns `None` when
    /// the lock is poisoned.
    pub fn with<R>(&self, f: impl FnOnce(&mut Dispatcher) -> R) -> Option<R> {
        self.inner.lock().ok().map(|mut dispatcher| f(&mut dispatcher))
    }

    /// Set the time stamped into subsequently formatted lines.
    pub fn set_time(&self, now: NaiveDateTime) {
        if let Ok(mut dispatcher) = self.inner.lock() {
            dispatcher.set_time(now);
        }
    }

    /// Format `content` and fan it out on the category channel.
    pub fn message(&self, category: Category, call_site: Option<CallSite>, content: &str) {
        if let Ok(mut dispatcher) = self.inner.lock() {
            dispatcher.message(category, call_site, content);
        }
    }

    /// Format `content` and fan it out on the named debug stream.
    pub fn debug_message(&self, name: &str, call_site: Option<CallSite>, content: &str) {
        if let Ok(mut dispatcher) = self.inner.lock() {
            dispatcher.debug_message(name, call_site, content);
        }
    }

    /// Close every channel of the wrapped dispatcher, flushing sinks.
    pub fn close(&self) {
        if let Ok(mut dispatcher) = self.inner.lock() {
            dispatcher.close();
        }
    }
}
