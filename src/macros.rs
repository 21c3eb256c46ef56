//! Leveled logging macros.
//!
//! Each macro formats its arguments with `format!` and forwards to
//! [`Dispatcher::message`](crate::Dispatcher::message) or
//! [`debug_message`](crate::Dispatcher::debug_message). The `_loc` variants
//! additionally capture the call site (file, line, enclosing function) and
//! the plain variants leave the location segment empty.
//!
//! All variants also work through a [`SharedDispatcher`](crate::SharedDispatcher),
//! whose entry points have the same names.

/// Log an info line without call-site annotation.
#[macro_export]
macro_rules! log_info {
    ($dispatcher:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.message($crate::level::Category::Info, None, &__content);
    }};
}

/// Log an info line annotated with the call site.
#[macro_export]
macro_rules! log_info_loc {
    ($dispatcher:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.message(
            $crate::level::Category::Info,
            Some($crate::callsite!()),
            &__content,
        );
    }};
}

/// Log a warn line without call-site annotation.
#[macro_export]
macro_rules! log_warn {
    ($dispatcher:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.message($crate::level::Category::Warn, None, &__content);
    }};
}

/// Log a warn line annotated with the call site.
#[macro_export]
macro_rules! log_warn_loc {
    ($dispatcher:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.message(
            $crate::level::Category::Warn,
            Some($crate::callsite!()),
            &__content,
        );
    }};
}

/// Log an error line without call-site annotation.
#[macro_export]
macro_rules! log_error {
    ($dispatcher:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.message($crate::level::Category::Error, None, &__content);
    }};
}

/// Log an error line annotated with the call site.
#[macro_export]
macro_rules! log_error_loc {
    ($dispatcher:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.message(
            $crate::level::Category::Error,
            Some($crate::callsite!()),
            &__content,
        );
    }};
}

/// Log a fatal line without call-site annotation.
#[macro_export]
macro_rules! log_fatal {
    ($dispatcher:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.message($crate::level::Category::Fatal, None, &__content);
    }};
}

/// Log a fatal line annotated with the call site.
#[macro_export]
macro_rules! log_fatal_loc {
    ($dispatcher:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.message(
            $crate::level::Category::Fatal,
            Some($crate::callsite!()),
            &__content,
        );
    }};
}

/// Log a debug line on the named stream, without call-site annotation.
///
/// A name with no registered debug channel drops the line silently.
#[macro_export]
macro_rules! log_debug {
    ($dispatcher:expr, $name:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.debug_message($name, None, &__content);
    }};
}

/// Log a debug line on the named stream, annotated with the call site.
#[macro_export]
macro_rules! log_debug_loc {
    ($dispatcher:expr, $name:expr, $($arg:tt)*) => {{
        let __content = format!($($arg)*);
        $dispatcher.debug_message($name, Some($crate::callsite!()), &__content);
    }};
}
