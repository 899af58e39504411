#![deny(missing_docs)]
//! Shared logging utilities for the catalog workspace.
//!
//! This crate provides the `catalog_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Messages logged on a
//! thread that has an active request id are prefixed with `[req N]`, so the
//! lines for one search can be followed through the log.

use std::cell::Cell;

#[doc(hidden)]
pub use log as __log;

thread_local! {
    /// Thread-local storage for the request currently being handled.
    static REQUEST_ID: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Marks `id` as the request being handled on the current thread.
/// The front-end loop calls this when it dispatches or completes a fetch.
pub fn set_request_id(id: u64) {
    REQUEST_ID.with(|v| v.set(Some(id)));
}

/// Clears the request id for the current thread.
pub fn clear_request_id() {
    REQUEST_ID.with(|v| v.set(None));
}

/// Retrieves the request id for the current thread, if one is set.
pub fn current_request_id() -> Option<u64> {
    REQUEST_ID.with(|v| v.get())
}

#[doc(hidden)]
pub fn request_prefix() -> String {
    match current_request_id() {
        Some(id) => format!("[req {id}] "),
        None => String::new(),
    }
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
