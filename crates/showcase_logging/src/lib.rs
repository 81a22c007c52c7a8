#![deny(missing_docs)]
//! Shared logging utilities for the showcase workspace.
//!
//! This crate provides the `showcase_*` logging macros used across the
//! codebase, a per-thread event sequence that ties asynchronous completions
//! back to the DOM event that started them, and a minimal test initializer for
//! the global logger.

use std::cell::Cell;

thread_local! {
    /// Sequence number of the DOM event currently being handled on this thread.
    static EVENT_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Starts handling a new event and returns its sequence number.
/// The platform layer calls this once per dispatched DOM event.
pub fn begin_event() -> u64 {
    EVENT_SEQ.with(|seq| {
        let next = seq.get().wrapping_add(1);
        seq.set(next);
        next
    })
}

/// Retrieves the sequence number of the event currently being handled.
/// Returns 0 before the first event.
pub fn current_event() -> u64 {
    EVENT_SEQ.with(|seq| seq.get())
}

/// Logs a trace-level message tagged with the current event sequence.
#[macro_export]
macro_rules! showcase_trace {
    ($($arg:tt)*) => {{
        log::trace!("[ev {}] {}", $crate::current_event(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current event sequence.
#[macro_export]
macro_rules! showcase_debug {
    ($($arg:tt)*) => {{
        log::debug!("[ev {}] {}", $crate::current_event(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current event sequence.
#[macro_export]
macro_rules! showcase_info {
    ($($arg:tt)*) => {{
        log::info!("[ev {}] {}", $crate::current_event(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current event sequence.
#[macro_export]
macro_rules! showcase_warn {
    ($($arg:tt)*) => {{
        log::warn!("[ev {}] {}", $crate::current_event(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current event sequence.
#[macro_export]
macro_rules! showcase_error {
    ($($arg:tt)*) => {{
        log::error!("[ev {}] {}", $crate::current_event(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
