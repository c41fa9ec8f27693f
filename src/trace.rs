//! Feature-gated structured logging.
//!
//! With the `tracing` feature enabled, `trace_event!` forwards to
//! `tracing::debug!`; otherwise it expands to nothing and its arguments are
//! not evaluated.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_event;
