//! Feature-gated `tracing` events.
//!
//! With the `tracing` feature off every macro expands to nothing, so the hot
//! paths carry no logging cost at all.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "nullable", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! error_event {
    ($($arg:tt)*) => {
        ::tracing::error!(target: "nullable", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! error_event {
    ($($arg:tt)*) => {};
}
