//! Feature-gated structured tracing.

/// Emits a `TRACE` event under the `atomic_flag` target when the `tracing`
/// feature is enabled; expands to nothing otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "atomic_flag", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_event;
