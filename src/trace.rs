//! Structured mutation events, compiled in only with the `tracing` feature.

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled and
/// expands to nothing otherwise.
macro_rules! graph_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use graph_trace;
