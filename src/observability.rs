//! Logging for the filter engine.
//!
//! Events go through `tracing` under the `table_filter` target and carry an
//! `event` field. The library never installs a subscriber; the `tfq` binary
//! sets one up from `RUST_LOG` or its `-v` flags.

/// Target for all log events emitted by this crate.
pub(crate) const FILTER_TARGET: &str = "table_filter";

/// Debug-level event.
///
/// ```ignore
/// log_debug!(event = "filter_compiled", columns = map.len());
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::FILTER_TARGET, $($field)*)
    };
}

/// Trace-level event, for per-query detail such as the parsed tree.
macro_rules! log_trace {
    ($($field:tt)*) => {
        ::tracing::trace!(target: $crate::observability::FILTER_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_trace;
