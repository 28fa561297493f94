//! Events emitted by Time and Time64 columns.
//!
//! Three events exist: a descriptor was parsed into a column, rows were
//! appended or decoded, and text was stored as a bare tick count after no
//! layout matched. Each macro expands behind `#[cfg(feature = "tracing")]` in
//! the crate that invokes it, so a column crate must declare its own
//! `tracing` feature and enable `timecol-core/tracing` from it. Without that
//! feature the expansion is empty and the arguments are never evaluated.

/// Emit a debug-level event once a column descriptor has been parsed.
///
/// ```ignore
/// timecol_trace_parse!(&name, &type_name, timezone.is_some());
/// ```
#[macro_export]
macro_rules! timecol_trace_parse {
    ($column:expr, $type_name:expr, $zoned:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(column = %$column, ty = %$type_name, zoned = $zoned, "timecol.parse");
    };
}

/// Emit a trace-level event for rows entering a column.
///
/// ```ignore
/// timecol_trace_append!("append", &self.name, ticks.len());
/// timecol_trace_append!("decode", &self.name, rows);
/// ```
#[macro_export]
macro_rules! timecol_trace_append {
    ($event:literal, $column:expr, $rows:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(event = $event, column = %$column, rows = $rows, "timecol.rows");
    };
}

/// Emit a debug-level event when textual input was read as a bare tick count.
#[macro_export]
macro_rules! timecol_trace_fallback {
    ($target:expr, $value:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(target_type = $target, value = %$value, "timecol.text_as_ticks");
    };
}
