//! Ordered textual layouts accepted on the write path.
//!
//! Each layout is a `chrono` format string. Layouts are tried in table order
//! and the first one that parses wins. `%.f` takes an optional fraction of
//! any width, so one row covers the millisecond, microsecond and nanosecond
//! spellings, and longer fractions are cut at nanoseconds. Both column kinds
//! share the table. An offset suffix is validated and then dropped: the wall
//! clock as written is stored.

use chrono::NaiveTime;
use timecol_types::TimeKind;

/// Layouts in the order they are tried.
pub const LAYOUTS: [&str; 7] = [
    "%H:%M:%S",
    "%H:%M",
    "%H:%M:%S%.f",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%H:%M:%S %:z",
    "%H:%M:%S%.f %:z",
];

/// Output layout used when a row is read as text.
#[must_use]
pub const fn output_layout(kind: TimeKind) -> &'static str {
    match kind {
        TimeKind::Time => "%H:%M:%S",
        // 0, 3, 6 or 9 fractional digits, whichever is shortest
        TimeKind::Time64 => "%H:%M:%S%.f",
    }
}

/// Wall-clock time of `value` under the first matching layout.
#[must_use]
pub fn parse_wall_clock(value: &str, layouts: &[&str]) -> Option<NaiveTime> {
    layouts
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(value, layout).ok())
}
