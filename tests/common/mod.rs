//! Shared helpers for the column integration tests.

#![allow(dead_code)]

use chrono::NaiveTime;
use timecol::core::on_sentinel_day;
use timecol::prelude::*;

/// Build a column through the IANA registry, no default zone.
pub fn column(type_name: &str) -> AnyTimeColumn {
    ColumnBuilder::new("col", type_name)
        .build()
        .unwrap_or_else(|e| panic!("building {type_name}: {e}"))
}

/// Wall-clock instant on the sentinel day.
pub fn at(h: u32, m: u32, s: u32) -> TimeValue {
    on_sentinel_day(NaiveTime::from_hms_opt(h, m, s).unwrap())
}

pub fn at_nano(h: u32, m: u32, s: u32, nano: u32) -> TimeValue {
    on_sentinel_day(NaiveTime::from_hms_nano_opt(h, m, s, nano).unwrap())
}

pub fn read_text(col: &AnyTimeColumn, index: usize) -> String {
    let mut text = String::new();
    col.scan_row(Dest::from(&mut text), index).unwrap();
    text
}

pub fn read_ticks(col: &AnyTimeColumn, index: usize) -> i64 {
    let mut ticks = 0i64;
    col.scan_row(Dest::from(&mut ticks), index).unwrap();
    ticks
}

pub fn read_instant(col: &AnyTimeColumn, index: usize) -> TimeValue {
    match col.row(index, false).unwrap() {
        Value::Instant(instant) => instant,
        other => panic!("expected an instant, got {other:?}"),
    }
}
