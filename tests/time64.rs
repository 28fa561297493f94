mod common;

use bytes::BytesMut;
use chrono::{Timelike, Utc};
use chrono_tz::Tz;
use common::*;
use timecol::CustomSerialization;
use timecol::core::ticks_per_day;
use timecol::prelude::*;
use timecol::types::{BINARY_TYPE_TIME64_UTC, BINARY_TYPE_TIME64_WITH_TIMEZONE};

#[test]
fn descriptor_forms() {
    let millis = column("Time64(3)");
    let millis = millis.as_time64().unwrap();
    assert_eq!(millis.precision(), Some(Precision::MILLIS));
    assert_eq!(millis.timezone(), None);
    assert_eq!(millis.binary_type_tag(), BINARY_TYPE_TIME64_UTC);

    let micros = column("Time64(6, 'UTC')");
    let micros = micros.as_time64().unwrap();
    assert_eq!(micros.precision(), Some(Precision::MICROS));
    assert_eq!(micros.timezone(), Some(Tz::UTC));
    assert_eq!(micros.binary_type_tag(), BINARY_TYPE_TIME64_WITH_TIMEZONE);

    let defaulted = ColumnBuilder::new("col", "Time64(3)")
        .default_timezone(Tz::Europe__Lisbon)
        .build()
        .unwrap();
    assert_eq!(defaulted.timezone(), Some(Tz::Europe__Lisbon));

    for bad in ["Time64(bad)", "Time64(10)", "Time64(3, UTC)"] {
        let err = ColumnBuilder::new("col", bad).build().unwrap_err();
        assert!(matches!(err, TimeError::TypeParse(_)), "{bad}: {err}");
    }
    let err = ColumnBuilder::new("col", "Time64(3,4,5)").build().unwrap_err();
    assert!(matches!(err, TimeError::UnsupportedColumnType(_)));
}

#[test]
fn tick_round_trip_at_every_scale() {
    for digits in 0..=9u8 {
        let precision = Precision::new(digits).unwrap();
        let mut col = column(&format!("Time64({digits})"));
        let last = ticks_per_day(precision) - 1;
        let ticks = vec![0, 1, last / 2, last];
        col.append(Batch::from(ticks.clone())).unwrap();

        for (index, expected) in ticks.iter().enumerate() {
            assert_eq!(read_ticks(&col, index), *expected, "Time64({digits})");
        }
    }
}

#[test]
fn text_round_trip() {
    let mut col = column("Time64(6)");
    col.append_row("12:30:45.123456".into()).unwrap();
    col.append_row("12:30:45".into()).unwrap();
    col.append_row("12:30:45.5".into()).unwrap();
    col.append_row("11:00:00.000250 -03:00".into()).unwrap();
    col.append_row("07:45:00.12 +01:00".into()).unwrap();

    assert!(read_text(&col, 0).contains("12:30:45.123456"));
    assert_eq!(read_text(&col, 1), "12:30:45");
    assert_eq!(read_text(&col, 2), "12:30:45.500");
    assert_eq!(read_text(&col, 3), "11:00:00.000250");
    assert_eq!(read_text(&col, 4), "07:45:00.120");
}

#[test]
fn fractions_are_truncated_to_scale() {
    let mut col = column("Time64(3)");
    col.append_row("00:00:01.999999".into()).unwrap();
    col.append_row(at_nano(0, 0, 2, 123_999_999).into()).unwrap();

    assert_eq!(read_ticks(&col, 0), 1_999);
    assert_eq!(read_ticks(&col, 1), 2_123);
}

#[test]
fn integers_are_ticks_at_declared_scale() {
    let mut col = column("Time64(3)");
    col.append_row(Value::Ticks(45_045_123)).unwrap();
    col.append_row("45045123".into()).unwrap();

    assert_eq!(read_text(&col, 0), "12:30:45.123");
    assert_eq!(read_text(&col, 1), "12:30:45.123");
}

#[test]
fn null_time_indicators() {
    let mut col = column("Time64(9)");
    let nulls = col
        .append(Batch::from(vec![
            NullTime::null(),
            NullTime::new(at(8, 15, 30)),
        ]))
        .unwrap();
    assert_eq!(nulls, vec![1, 0]);

    assert_eq!(read_ticks(&col, 0), 0);
    assert_eq!(read_instant(&col, 1), at(8, 15, 30));
}

#[test]
fn negative_ticks() {
    let mut col = column("Time64(3)");
    col.append_row(Value::Ticks(-1)).unwrap();
    assert_eq!(read_ticks(&col, 0), -1);
    assert_eq!(read_text(&col, 0), "23:59:59.999");

    let instant = read_instant(&col, 0).with_timezone(&Utc);
    assert_eq!(instant.date_naive().to_string(), "1969-12-31");

    let mut zoned = column("Time64(3, 'UTC')");
    zoned.append_row(Value::Ticks(-1)).unwrap();
    assert_eq!(read_ticks(&zoned, 0), 86_399_999);
}

#[test]
fn zone_applies_on_read_only() {
    let mut col = column("Time64(3, 'America/Sao_Paulo')");
    col.append_row("06:00:00.500".into()).unwrap();

    let instant = read_instant(&col, 0);
    assert_eq!(instant.hour(), 3);
    assert_eq!(instant.nanosecond(), 500_000_000);

    let mut buffer = BytesMut::new();
    col.encode(&mut buffer);
    assert_eq!(&buffer[..], &21_600_500i64.to_le_bytes());
}

#[test]
fn batch_failure_leaves_column_untouched() {
    let mut col = column("Time64(3)");
    col.append(Batch::from(vec![1i64, 2])).unwrap();

    let texts = ["00:00:01", "00:00:02", "later"];
    let err = col.append(Batch::from(&texts[..])).unwrap_err();
    assert!(matches!(err, TimeError::InvalidTimeValue { target: "Time64", .. }));
    assert_eq!(col.rows(), 2);
}

#[test]
fn destinations() {
    let mut col = column("Time64(3)");
    col.append_row("08:15:30.250".into()).unwrap();

    let mut instant: Option<TimeValue> = None;
    col.scan_row(Dest::from(&mut instant), 0).unwrap();
    assert_eq!(instant.map(|i| i.nanosecond()), Some(250_000_000));

    let mut text: Option<String> = None;
    col.scan_row(Dest::from(&mut text), 0).unwrap();
    assert_eq!(text.as_deref(), Some("08:15:30.250"));

    let err = col.scan_row(Dest::from(&mut text), 1).unwrap_err();
    assert!(matches!(err, TimeError::RowOutOfRange { index: 1, rows: 1 }));

    let err = col.scan_row(Dest::Unsupported("&mut u8"), 0).unwrap_err();
    assert!(err.to_string().contains("&mut u8"));
}

#[test]
fn wire_round_trip() {
    let mut col = column("Time64(9)");
    col.append(Batch::from(vec![at_nano(23, 59, 59, 999_999_999), at(0, 0, 0)]))
        .unwrap();

    let mut buffer = BytesMut::new();
    col.write_state_prefix(&mut buffer).unwrap();
    col.encode(&mut buffer);
    assert_eq!(buffer.len(), 16);

    let mut decoded = column("Time64(9)");
    let mut input = buffer.freeze();
    decoded.read_state_prefix(&mut input).unwrap();
    decoded.decode(&mut input, 2).unwrap();
    assert_eq!(read_text(&decoded, 0), "23:59:59.999999999");
    assert_eq!(read_text(&decoded, 1), "00:00:00");
}
