//! Tick arithmetic.
//!
//! A tick is a signed count of `10^-p` second units since midnight of the
//! sentinel day (1970-01-01 UTC). Conversions here are pure integer math on
//! top of `chrono`; no calendar normalisation is involved, so the sign of a
//! tick survives every round trip. A negative tick lands on 1969-12-31.

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use timecol_types::Precision;

use crate::error::{Result, TimeError};

/// Canonical in-memory shape of a time-of-day value.
///
/// Only the wall-clock part is meaningful. The date is the sentinel day
/// before timezone projection and may shift after it.
pub type TimeValue = DateTime<Tz>;

const SECONDS_PER_DAY: i64 = 86_400;
const MAX_NANOS: u32 = 999_999_999;

/// Midnight of the sentinel day, tick `0`.
#[must_use]
pub fn sentinel_midnight() -> TimeValue {
    DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Tz::UTC)
}

/// Anchor a wall-clock time on the sentinel day, in UTC.
#[must_use]
pub fn on_sentinel_day(time: NaiveTime) -> TimeValue {
    DateTime::<Utc>::UNIX_EPOCH
        .date_naive()
        .and_time(time)
        .and_utc()
        .with_timezone(&Tz::UTC)
}

/// Instant `ticks` units after sentinel midnight, in UTC.
pub fn instant_from_ticks(ticks: i64, precision: Precision) -> Result<TimeValue> {
    let per_second = precision.units_per_second();
    let seconds = ticks.div_euclid(per_second);
    let fraction = ticks.rem_euclid(per_second) * precision.nanos_per_unit();
    let nanos = u32::try_from(fraction).map_err(|_| TimeError::TickOutOfRange(ticks))?;

    DateTime::from_timestamp(seconds, nanos)
        .map(|utc| utc.with_timezone(&Tz::UTC))
        .ok_or(TimeError::TickOutOfRange(ticks))
}

/// Ticks of a wall-clock time since midnight. Sub-unit digits are truncated.
#[must_use]
pub fn ticks_from_time(time: NaiveTime, precision: Precision) -> i64 {
    let seconds = i64::from(time.num_seconds_from_midnight());
    // leap seconds carry nanos >= 1e9
    let nanos = i64::from(time.nanosecond().min(MAX_NANOS));
    seconds * precision.units_per_second() + nanos / precision.nanos_per_unit()
}

/// Number of ticks in one day at `precision`.
#[must_use]
pub const fn ticks_per_day(precision: Precision) -> i64 {
    SECONDS_PER_DAY * precision.units_per_second()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sentinel() {
        let midnight = sentinel_midnight();
        assert_eq!(midnight.timezone(), Tz::UTC);
        assert_eq!(midnight.time(), NaiveTime::MIN);
        assert_eq!(midnight.timestamp(), 0);
        assert_eq!(instant_from_ticks(0, Precision::SECONDS).unwrap(), midnight);
    }

    #[test]
    fn test_round_trip_seconds() {
        for t in (0..ticks_per_day(Precision::SECONDS)).step_by(7) {
            let instant = instant_from_ticks(t, Precision::SECONDS).unwrap();
            assert_eq!(ticks_from_time(instant.time(), Precision::SECONDS), t);
        }
    }

    #[test]
    fn test_round_trip_every_precision() {
        for digits in 0..=9 {
            let precision = Precision::new(digits).unwrap();
            let day = ticks_per_day(precision);
            for t in [0, 1, 59, day / 3, day / 2 + 17, day - 1] {
                let instant = instant_from_ticks(t, precision).unwrap();
                assert_eq!(instant.date_naive(), midnight_date());
                assert_eq!(ticks_from_time(instant.time(), precision), t, "p={digits} t={t}");
            }
        }
    }

    #[test]
    fn test_negative_tick_lands_before_midnight() {
        let instant = instant_from_ticks(-1, Precision::SECONDS).unwrap();
        assert_eq!(instant, Tz::UTC.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap());

        let instant = instant_from_ticks(-1, Precision::MILLIS).unwrap();
        assert_eq!(instant.time(), NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap());
        assert_eq!(instant.timestamp_millis(), -1);
    }

    #[test]
    fn test_beyond_one_day() {
        let instant = instant_from_ticks(90_000, Precision::SECONDS).unwrap();
        assert_eq!(instant.timestamp(), 90_000);
        assert_eq!(instant.time(), NaiveTime::from_hms_opt(1, 0, 0).unwrap());
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            instant_from_ticks(i64::MAX, Precision::SECONDS),
            Err(TimeError::TickOutOfRange(i64::MAX))
        ));
        assert!(instant_from_ticks(i64::MAX, Precision::NANOS).is_ok());
    }

    #[test]
    fn test_truncates_finer_digits() {
        let time = NaiveTime::from_hms_nano_opt(12, 30, 45, 123_456_789).unwrap();
        assert_eq!(ticks_from_time(time, Precision::SECONDS), 45_045);
        assert_eq!(ticks_from_time(time, Precision::MILLIS), 45_045_123);
        assert_eq!(ticks_from_time(time, Precision::NANOS), 45_045_123_456_789);
    }

    fn midnight_date() -> chrono::NaiveDate {
        sentinel_midnight().date_naive()
    }
}
