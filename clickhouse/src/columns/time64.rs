//! `Time64(p)` column: `10^-p` second units since midnight stored as `Int64`.

use bytes::{Buf, BytesMut};
use chrono_tz::Tz;
use timecol_core::{
    Batch, ColumnTypeDescriptor, Converter, Dest, Result, TimeError, TimeValue,
    TimezoneRegistry, Value, timecol_trace_append, timecol_trace_parse,
};
use timecol_types::{Precision, TimeKind, TimeType};

use crate::traits::{Column, CustomSerialization};
use crate::wire::ColTime64;

/// A `Time64(p)` or `Time64(p, '<zone>')` column.
///
/// Integer input is a tick count at the declared precision.
#[derive(Debug, Clone)]
pub struct Time64Column {
    name: String,
    type_name: String,
    precision: Option<Precision>,
    binary_type_tag: u8,
    converter: Converter,
    col: ColTime64,
}

impl Time64Column {
    /// Build a column from its descriptor. A `Time` descriptor is rejected.
    pub fn parse(
        name: impl Into<String>,
        type_name: impl Into<String>,
        default_timezone: Option<Tz>,
        registry: &dyn TimezoneRegistry,
    ) -> Result<Self> {
        let type_name = type_name.into();
        let ty = TimeType::parse(&type_name)?;
        Self::from_type(name.into(), type_name, &ty, default_timezone, registry)
    }

    pub(crate) fn from_type(
        name: String,
        type_name: String,
        ty: &TimeType,
        default_timezone: Option<Tz>,
        registry: &dyn TimezoneRegistry,
    ) -> Result<Self> {
        let Some(binary_type_tag) = ty.binary_type_tag() else {
            return Err(TimeError::UnsupportedColumnType(type_name));
        };
        debug_assert_eq!(ty.kind(), TimeKind::Time64);

        let descriptor = ColumnTypeDescriptor::resolve(ty, default_timezone, registry)?;
        timecol_trace_parse!(&name, &type_name, descriptor.timezone.is_some());

        let mut col = ColTime64::new();
        if let Some(precision) = descriptor.precision {
            col = col.with_precision(precision);
        }

        Ok(Self {
            name,
            type_name,
            precision: descriptor.precision,
            binary_type_tag,
            converter: Converter::from_descriptor(&descriptor),
            col,
        })
    }

    /// Declared precision.
    #[must_use]
    pub const fn precision(&self) -> Option<Precision> {
        self.precision
    }

    #[must_use]
    pub const fn timezone(&self) -> Option<Tz> {
        self.converter.timezone()
    }

    /// Tag used by dynamic/variant encodings:
    /// [`timecol_types::BINARY_TYPE_TIME64_UTC`] when the descriptor names no
    /// zone, [`timecol_types::BINARY_TYPE_TIME64_WITH_TIMEZONE`] otherwise.
    #[must_use]
    pub const fn binary_type_tag(&self) -> u8 {
        self.binary_type_tag
    }

    fn tick(&self, index: usize) -> Result<i64> {
        self.col.row(index).ok_or(TimeError::RowOutOfRange {
            index,
            rows: self.col.rows(),
        })
    }
}

impl Column for Time64Column {
    fn reset(&mut self) {
        self.col.reset();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn column_type(&self) -> &str {
        &self.type_name
    }

    fn scan_type(&self) -> &'static str {
        core::any::type_name::<TimeValue>()
    }

    fn rows(&self) -> usize {
        self.col.rows()
    }

    fn row(&self, index: usize, want_reference: bool) -> Result<Value<'static>> {
        let instant = self.converter.instant(self.tick(index)?)?;
        Ok(if want_reference {
            Value::OptionalInstant(Some(instant))
        } else {
            Value::Instant(instant)
        })
    }

    fn scan_row(&self, dest: Dest<'_>, index: usize) -> Result<()> {
        self.converter.scan(self.tick(index)?, dest)
    }

    fn append(&mut self, batch: Batch<'_>) -> Result<Vec<u8>> {
        let converted = self.converter.batch_ticks("Append", batch)?;
        timecol_trace_append!("append", &self.name, converted.ticks.len());
        self.col.extend(converted.ticks);
        Ok(converted.nulls)
    }

    fn append_row(&mut self, value: Value<'_>) -> Result<()> {
        let tick = self.converter.row_ticks("AppendRow", value)?;
        self.col.append(tick);
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Buf, rows: usize) -> Result<()> {
        self.col.decode_column(reader, rows)?;
        timecol_trace_append!("decode", &self.name, rows);
        Ok(())
    }

    fn encode(&self, buffer: &mut BytesMut) {
        self.col.encode_column(buffer);
    }
}

impl CustomSerialization for Time64Column {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use timecol_core::{IanaRegistry, NullTime};
    use timecol_types::{BINARY_TYPE_TIME64_UTC, BINARY_TYPE_TIME64_WITH_TIMEZONE};

    fn column(type_name: &str) -> Time64Column {
        Time64Column::parse("t64", type_name, None, &IanaRegistry).unwrap()
    }

    #[test]
    fn test_parse() {
        let col = column("Time64(3)");
        assert_eq!(col.precision(), Some(Precision::MILLIS));
        assert_eq!(col.timezone(), None);
        assert_eq!(col.binary_type_tag(), BINARY_TYPE_TIME64_UTC);

        let zoned = column("Time64(6, 'UTC')");
        assert_eq!(zoned.precision(), Some(Precision::MICROS));
        assert_eq!(zoned.timezone(), Some(Tz::UTC));
        assert_eq!(zoned.binary_type_tag(), BINARY_TYPE_TIME64_WITH_TIMEZONE);
        assert_eq!(zoned.column_type(), "Time64(6, 'UTC')");
    }

    #[test]
    fn test_rejects_time() {
        let err = Time64Column::parse("t64", "Time('UTC')", None, &IanaRegistry).unwrap_err();
        assert!(matches!(err, TimeError::UnsupportedColumnType(_)));

        let err = Time64Column::parse("t64", "Time64(bad)", None, &IanaRegistry).unwrap_err();
        assert!(matches!(err, TimeError::TypeParse(_)));
    }

    #[test]
    fn test_fraction_round_trip() {
        let mut col = column("Time64(6)");
        col.append_row("12:30:45.123456".into()).unwrap();
        col.append_row("12:30:45".into()).unwrap();

        let mut text = String::new();
        col.scan_row(Dest::from(&mut text), 0).unwrap();
        assert!(text.contains("12:30:45.123456"));

        col.scan_row(Dest::from(&mut text), 1).unwrap();
        assert_eq!(text, "12:30:45");

        let mut tick = 0i64;
        col.scan_row(Dest::from(&mut tick), 0).unwrap();
        assert_eq!(tick, 45_045_123_456);
    }

    #[test]
    fn test_integer_input_uses_declared_scale() {
        let mut col = column("Time64(3)");
        col.append_row(Value::Ticks(1_500)).unwrap();

        let Value::Instant(instant) = col.row(0, false).unwrap() else {
            panic!("expected an instant");
        };
        assert_eq!(instant.second(), 1);
        assert_eq!(instant.nanosecond(), 500_000_000);
    }

    #[test]
    fn test_batch_is_atomic() {
        let mut col = column("Time64(9)");
        col.append_row(Value::Ticks(1)).unwrap();

        let texts = vec!["00:00:01".to_string(), "not a time".to_string()];
        assert!(col.append(Batch::from(texts)).is_err());
        assert_eq!(col.rows(), 1);

        let nulls = col
            .append(Batch::from(vec![Some(NullTime::null()), None]))
            .unwrap();
        assert_eq!(nulls, vec![1, 1]);
        assert_eq!(col.rows(), 3);
    }

    #[test]
    fn test_wire_round_trip() {
        let mut col = column("Time64(9, 'UTC')");
        col.append(Batch::from(vec![0i64, 1, 86_399_999_999_999]))
            .unwrap();

        let mut buffer = BytesMut::new();
        col.encode(&mut buffer);
        assert_eq!(buffer.len(), 24);

        let mut decoded = column("Time64(9, 'UTC')");
        decoded.decode(&mut buffer.freeze(), 3).unwrap();
        assert_eq!(decoded.rows(), 3);

        let Value::OptionalInstant(Some(last)) = decoded.row(2, true).unwrap() else {
            panic!("expected a reference shape");
        };
        assert_eq!(last.hour(), 23);
        assert_eq!(last.nanosecond(), 999_999_999);
    }

    #[test]
    fn test_short_decode() {
        let mut col = column("Time64(3)");
        let mut input: &[u8] = &[0; 7];
        assert!(matches!(
            col.decode(&mut input, 1),
            Err(TimeError::Decode(_))
        ));
    }
}
