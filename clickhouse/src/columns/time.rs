//! `Time` column: seconds since midnight stored as `Int32`.

use bytes::{Buf, BytesMut};
use chrono_tz::Tz;
use timecol_core::{
    Batch, ColumnTypeDescriptor, Converter, Dest, Result, TimeError, TimeValue,
    TimezoneRegistry, Value, timecol_trace_append, timecol_trace_parse,
};
use timecol_types::{TimeKind, TimeType};

use crate::traits::{Column, CustomSerialization};
use crate::wire::ColTime;

/// A `Time` or `Time('<zone>')` column.
///
/// Values are written as wall-clock seconds; the zone only affects reads.
#[derive(Debug, Clone)]
pub struct TimeColumn {
    name: String,
    type_name: String,
    converter: Converter,
    col: ColTime,
}

impl TimeColumn {
    /// Build a column from its descriptor.
    ///
    /// `default_timezone` applies when the descriptor names no zone. A
    /// `Time64` descriptor is rejected.
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
        if ty.kind() != TimeKind::Time {
            return Err(TimeError::UnsupportedColumnType(type_name));
        }
        let descriptor = ColumnTypeDescriptor::resolve(ty, default_timezone, registry)?;
        timecol_trace_parse!(&name, &type_name, descriptor.timezone.is_some());

        Ok(Self {
            name,
            type_name,
            converter: Converter::from_descriptor(&descriptor),
            col: ColTime::new(),
        })
    }

    #[must_use]
    pub const fn timezone(&self) -> Option<Tz> {
        self.converter.timezone()
    }

    fn tick(&self, index: usize) -> Result<i64> {
        self.col
            .row(index)
            .map(i64::from)
            .ok_or(TimeError::RowOutOfRange {
                index,
                rows: self.col.rows(),
            })
    }
}

fn narrow(tick: i64) -> Result<i32> {
    i32::try_from(tick).map_err(|_| TimeError::TickOutOfRange(tick))
}

impl Column for TimeColumn {
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
        let ticks = converted
            .ticks
            .into_iter()
            .map(narrow)
            .collect::<Result<Vec<_>>>()?;

        timecol_trace_append!("append", &self.name, ticks.len());
        self.col.extend(ticks);
        Ok(converted.nulls)
    }

    fn append_row(&mut self, value: Value<'_>) -> Result<()> {
        let tick = narrow(self.converter.row_ticks("AppendRow", value)?)?;
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

impl CustomSerialization for TimeColumn {}
