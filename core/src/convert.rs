//! Bidirectional mapping between ticks and host shapes.
//!
//! One [`Converter`] serves both column kinds; the only differences are the
//! tick scale, the layout table and the output layout, all fixed at
//! construction.
//!
//! # Negative ticks
//!
//! Ticks are plain signed integers and never pass through calendar
//! normalisation on the write path. On the read path:
//!
//! - a zoneless column returns the stored tick unchanged when read as an
//!   integer, so `-1` reads back as `-1`;
//! - a zoned column returns the wall-clock time of day in its zone, always in
//!   `0..ticks_per_day`, so `-1` on `Time('UTC')` reads back as `86399`.

use chrono_tz::Tz;
use timecol_types::{Precision, TimeKind};

use crate::descriptor::ColumnTypeDescriptor;
use crate::dest::{Dest, Scanner};
use crate::error::{Result, TimeError};
use crate::layout::{LAYOUTS, output_layout, parse_wall_clock};
use crate::ticks::{TimeValue, instant_from_ticks, ticks_from_time};
use crate::value::{Batch, NullTime, Value};

const VALUER_HINT: &str = "could not get value from Valuer";
const NESTED_VALUER_HINT: &str = "Valuer produced another Valuer";

/// Ticks and null indicators produced by a batch conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertedBatch {
    pub ticks: Vec<i64>,
    /// `1` marks a logical NULL, `0` a present value.
    pub nulls: Vec<u8>,
}

impl ConvertedBatch {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            ticks: Vec::with_capacity(capacity),
            nulls: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, ticks: i64) {
        self.ticks.push(ticks);
        self.nulls.push(0);
    }

    fn push_null(&mut self) {
        self.ticks.push(0);
        self.nulls.push(1);
    }
}

/// Tick/host converter for one column configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    kind: TimeKind,
    precision: Precision,
    timezone: Option<Tz>,
}

impl Converter {
    #[must_use]
    pub const fn new(kind: TimeKind, precision: Precision, timezone: Option<Tz>) -> Self {
        Self {
            kind,
            precision,
            timezone,
        }
    }

    #[must_use]
    pub fn from_descriptor(descriptor: &ColumnTypeDescriptor) -> Self {
        Self::new(descriptor.kind, descriptor.scale(), descriptor.timezone)
    }

    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    #[must_use]
    pub const fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    fn target(&self) -> &'static str {
        self.kind.as_str()
    }

    // -------------------------------------------------------------------------
    // Write path
    // -------------------------------------------------------------------------

    /// Ticks for one row. NULL shapes map to the sentinel midnight, `0`.
    pub fn row_ticks(&self, op: &'static str, value: Value<'_>) -> Result<i64> {
        self.row_ticks_inner(op, value, true)
    }

    fn row_ticks_inner(&self, op: &'static str, value: Value<'_>, allow_valuer: bool) -> Result<i64> {
        match value {
            Value::Null
            | Value::OptionalInstant(None)
            | Value::OptionalTicks(None)
            | Value::Nullable(NullTime { valid: false, .. }) => Ok(0),
            Value::Instant(instant)
            | Value::OptionalInstant(Some(instant))
            | Value::Nullable(NullTime {
                time: instant,
                valid: true,
            }) => Ok(self.instant_ticks(&instant)),
            Value::Ticks(ticks) | Value::OptionalTicks(Some(ticks)) => Ok(ticks),
            Value::Text(text) => self.parse_text(&text),
            Value::Generic(valuer) => {
                let from = valuer.type_name();
                if !allow_valuer {
                    return Err(TimeError::conversion(op, from, self.target())
                        .with_hint(NESTED_VALUER_HINT));
                }
                let produced = valuer.value().map_err(|source| TimeError::Conversion {
                    op,
                    from: from.to_string(),
                    to: self.target().to_string(),
                    hint: Some(VALUER_HINT.to_string()),
                    source: Some(source),
                })?;
                self.row_ticks_inner(op, produced, false)
            }
            Value::Unsupported(from) => Err(TimeError::conversion(op, from, self.target())),
        }
    }

    /// Ticks and null indicators for a batch.
    ///
    /// Every element is converted before anything is returned, so a failure
    /// leaves nothing half-written for the caller.
    pub fn batch_ticks(&self, op: &'static str, batch: Batch<'_>) -> Result<ConvertedBatch> {
        self.batch_ticks_inner(op, batch, true)
    }

    fn batch_ticks_inner(
        &self,
        op: &'static str,
        batch: Batch<'_>,
        allow_valuer: bool,
    ) -> Result<ConvertedBatch> {
        let mut out = ConvertedBatch::with_capacity(batch.len().unwrap_or_default());
        match batch {
            Batch::Instants(values) => {
                for instant in values.iter() {
                    out.push(self.instant_ticks(instant));
                }
            }
            Batch::OptionalInstants(values) => {
                for value in values.iter() {
                    match value {
                        Some(instant) => out.push(self.instant_ticks(instant)),
                        None => out.push_null(),
                    }
                }
            }
            Batch::Ticks(values) => {
                out.ticks.extend_from_slice(&values);
                out.nulls.resize(values.len(), 0);
            }
            Batch::OptionalTicks(values) => {
                for value in values.iter() {
                    match value {
                        Some(ticks) => out.push(*ticks),
                        None => out.push_null(),
                    }
                }
            }
            Batch::Texts(values) => {
                for text in values.iter() {
                    out.push(self.parse_text(text)?);
                }
            }
            Batch::Nullable(values) => {
                for value in values.iter() {
                    self.push_nullable(&mut out, Some(value));
                }
            }
            Batch::OptionalNullable(values) => {
                for value in values.iter() {
                    self.push_nullable(&mut out, value.as_ref());
                }
            }
            Batch::Generic(valuer) => {
                let from = valuer.type_name();
                if !allow_valuer {
                    return Err(TimeError::conversion(op, from, self.target())
                        .with_hint(NESTED_VALUER_HINT));
                }
                let produced = valuer.values().map_err(|source| TimeError::Conversion {
                    op,
                    from: from.to_string(),
                    to: self.target().to_string(),
                    hint: Some(VALUER_HINT.to_string()),
                    source: Some(source),
                })?;
                return self.batch_ticks_inner(op, produced, false);
            }
            Batch::Unsupported(from) => {
                return Err(TimeError::conversion(op, from, self.target()));
            }
        }
        Ok(out)
    }

    fn push_nullable(&self, out: &mut ConvertedBatch, value: Option<&NullTime>) {
        match value {
            Some(NullTime {
                time,
                valid: true,
            }) => out.push(self.instant_ticks(time)),
            _ => out.push_null(),
        }
    }

    fn instant_ticks(&self, instant: &TimeValue) -> i64 {
        ticks_from_time(instant.time(), self.precision)
    }

    /// Ticks for a textual time.
    ///
    /// Layouts are tried in order; when none matches, the text is read as a
    /// bare signed tick count at the column's scale.
    pub fn parse_text(&self, value: &str) -> Result<i64> {
        if let Some(time) = parse_wall_clock(value, &LAYOUTS) {
            return Ok(ticks_from_time(time, self.precision));
        }

        match value.parse::<i64>() {
            Ok(ticks) => {
                crate::timecol_trace_fallback!(self.target(), value);
                Ok(ticks)
            }
            Err(_) => Err(TimeError::InvalidTimeValue {
                target: self.target(),
                value: value.to_string(),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Read path
    // -------------------------------------------------------------------------

    /// Instant for a stored tick, projected into the column's zone.
    pub fn instant(&self, ticks: i64) -> Result<TimeValue> {
        let instant = instant_from_ticks(ticks, self.precision)?;
        Ok(match self.timezone {
            Some(zone) => instant.with_timezone(&zone),
            None => instant,
        })
    }

    /// Integer view of a stored tick. See the module docs for the contract.
    pub fn read_ticks(&self, ticks: i64) -> Result<i64> {
        match self.timezone {
            None => Ok(ticks),
            Some(_) => Ok(ticks_from_time(self.instant(ticks)?.time(), self.precision)),
        }
    }

    /// Text view of a stored tick.
    pub fn read_text(&self, ticks: i64) -> Result<String> {
        Ok(self.format(&self.instant(ticks)?))
    }

    /// Render an instant with the column's output layout.
    #[must_use]
    pub fn format(&self, instant: &TimeValue) -> String {
        instant.format(output_layout(self.kind)).to_string()
    }

    /// Write a stored tick into `dest`.
    pub fn scan(&self, ticks: i64, dest: Dest<'_>) -> Result<()> {
        match dest {
            Dest::Instant(out) => *out = self.instant(ticks)?,
            Dest::OptionalInstant(out) => *out = Some(self.instant(ticks)?),
            Dest::Ticks(out) => *out = self.read_ticks(ticks)?,
            Dest::OptionalTicks(out) => *out = Some(self.read_ticks(ticks)?),
            Dest::Text(out) => *out = self.read_text(ticks)?,
            Dest::OptionalText(out) => *out = Some(self.read_text(ticks)?),
            Dest::Nullable(out) => out.scan(self.instant(ticks)?).map_err(TimeError::Scan)?,
            Dest::Scanner(out) => out.scan(self.instant(ticks)?).map_err(TimeError::Scan)?,
            Dest::Unsupported(to) => {
                return Err(TimeError::conversion("ScanRow", self.target(), to));
            }
        }
        Ok(())
    }
}
