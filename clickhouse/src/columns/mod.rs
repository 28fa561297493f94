//! Time-of-day columns.

mod time;
mod time64;

pub use time::*;
pub use time64::*;

use bytes::{Buf, BytesMut};
use chrono_tz::Tz;
use timecol_core::{Batch, Dest, Result, TimezoneRegistry, Value};
use timecol_types::{TimeKind, TimeType};

use crate::traits::{Column, CustomSerialization};

/// Either column variant, chosen from the descriptor at parse time.
#[derive(Debug, Clone)]
pub enum AnyTimeColumn {
    Time(TimeColumn),
    Time64(Time64Column),
}

impl AnyTimeColumn {
    /// Build whichever column `type_name` describes.
    pub fn parse(
        name: impl Into<String>,
        type_name: impl Into<String>,
        default_timezone: Option<Tz>,
        registry: &dyn TimezoneRegistry,
    ) -> Result<Self> {
        let (name, type_name) = (name.into(), type_name.into());
        let ty = TimeType::parse(&type_name)?;
        match ty.kind() {
            TimeKind::Time => {
                TimeColumn::from_type(name, type_name, &ty, default_timezone, registry)
                    .map(Self::Time)
            }
            TimeKind::Time64 => {
                Time64Column::from_type(name, type_name, &ty, default_timezone, registry)
                    .map(Self::Time64)
            }
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TimeKind {
        match self {
            AnyTimeColumn::Time(_) => TimeKind::Time,
            AnyTimeColumn::Time64(_) => TimeKind::Time64,
        }
    }

    #[must_use]
    pub const fn timezone(&self) -> Option<Tz> {
        match self {
            AnyTimeColumn::Time(col) => col.timezone(),
            AnyTimeColumn::Time64(col) => col.timezone(),
        }
    }

    #[must_use]
    pub fn as_time(&self) -> Option<&TimeColumn> {
        match self {
            AnyTimeColumn::Time(col) => Some(col),
            AnyTimeColumn::Time64(_) => None,
        }
    }

    #[must_use]
    pub fn as_time64(&self) -> Option<&Time64Column> {
        match self {
            AnyTimeColumn::Time64(col) => Some(col),
            AnyTimeColumn::Time(_) => None,
        }
    }
}

impl From<TimeColumn> for AnyTimeColumn {
    fn from(value: TimeColumn) -> Self {
        AnyTimeColumn::Time(value)
    }
}

impl From<Time64Column> for AnyTimeColumn {
    fn from(value: Time64Column) -> Self {
        AnyTimeColumn::Time64(value)
    }
}

macro_rules! dispatch {
    ($self:ident, $col:ident => $body:expr) => {
        match $self {
            AnyTimeColumn::Time($col) => $body,
            AnyTimeColumn::Time64($col) => $body,
        }
    };
}

impl Column for AnyTimeColumn {
    fn reset(&mut self) {
        dispatch!(self, col => col.reset())
    }

    fn name(&self) -> &str {
        dispatch!(self, col => col.name())
    }

    fn column_type(&self) -> &str {
        dispatch!(self, col => col.column_type())
    }

    fn scan_type(&self) -> &'static str {
        dispatch!(self, col => col.scan_type())
    }

    fn rows(&self) -> usize {
        dispatch!(self, col => col.rows())
    }

    fn row(&self, index: usize, want_reference: bool) -> Result<Value<'static>> {
        dispatch!(self, col => col.row(index, want_reference))
    }

    fn scan_row(&self, dest: Dest<'_>, index: usize) -> Result<()> {
        dispatch!(self, col => col.scan_row(dest, index))
    }

    fn append(&mut self, batch: Batch<'_>) -> Result<Vec<u8>> {
        dispatch!(self, col => col.append(batch))
    }

    fn append_row(&mut self, value: Value<'_>) -> Result<()> {
        dispatch!(self, col => col.append_row(value))
    }

    fn decode(&mut self, reader: &mut dyn Buf, rows: usize) -> Result<()> {
        dispatch!(self, col => col.decode(reader, rows))
    }

    fn encode(&self, buffer: &mut BytesMut) {
        dispatch!(self, col => col.encode(buffer))
    }
}

impl CustomSerialization for AnyTimeColumn {}
