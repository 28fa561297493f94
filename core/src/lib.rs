//! Conversion layer for the time-of-day column family.
//!
//! This crate sits between the syntactic descriptor in `timecol-types` and the
//! columnar stores in `timecol-clickhouse`:
//!
//! - [`ColumnTypeDescriptor`] - a parsed descriptor with its zone resolved
//! - [`Converter`] - ticks to host shapes and back
//! - [`Value`], [`Batch`], [`Dest`] - the host shapes themselves
//! - [`TimezoneRegistry`] - pluggable zone lookup, [`IanaRegistry`] by default
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `tracing` - Emit parse/append events through `tracing`

#[macro_use]
pub mod tracing;

pub mod convert;
pub mod descriptor;
pub mod dest;
pub mod error;
pub mod layout;
pub mod ticks;
pub mod timezone;
pub mod value;

pub use convert::{ConvertedBatch, Converter};
pub use descriptor::ColumnTypeDescriptor;
pub use dest::{Dest, Scanner};
pub use error::{BoxError, Result, TimeError};
pub use ticks::{
    TimeValue, instant_from_ticks, on_sentinel_day, sentinel_midnight, ticks_from_time,
    ticks_per_day,
};
pub use timezone::{IanaRegistry, TimezoneRegistry};
pub use value::{Batch, BatchValuer, NullTime, Valuer, Value};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{
        Batch, ColumnTypeDescriptor, Dest, NullTime, Result, TimeError, TimeValue, Value,
    };
}
