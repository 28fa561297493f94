//! # timecol
//!
//! `Time` and `Time64` time-of-day columns for the ClickHouse native block
//! format.
//!
//! ## Quick Start
//!
//! ```rust
//! use timecol::prelude::*;
//!
//! # fn main() -> timecol::Result<()> {
//! let mut col = ColumnBuilder::new("opened_at", "Time64(3, 'UTC')").build()?;
//! col.append_row("08:15:30.250".into())?;
//! col.append_row(Value::Null)?;
//!
//! let mut text = String::new();
//! col.scan_row(Dest::from(&mut text), 0)?;
//! assert_eq!(text, "08:15:30.250");
//! # Ok(())
//! # }
//! ```
//!
//! ## Column Types
//!
//! | Descriptor              | Wire    | Tick                          |
//! |-------------------------|---------|-------------------------------|
//! | `Time`                  | `Int32` | seconds since midnight        |
//! | `Time('<zone>')`        | `Int32` | seconds since midnight        |
//! | `Time64(p)`             | `Int64` | `10^-p` seconds since midnight |
//! | `Time64(p, '<zone>')`   | `Int64` | `10^-p` seconds since midnight |
//!
//! The zone never changes what is stored; it is applied when rows are read.

/// Syntactic type descriptors.
pub mod types {
    pub use timecol_types::*;
}

/// Conversions, host shapes and errors.
pub mod core {
    pub use timecol_core::*;
}

/// Columns, wire stores and construction.
pub mod clickhouse {
    pub use timecol_clickhouse::*;
}

pub use timecol_clickhouse::{
    AnyTimeColumn, Column, ColumnBuilder, ColumnConfig, CustomSerialization, Time64Column,
    TimeColumn,
};
pub use timecol_core::{
    Batch, BatchValuer, Dest, IanaRegistry, NullTime, Result, Scanner, TimeError, TimeValue,
    TimezoneRegistry, Valuer, Value,
};
pub use timecol_types::{Precision, TimeKind, TimeType};

/// Everything needed to build, fill and read columns.
pub mod prelude {
    pub use timecol_clickhouse::prelude::*;
    pub use timecol_core::prelude::*;
    pub use timecol_types::prelude::*;
}
