//! Time-of-day columns for the ClickHouse native block format
//!
//! - [`TimeColumn`] - `Time` / `Time('<zone>')`, `Int32` seconds since midnight
//! - [`Time64Column`] - `Time64(p)` / `Time64(p, '<zone>')`, `Int64` ticks
//! - [`AnyTimeColumn`] - either one, picked from the descriptor
//! - [`ColumnBuilder`] / [`ColumnConfig`] - construction from code or files
//!
//! ```ignore
//! use timecol_clickhouse::{Column, ColumnBuilder};
//! use timecol_core::Dest;
//!
//! let mut col = ColumnBuilder::new("opened_at", "Time64(3)").build()?;
//! col.append_row("08:15:30.250".into())?;
//!
//! let mut text = String::new();
//! col.scan_row(Dest::from(&mut text), 0)?;
//! assert_eq!(text, "08:15:30.250");
//! ```
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `serde` - Deserialisable [`ColumnConfig`]
//! - `tracing` - Emit parse/append events through `tracing`

pub mod columns;
pub mod config;
pub mod traits;
pub mod wire;

pub use columns::{AnyTimeColumn, Time64Column, TimeColumn};
pub use config::{ColumnBuilder, ColumnConfig};
pub use traits::{Column, CustomSerialization};
pub use wire::{ColTime, ColTime64};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{AnyTimeColumn, Column, ColumnBuilder, ColumnConfig, Time64Column, TimeColumn};
}
