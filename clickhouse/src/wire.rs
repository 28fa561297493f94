//! Fixed-width little-endian tick stores.
//!
//! A column block is `rows` consecutive ticks with no header: `Int32` for
//! `Time`, `Int64` for `Time64`. Decoding appends to whatever is already held.

use bytes::{Buf, BufMut, BytesMut};
use timecol_core::{Result, TimeError};
use timecol_types::Precision;

fn check_remaining(reader: &dyn Buf, rows: usize, width: usize) -> Result<()> {
    let needed = rows
        .checked_mul(width)
        .ok_or_else(|| TimeError::Decode(format!("{rows} rows overflow the block size")))?;
    if reader.remaining() < needed {
        return Err(TimeError::Decode(format!(
            "need {needed} bytes for {rows} rows, {} available",
            reader.remaining()
        )));
    }
    Ok(())
}

/// Backing store of a `Time` column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColTime {
    data: Vec<i32>,
}

impl ColTime {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn reset(&mut self) {
        self.data.clear();
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn append(&mut self, tick: i32) {
        self.data.push(tick);
    }

    pub(crate) fn extend(&mut self, ticks: impl IntoIterator<Item = i32>) {
        self.data.extend(ticks);
    }

    /// Tick at `index`, or `None` past the end.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<i32> {
        self.data.get(index).copied()
    }

    pub fn decode_column(&mut self, reader: &mut dyn Buf, rows: usize) -> Result<()> {
        check_remaining(reader, rows, size_of::<i32>())?;
        self.data.reserve(rows);
        for _ in 0..rows {
            self.data.push(reader.get_i32_le());
        }
        Ok(())
    }

    pub fn encode_column(&self, buffer: &mut BytesMut) {
        buffer.reserve(self.data.len() * size_of::<i32>());
        for tick in &self.data {
            buffer.put_i32_le(*tick);
        }
    }
}

/// Backing store of a `Time64` column.
///
/// The precision is carried for the type string only; ticks are stored as
/// given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColTime64 {
    data: Vec<i64>,
    precision: Precision,
    precision_set: bool,
}

impl ColTime64 {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            precision: Precision::SECONDS,
            precision_set: false,
        }
    }

    /// Store with an explicit precision.
    #[must_use]
    pub fn with_precision(self, precision: Precision) -> Self {
        Self {
            precision,
            precision_set: true,
            ..self
        }
    }

    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Whether [`ColTime64::with_precision`] was applied.
    #[must_use]
    pub const fn precision_set(&self) -> bool {
        self.precision_set
    }

    pub fn reset(&mut self) {
        self.data.clear();
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn append(&mut self, tick: i64) {
        self.data.push(tick);
    }

    pub(crate) fn extend(&mut self, ticks: impl IntoIterator<Item = i64>) {
        self.data.extend(ticks);
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<i64> {
        self.data.get(index).copied()
    }

    pub fn decode_column(&mut self, reader: &mut dyn Buf, rows: usize) -> Result<()> {
        check_remaining(reader, rows, size_of::<i64>())?;
        self.data.reserve(rows);
        for _ in 0..rows {
            self.data.push(reader.get_i64_le());
        }
        Ok(())
    }

    pub fn encode_column(&self, buffer: &mut BytesMut) {
        buffer.reserve(self.data.len() * size_of::<i64>());
        for tick in &self.data {
            buffer.put_i64_le(*tick);
        }
    }
}
