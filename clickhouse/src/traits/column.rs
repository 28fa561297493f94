use bytes::{Buf, BytesMut};
use timecol_core::{Batch, Dest, Result, Value};

/// A typed column over a fixed-width tick store.
///
/// Mutation takes `&mut self`, so one writer per column is enforced by the
/// borrow checker. Failed appends leave the column untouched.
pub trait Column: Send {
    /// Drop every row.
    fn reset(&mut self);

    /// Column name as supplied at construction.
    fn name(&self) -> &str;

    /// Type descriptor exactly as supplied at construction.
    fn column_type(&self) -> &str;

    /// Host type name produced by [`Column::row`].
    fn scan_type(&self) -> &'static str;

    fn rows(&self) -> usize;

    /// Row `index` as an instant, wrapped in `Some` when `want_reference`.
    fn row(&self, index: usize, want_reference: bool) -> Result<Value<'static>>;

    /// Render row `index` into `dest`.
    fn scan_row(&self, dest: Dest<'_>, index: usize) -> Result<()>;

    /// Append a batch, returning one null indicator per element.
    fn append(&mut self, batch: Batch<'_>) -> Result<Vec<u8>>;

    fn append_row(&mut self, value: Value<'_>) -> Result<()>;

    /// Read `rows` ticks from `reader`, appending them.
    fn decode(&mut self, reader: &mut dyn Buf, rows: usize) -> Result<()>;

    /// Write every tick to `buffer`.
    fn encode(&self, buffer: &mut BytesMut);
}

/// Hooks around the column body in the native block format.
///
/// Time columns carry no state prefix, so the defaults do nothing.
pub trait CustomSerialization {
    fn write_state_prefix(&self, _buffer: &mut BytesMut) -> Result<()> {
        Ok(())
    }

    fn read_state_prefix(&mut self, _reader: &mut dyn Buf) -> Result<()> {
        Ok(())
    }
}
