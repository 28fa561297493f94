//! Host-side destination shapes accepted on the read path.

use crate::error::BoxError;
use crate::ticks::TimeValue;
use crate::value::NullTime;

/// A host object that accepts a scanned instant.
pub trait Scanner {
    /// Store `value` into `self`.
    fn scan(&mut self, value: TimeValue) -> Result<(), BoxError>;

    /// Host type name used in error messages.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Where a scanned row should land.
///
/// The `Optional*` variants are the "pointer to pointer" shapes: they are
/// always set to `Some`.
pub enum Dest<'a> {
    /// Instant as read, zone applied
    Instant(&'a mut TimeValue),
    /// Instant as read, freshly placed in the option
    OptionalInstant(&'a mut Option<TimeValue>),
    /// Tick count re-derived from the instant
    Ticks(&'a mut i64),
    /// Tick count, freshly placed in the option
    OptionalTicks(&'a mut Option<i64>),
    /// Formatted with the column's text layout
    Text(&'a mut String),
    /// Formatted text, freshly placed in the option
    OptionalText(&'a mut Option<String>),
    /// Nullable wrapper, set valid
    Nullable(&'a mut NullTime),
    /// Any scanner capability
    Scanner(&'a mut dyn Scanner),
    /// Any other host type, identified by name
    Unsupported(&'static str),
}

impl Dest<'_> {
    /// Host type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Dest::Instant(_) => "&mut DateTime<Tz>",
            Dest::OptionalInstant(_) => "&mut Option<DateTime<Tz>>",
            Dest::Ticks(_) => "&mut i64",
            Dest::OptionalTicks(_) => "&mut Option<i64>",
            Dest::Text(_) => "&mut String",
            Dest::OptionalText(_) => "&mut Option<String>",
            Dest::Nullable(_) => "&mut NullTime",
            Dest::Scanner(scanner) => scanner.type_name(),
            Dest::Unsupported(name) => name,
        }
    }
}

impl core::fmt::Debug for Dest<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Dest").field(&self.type_name()).finish()
    }
}

macro_rules! impl_dest_from {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for Dest<'a> {
                fn from(value: &'a mut $ty) -> Self {
                    Dest::$variant(value)
                }
            }
        )+
    };
}

impl_dest_from! {
    Instant => TimeValue,
    OptionalInstant => Option<TimeValue>,
    Ticks => i64,
    OptionalTicks => Option<i64>,
    Text => String,
    OptionalText => Option<String>,
    Nullable => NullTime,
}

impl<'a> From<&'a mut dyn Scanner> for Dest<'a> {
    fn from(value: &'a mut dyn Scanner) -> Self {
        Dest::Scanner(value)
    }
}
