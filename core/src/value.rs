//! Host-side input shapes accepted on the write path.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::dest::Scanner;
use crate::error::BoxError;
use crate::ticks::{TimeValue, on_sentinel_day, sentinel_midnight};

//------------------------------------------------------------------------------
// Capabilities
//------------------------------------------------------------------------------

/// A host object that can produce a concrete row value on demand.
///
/// The converter calls [`Valuer::value`] once and converts whatever comes
/// back. A producer that yields another producer is rejected.
pub trait Valuer {
    /// Produce the value to store.
    fn value(&self) -> Result<Value<'static>, BoxError>;

    /// Host type name used in error messages.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Batch counterpart of [`Valuer`].
pub trait BatchValuer {
    /// Produce the batch to store.
    fn values(&self) -> Result<Batch<'static>, BoxError>;

    /// Host type name used in error messages.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

//------------------------------------------------------------------------------
// NullTime
//------------------------------------------------------------------------------

/// A time value paired with a validity flag.
///
/// `valid == false` is a logical NULL; the stored tick is then the sentinel
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullTime {
    pub time: TimeValue,
    pub valid: bool,
}

impl NullTime {
    /// A present value.
    #[must_use]
    pub const fn new(time: TimeValue) -> Self {
        Self { time, valid: true }
    }

    /// A logical NULL.
    #[must_use]
    pub fn null() -> Self {
        Self {
            time: sentinel_midnight(),
            valid: false,
        }
    }

    /// `Some(time)` when valid.
    #[must_use]
    pub fn get(&self) -> Option<TimeValue> {
        if self.valid { Some(self.time) } else { None }
    }
}

impl Default for NullTime {
    fn default() -> Self {
        Self::null()
    }
}

impl Scanner for NullTime {
    fn scan(&mut self, value: TimeValue) -> Result<(), BoxError> {
        self.time = value;
        self.valid = true;
        Ok(())
    }
}

impl From<Option<TimeValue>> for NullTime {
    fn from(value: Option<TimeValue>) -> Self {
        value.map_or_else(Self::null, Self::new)
    }
}

//------------------------------------------------------------------------------
// Value
//------------------------------------------------------------------------------

/// One row of input.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use timecol_core::Value;
///
/// let ticks: Value<'_> = 3_600i64.into();
/// assert!(matches!(ticks, Value::Ticks(3_600)));
///
/// let text: Value<'_> = "12:30:45".into();
/// assert!(matches!(text, Value::Text(_)));
///
/// let instant: Value<'_> = NaiveTime::from_hms_opt(8, 15, 30).unwrap().into();
/// assert!(matches!(instant, Value::Instant(_)));
/// ```
#[derive(Default)]
pub enum Value<'a> {
    /// Absent value
    #[default]
    Null,
    /// Calendar instant; only its wall-clock part is stored
    Instant(TimeValue),
    /// Optional calendar instant, `None` is a NULL
    OptionalInstant(Option<TimeValue>),
    /// Tick count at the column's scale
    Ticks(i64),
    /// Optional tick count, `None` is a NULL
    OptionalTicks(Option<i64>),
    /// Textual time, parsed through the layout table
    Text(Cow<'a, str>),
    /// Nullable wrapper
    Nullable(NullTime),
    /// Value producer
    Generic(&'a dyn Valuer),
    /// Any other host type, identified by name
    Unsupported(&'static str),
}

impl Value<'_> {
    /// Host type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "None",
            Value::Instant(_) => "DateTime<Tz>",
            Value::OptionalInstant(_) => "Option<DateTime<Tz>>",
            Value::Ticks(_) => "i64",
            Value::OptionalTicks(_) => "Option<i64>",
            Value::Text(_) => "&str",
            Value::Nullable(_) => "NullTime",
            Value::Generic(valuer) => valuer.type_name(),
            Value::Unsupported(name) => name,
        }
    }
}

impl core::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Instant(v) => f.debug_tuple("Instant").field(v).finish(),
            Value::OptionalInstant(v) => f.debug_tuple("OptionalInstant").field(v).finish(),
            Value::Ticks(v) => f.debug_tuple("Ticks").field(v).finish(),
            Value::OptionalTicks(v) => f.debug_tuple("OptionalTicks").field(v).finish(),
            Value::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Value::Nullable(v) => f.debug_tuple("Nullable").field(v).finish(),
            Value::Generic(v) => f.debug_tuple("Generic").field(&v.type_name()).finish(),
            Value::Unsupported(v) => f.debug_tuple("Unsupported").field(v).finish(),
        }
    }
}

impl From<TimeValue> for Value<'_> {
    fn from(value: TimeValue) -> Self {
        Value::Instant(value)
    }
}

impl From<Option<TimeValue>> for Value<'_> {
    fn from(value: Option<TimeValue>) -> Self {
        Value::OptionalInstant(value)
    }
}

impl From<DateTime<Utc>> for Value<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Instant(value.with_timezone(&Tz::UTC))
    }
}

// chrono-tz has no fixed-offset zones; keep the wall clock, which is all the
// write path reads.
impl From<DateTime<FixedOffset>> for Value<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Instant(value.naive_local().and_utc().with_timezone(&Tz::UTC))
    }
}

impl From<NaiveDateTime> for Value<'_> {
    fn from(value: NaiveDateTime) -> Self {
        Value::Instant(value.and_utc().with_timezone(&Tz::UTC))
    }
}

impl From<NaiveTime> for Value<'_> {
    fn from(value: NaiveTime) -> Self {
        Value::Instant(on_sentinel_day(value))
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Ticks(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Ticks(i64::from(value))
    }
}

impl From<Option<i64>> for Value<'_> {
    fn from(value: Option<i64>) -> Self {
        Value::OptionalTicks(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}

impl From<NullTime> for Value<'_> {
    fn from(value: NullTime) -> Self {
        Value::Nullable(value)
    }
}

impl<'a> From<&'a dyn Valuer> for Value<'a> {
    fn from(value: &'a dyn Valuer) -> Self {
        Value::Generic(value)
    }
}

//------------------------------------------------------------------------------
// Batch
//------------------------------------------------------------------------------

/// A homogeneous batch of input rows.
///
/// Slices are borrowed when the caller already owns them and owned when a
/// [`BatchValuer`] produced them.
pub enum Batch<'a> {
    /// Calendar instants
    Instants(Cow<'a, [TimeValue]>),
    /// Optional instants, `None` rows are NULL
    OptionalInstants(Cow<'a, [Option<TimeValue>]>),
    /// Tick counts at the column's scale
    Ticks(Cow<'a, [i64]>),
    /// Optional tick counts, `None` rows are NULL
    OptionalTicks(Cow<'a, [Option<i64>]>),
    /// Textual times
    Texts(Cow<'a, [String]>),
    /// Nullable wrappers, invalid rows are NULL
    Nullable(Cow<'a, [NullTime]>),
    /// Optional nullable wrappers, `None` and invalid rows are NULL
    OptionalNullable(Cow<'a, [Option<NullTime>]>),
    /// Batch producer
    Generic(&'a dyn BatchValuer),
    /// Any other host type, identified by name
    Unsupported(&'static str),
}

impl Batch<'_> {
    /// Host type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Batch::Instants(_) => "[DateTime<Tz>]",
            Batch::OptionalInstants(_) => "[Option<DateTime<Tz>>]",
            Batch::Ticks(_) => "[i64]",
            Batch::OptionalTicks(_) => "[Option<i64>]",
            Batch::Texts(_) => "[String]",
            Batch::Nullable(_) => "[NullTime]",
            Batch::OptionalNullable(_) => "[Option<NullTime>]",
            Batch::Generic(valuer) => valuer.type_name(),
            Batch::Unsupported(name) => name,
        }
    }

    /// Number of rows, `None` for producers and unsupported shapes.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Batch::Instants(v) => Some(v.len()),
            Batch::OptionalInstants(v) => Some(v.len()),
            Batch::Ticks(v) => Some(v.len()),
            Batch::OptionalTicks(v) => Some(v.len()),
            Batch::Texts(v) => Some(v.len()),
            Batch::Nullable(v) => Some(v.len()),
            Batch::OptionalNullable(v) => Some(v.len()),
            Batch::Generic(_) | Batch::Unsupported(_) => None,
        }
    }
}

impl core::fmt::Debug for Batch<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Batch")
            .field("type", &self.type_name())
            .field("len", &self.len())
            .finish()
    }
}

macro_rules! impl_batch_from {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl<'a> From<&'a [$ty]> for Batch<'a> {
                fn from(value: &'a [$ty]) -> Self {
                    Batch::$variant(Cow::Borrowed(value))
                }
            }

            impl From<Vec<$ty>> for Batch<'_> {
                fn from(value: Vec<$ty>) -> Self {
                    Batch::$variant(Cow::Owned(value))
                }
            }
        )+
    };
}

impl_batch_from! {
    Instants => TimeValue,
    OptionalInstants => Option<TimeValue>,
    Ticks => i64,
    OptionalTicks => Option<i64>,
    Texts => String,
    Nullable => NullTime,
    OptionalNullable => Option<NullTime>,
}

impl From<&[&str]> for Batch<'_> {
    fn from(value: &[&str]) -> Self {
        Batch::Texts(Cow::Owned(value.iter().map(ToString::to_string).collect()))
    }
}

impl<'a> From<&'a dyn BatchValuer> for Batch<'a> {
    fn from(value: &'a dyn BatchValuer) -> Self {
        Batch::Generic(value)
    }
}
