//! Sub-second precision of a `Time64` column.

/// Number of fractional second digits a `Time64` tick carries.
///
/// Precision `p` means one tick is `10^-p` seconds, so `Precision(3)` stores
/// milliseconds and `Precision(9)` stores nanoseconds. `Time` columns always
/// use [`Precision::SECONDS`].
///
/// # Examples
///
/// ```
/// use timecol_types::Precision;
///
/// let millis = Precision::new(3).unwrap();
/// assert_eq!(millis.units_per_second(), 1_000);
/// assert_eq!(millis.nanos_per_unit(), 1_000_000);
/// assert!(Precision::new(10).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Precision(u8);

impl Precision {
    /// Whole seconds.
    pub const SECONDS: Self = Self(0);
    /// Milliseconds.
    pub const MILLIS: Self = Self(3);
    /// Microseconds.
    pub const MICROS: Self = Self(6);
    /// Nanoseconds.
    pub const NANOS: Self = Self(9);
    /// Largest supported precision.
    pub const MAX: Self = Self::NANOS;

    /// Returns `None` when `digits` is greater than 9.
    #[inline]
    #[must_use]
    pub const fn new(digits: u8) -> Option<Self> {
        if digits <= Self::MAX.0 {
            Some(Self(digits))
        } else {
            None
        }
    }

    /// Number of fractional digits.
    #[inline]
    #[must_use]
    pub const fn digits(self) -> u8 {
        self.0
    }

    /// Ticks per second, `10^digits`.
    #[inline]
    #[must_use]
    pub const fn units_per_second(self) -> i64 {
        10_i64.pow(self.0 as u32)
    }

    /// Nanoseconds in one tick, `10^(9 - digits)`.
    #[inline]
    #[must_use]
    pub const fn nanos_per_unit(self) -> i64 {
        10_i64.pow((Self::MAX.0 - self.0) as u32)
    }
}

impl TryFrom<u8> for Precision {
    type Error = PrecisionRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PrecisionRangeError(value))
    }
}

impl From<Precision> for u8 {
    fn from(value: Precision) -> Self {
        value.0
    }
}

impl core::fmt::Display for Precision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a precision is outside `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionRangeError(pub u8);

impl core::fmt::Display for PrecisionRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "precision {} is out of range 0..=9", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PrecisionRangeError {}
