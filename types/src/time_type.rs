//! Textual `Time` / `Time64` type descriptors.
//!
//! The server describes every column with a type string. For the time-of-day
//! family the accepted shapes are:
//!
//! | descriptor                  | kind     | precision | zone   |
//! |-----------------------------|----------|-----------|--------|
//! | `Time`                      | `Time`   | -         | -      |
//! | `Time('<zone>')`            | `Time`   | -         | `zone` |
//! | `Time64(<p>)`               | `Time64` | `p`       | -      |
//! | `Time64(<p>, '<zone>')`     | `Time64` | `p`       | `zone` |
//!
//! Parsing here is purely syntactic: the zone stays a name. Resolving it to
//! an offset table is the job of a timezone registry in `timecol-core`.

#[allow(unused_imports)]
use crate::alloc_prelude::*;
use crate::precision::Precision;

const TIME: &str = "Time";
const TIME_ZONED_PREFIX: &str = "Time('";
const TIME64_PREFIX: &str = "Time64(";

/// Binary type tag of `Time64` without a timezone.
pub const BINARY_TYPE_TIME64_UTC: u8 = 0x34;
/// Binary type tag of `Time64` with a timezone.
pub const BINARY_TYPE_TIME64_WITH_TIMEZONE: u8 = 0x35;

/// Which member of the time-of-day family a descriptor names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeKind {
    /// Seconds since midnight, stored as `Int32`.
    Time,
    /// Sub-second units since midnight, stored as `Int64`.
    Time64,
}

impl TimeKind {
    /// Type name as the server spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeKind::Time => "Time",
            TimeKind::Time64 => "Time64",
        }
    }

    /// Width in bytes of one tick on the wire.
    #[must_use]
    pub const fn tick_width(&self) -> usize {
        match self {
            TimeKind::Time => 4,
            TimeKind::Time64 => 8,
        }
    }
}

impl core::fmt::Display for TimeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `Time` or `Time64` descriptor.
///
/// # Examples
///
/// ```
/// use timecol_types::{Precision, TimeKind, TimeType};
///
/// let ty = TimeType::parse("Time64(6, 'UTC')").unwrap();
/// assert_eq!(ty.kind(), TimeKind::Time64);
/// assert_eq!(ty.precision(), Some(Precision::MICROS));
/// assert_eq!(ty.timezone(), Some("UTC"));
///
/// let plain = TimeType::parse("Time").unwrap();
/// assert_eq!(plain.timezone(), None);
/// assert!(TimeType::parse("Time64(3,4,5)").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum TimeType {
    /// `Time` or `Time('<zone>')`
    Time {
        /// Zone name, when the descriptor carries one.
        timezone: Option<String>,
    },
    /// `Time64(<p>)` or `Time64(<p>, '<zone>')`
    Time64 {
        /// Declared fractional digits.
        precision: Precision,
        /// Zone name, when the descriptor carries one.
        timezone: Option<String>,
    },
}

impl TimeType {
    /// Parse a type string exactly as sent by the server.
    pub fn parse(s: &str) -> Result<Self, TypeParseError> {
        if s == TIME {
            return Ok(TimeType::Time { timezone: None });
        }

        if let Some(rest) = s.strip_prefix(TIME_ZONED_PREFIX) {
            let zone = rest
                .strip_suffix("')")
                .ok_or_else(|| TypeParseError::Unsupported(s.to_string()))?;
            return Ok(TimeType::Time {
                timezone: Some(zone.to_string()),
            });
        }

        if let Some(rest) = s.strip_prefix(TIME64_PREFIX) {
            let params = rest
                .strip_suffix(')')
                .ok_or_else(|| TypeParseError::Unsupported(s.to_string()))?;

            let mut parts = params.split(',');
            let precision = parts.next().unwrap_or_default();
            let zone = parts.next();
            if parts.next().is_some() {
                return Err(TypeParseError::Unsupported(s.to_string()));
            }

            let precision = parse_precision(s, precision)?;
            let timezone = match zone {
                Some(zone) => Some(parse_quoted_zone(s, zone)?),
                None => None,
            };
            return Ok(TimeType::Time64 {
                precision,
                timezone,
            });
        }

        Err(TypeParseError::Unsupported(s.to_string()))
    }

    /// Which family member this is.
    #[must_use]
    pub const fn kind(&self) -> TimeKind {
        match self {
            TimeType::Time { .. } => TimeKind::Time,
            TimeType::Time64 { .. } => TimeKind::Time64,
        }
    }

    /// Declared precision. Always `None` for `Time`.
    #[must_use]
    pub const fn precision(&self) -> Option<Precision> {
        match self {
            TimeType::Time { .. } => None,
            TimeType::Time64 { precision, .. } => Some(*precision),
        }
    }

    /// Zone name carried by the descriptor itself.
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        match self {
            TimeType::Time { timezone } | TimeType::Time64 { timezone, .. } => timezone.as_deref(),
        }
    }

    /// Tag used when this type is written in binary type encoding.
    ///
    /// Only `Time64` has one.
    #[must_use]
    pub fn binary_type_tag(&self) -> Option<u8> {
        match self {
            TimeType::Time { .. } => None,
            TimeType::Time64 { timezone: None, .. } => Some(BINARY_TYPE_TIME64_UTC),
            TimeType::Time64 {
                timezone: Some(_), ..
            } => Some(BINARY_TYPE_TIME64_WITH_TIMEZONE),
        }
    }
}

fn parse_precision(type_name: &str, raw: &str) -> Result<Precision, TypeParseError> {
    let invalid = || TypeParseError::InvalidPrecision {
        type_name: type_name.to_string(),
        value: raw.to_string(),
    };
    let digits: u8 = raw.trim().parse().map_err(|_| invalid())?;
    Precision::new(digits).ok_or_else(invalid)
}

fn parse_quoted_zone(type_name: &str, raw: &str) -> Result<String, TypeParseError> {
    raw.trim()
        .strip_prefix('\'')
        .and_then(|zone| zone.strip_suffix('\''))
        .map(ToString::to_string)
        .ok_or_else(|| TypeParseError::InvalidTimezone {
            type_name: type_name.to_string(),
            value: raw.to_string(),
        })
}

impl core::fmt::Display for TimeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeType::Time { timezone: None } => f.write_str(TIME),
            TimeType::Time {
                timezone: Some(zone),
            } => write!(f, "Time('{zone}')"),
            TimeType::Time64 {
                precision,
                timezone: None,
            } => write!(f, "Time64({precision})"),
            TimeType::Time64 {
                precision,
                timezone: Some(zone),
            } => write!(f, "Time64({precision}, '{zone}')"),
        }
    }
}

impl core::str::FromStr for TimeType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeType::parse(s)
    }
}

/// Error returned when a type string is not a valid time descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeParseError {
    /// The string does not have any recognised shape.
    Unsupported(String),
    /// The precision parameter is not an integer in `0..=9`.
    InvalidPrecision {
        /// Full descriptor.
        type_name: String,
        /// Offending parameter.
        value: String,
    },
    /// The zone parameter is not a single-quoted name.
    InvalidTimezone {
        /// Full descriptor.
        type_name: String,
        /// Offending parameter.
        value: String,
    },
}

impl TypeParseError {
    /// The descriptor that failed to parse.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            TypeParseError::Unsupported(type_name)
            | TypeParseError::InvalidPrecision { type_name, .. }
            | TypeParseError::InvalidTimezone { type_name, .. } => type_name,
        }
    }
}

impl core::fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TypeParseError::Unsupported(type_name) => {
                write!(f, "unsupported column type \"{type_name}\"")
            }
            TypeParseError::InvalidPrecision { type_name, value } => {
                write!(f, "invalid precision \"{value}\" in \"{type_name}\"")
            }
            TypeParseError::InvalidTimezone { type_name, value } => {
                write!(f, "invalid timezone \"{value}\" in \"{type_name}\"")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TypeParseError {}
