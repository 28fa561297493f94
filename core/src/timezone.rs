//! Timezone name resolution.

use chrono_tz::Tz;

use crate::error::{Result, TimeError};

/// Read-only lookup from a zone name to a zone.
pub trait TimezoneRegistry: Sync {
    /// Resolve `name`, failing with [`TimeError::Timezone`] when unknown.
    fn load(&self, name: &str) -> Result<Tz>;
}

/// Registry over the IANA database compiled into `chrono-tz`.
///
/// An empty name resolves to UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaRegistry;

impl TimezoneRegistry for IanaRegistry {
    fn load(&self, name: &str) -> Result<Tz> {
        if name.is_empty() {
            return Ok(Tz::UTC);
        }
        name.parse::<Tz>()
            .map_err(|_| TimeError::Timezone(name.to_string()))
    }
}

impl<F> TimezoneRegistry for F
where
    F: Fn(&str) -> Result<Tz> + Sync,
{
    fn load(&self, name: &str) -> Result<Tz> {
        self(name)
    }
}

/// Resolve `name` through [`IanaRegistry`].
pub fn load(name: &str) -> Result<Tz> {
    IanaRegistry.load(name)
}
