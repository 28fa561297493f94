//! Resolved per-column configuration.

use chrono_tz::Tz;
use timecol_types::{Precision, TimeKind, TimeType};

use crate::error::Result;
use crate::timezone::TimezoneRegistry;

/// Immutable configuration derived from a column's type string.
///
/// `timezone` only affects reads; stored ticks never change with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnTypeDescriptor {
    pub kind: TimeKind,
    pub precision: Option<Precision>,
    pub timezone: Option<Tz>,
}

impl ColumnTypeDescriptor {
    /// Parse `type_name` and resolve its zone.
    ///
    /// A descriptor without a zone takes `default_timezone`, which may itself
    /// be `None`.
    pub fn parse(
        type_name: &str,
        default_timezone: Option<Tz>,
        registry: &dyn TimezoneRegistry,
    ) -> Result<Self> {
        let ty = TimeType::parse(type_name)?;
        Self::resolve(&ty, default_timezone, registry)
    }

    /// Resolve an already parsed descriptor.
    pub fn resolve(
        ty: &TimeType,
        default_timezone: Option<Tz>,
        registry: &dyn TimezoneRegistry,
    ) -> Result<Self> {
        let timezone = match ty.timezone() {
            Some(name) => Some(registry.load(name)?),
            None => default_timezone,
        };
        Ok(Self {
            kind: ty.kind(),
            precision: ty.precision(),
            timezone,
        })
    }

    /// Tick scale: the declared precision, whole seconds when absent.
    #[must_use]
    pub fn scale(&self) -> Precision {
        self.precision.unwrap_or(Precision::SECONDS)
    }
}
