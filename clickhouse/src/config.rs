//! Column construction from code or from configuration files.

use chrono_tz::Tz;
use timecol_core::{IanaRegistry, Result, TimezoneRegistry};

use crate::columns::{AnyTimeColumn, Time64Column, TimeColumn};

/// Fluent builder for time-of-day columns.
///
/// ```ignore
/// let col = ColumnBuilder::new("opened_at", "Time64(3)")
///     .default_timezone(chrono_tz::Europe::Berlin)
///     .build()?;
/// ```
#[derive(Clone, Copy)]
pub struct ColumnBuilder<'a> {
    name: &'a str,
    type_name: &'a str,
    default_timezone: Option<Tz>,
    registry: &'a dyn TimezoneRegistry,
}

impl<'a> ColumnBuilder<'a> {
    /// Creates a builder resolving zones through [`IanaRegistry`].
    #[inline]
    pub fn new(name: &'a str, type_name: &'a str) -> Self {
        Self {
            name,
            type_name,
            default_timezone: None,
            registry: &IanaRegistry,
        }
    }

    /// Zone applied when the descriptor names none.
    #[inline]
    pub const fn default_timezone(self, timezone: Tz) -> Self {
        Self {
            default_timezone: Some(timezone),
            ..self
        }
    }

    /// Resolve descriptor zones through `registry` instead.
    #[inline]
    pub const fn registry(self, registry: &'a dyn TimezoneRegistry) -> Self {
        Self { registry, ..self }
    }

    /// Build whichever column the descriptor names.
    pub fn build(self) -> Result<AnyTimeColumn> {
        AnyTimeColumn::parse(self.name, self.type_name, self.default_timezone, self.registry)
    }

    /// Build a `Time` column, rejecting any other descriptor.
    pub fn build_time(self) -> Result<TimeColumn> {
        TimeColumn::parse(self.name, self.type_name, self.default_timezone, self.registry)
    }

    /// Build a `Time64` column, rejecting any other descriptor.
    pub fn build_time64(self) -> Result<Time64Column> {
        Time64Column::parse(self.name, self.type_name, self.default_timezone, self.registry)
    }
}

impl core::fmt::Debug for ColumnBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColumnBuilder")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("default_timezone", &self.default_timezone)
            .finish_non_exhaustive()
    }
}

/// Declarative column configuration.
///
/// ```toml
/// name = "opened_at"
/// type = "Time64(3)"
/// default_timezone = "Europe/Berlin"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnConfig {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub default_timezone: Option<String>,
}

impl ColumnConfig {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default_timezone: None,
        }
    }

    /// Build the column, resolving zone names through [`IanaRegistry`].
    pub fn build(&self) -> Result<AnyTimeColumn> {
        self.build_with(&IanaRegistry)
    }

    /// Build the column, resolving every zone name through `registry`.
    pub fn build_with(&self, registry: &dyn TimezoneRegistry) -> Result<AnyTimeColumn> {
        let mut builder = ColumnBuilder::new(&self.name, &self.type_name).registry(registry);
        if let Some(name) = &self.default_timezone {
            builder = builder.default_timezone(registry.load(name)?);
        }
        builder.build()
    }
}
