use thiserror::Error;
use timecol_types::TypeParseError;

/// Boxed error produced by host capabilities such as [`Valuer`](crate::Valuer)
/// or [`Scanner`](crate::Scanner).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum TimeError {
    /// Descriptor matches none of the recognised shapes
    #[error("unsupported column type \"{0}\"")]
    UnsupportedColumnType(String),

    /// Descriptor has the right shape but a malformed parameter
    #[error("Parse error: {0}")]
    TypeParse(TypeParseError),

    /// Zone name unknown to the timezone registry
    #[error("Timezone error: unknown time zone \"{0}\"")]
    Timezone(String),

    /// No textual layout nor integer form matched the input
    #[error("cannot parse {target} value: {value}")]
    InvalidTimeValue {
        /// Column type the value was written to.
        target: &'static str,
        /// The original input.
        value: String,
    },

    /// Host shape not supported in this direction
    #[error("clickhouse [{op}]: converting {from} to {to} is unsupported{}", hint_suffix(.hint))]
    Conversion {
        /// Operation that failed (`Append`, `AppendRow`, `ScanRow`).
        op: &'static str,
        /// Source type name.
        from: String,
        /// Destination type name.
        to: String,
        /// Extra context.
        hint: Option<String>,
        /// Underlying failure, when a host capability produced one.
        #[source]
        source: Option<BoxError>,
    },

    /// A destination scanner rejected the value
    #[error("Scan error: {0}")]
    Scan(#[source] BoxError),

    /// Row index past the end of the column
    #[error("row {index} is out of range for a column of {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },

    /// Tick cannot be represented as an instant
    #[error("tick {0} is out of range")]
    TickOutOfRange(i64),

    /// Malformed or truncated wire input
    #[error("Decode error: {0}")]
    Decode(String),
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(". {hint}"),
        None => String::new(),
    }
}

impl From<TypeParseError> for TimeError {
    fn from(value: TypeParseError) -> Self {
        match value {
            TypeParseError::Unsupported(type_name) => TimeError::UnsupportedColumnType(type_name),
            other => TimeError::TypeParse(other),
        }
    }
}

impl TimeError {
    /// A conversion error without hint or source.
    pub fn conversion(op: &'static str, from: impl Into<String>, to: impl Into<String>) -> Self {
        TimeError::Conversion {
            op,
            from: from.into(),
            to: to.into(),
            hint: None,
            source: None,
        }
    }

    /// Attach a hint to a [`TimeError::Conversion`]; other variants pass through.
    #[must_use]
    pub fn with_hint(self, text: impl Into<String>) -> Self {
        match self {
            TimeError::Conversion {
                op,
                from,
                to,
                source,
                ..
            } => TimeError::Conversion {
                op,
                from,
                to,
                hint: Some(text.into()),
                source,
            },
            other => other,
        }
    }
}

/// Result type for column operations
pub type Result<T> = std::result::Result<T, TimeError>;
