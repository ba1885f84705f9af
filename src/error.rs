//! Error types for building a clock configuration.
//!
//! Rendering and the countdown timer never fail; the only errors surfaced to a
//! caller come from turning host-provided key/value pairs into a
//! [`ClockConfig`](crate::config::ClockConfig).

use thiserror::Error;

/// Rejected configuration input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Color value was not a `#RRGGBB` hex string.
    #[error("invalid color for `{key}`: {value:?} (expected #RRGGBB)")]
    InvalidColor { key: String, value: String },

    /// Flag value was not a recognised boolean spelling.
    #[error("invalid boolean for `{key}`: {value:?}")]
    InvalidBool { key: String, value: String },

    /// Numeric value did not parse as an integer.
    #[error("invalid integer for `{key}`: {value:?}")]
    InvalidInteger { key: String, value: String },

    /// Cell padding must be zero or positive.
    #[error("cell padding must be >= 0, got {0}")]
    NegativeCellPadding(i64),

    /// Cell padding above [`MAX_CELL_PADDING`](crate::config::MAX_CELL_PADDING).
    #[error("cell padding must be <= {max}, got {0}", max = crate::config::MAX_CELL_PADDING)]
    CellPaddingTooLarge(i64),

    /// Segment stroke width must be at least one pixel.
    #[error("stroke width must be >= 1, got {0}")]
    InvalidStrokeWidth(i64),

    /// Initial clock value outside the displayable range.
    #[error("initial value must be in 0..=24, got {0}")]
    InitialValueOutOfRange(i64),

    /// Offset mode was neither `centered` nor `padding`.
    #[error("invalid offset mode {0:?} (expected `centered` or `padding`)")]
    InvalidOffsetMode(String),

    /// Settings document was not valid TOML.
    #[error("failed to parse settings: {0}")]
    Toml(String),

    /// Settings value type that cannot be expressed as a key/value pair.
    #[error("unsupported value type for `{0}` (expected string, integer or boolean)")]
    UnsupportedValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self { Self::Toml(err.to_string()) }
}
