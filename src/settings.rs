//! Settings files: TOML documents flattened into key/value pairs.
//!
//! Keys may sit at the top level or inside a `[clock]` table (the table wins
//! when both are present). The result feeds
//! [`ClockConfig::apply_pairs`](crate::config::ClockConfig::apply_pairs), so
//! a settings file goes through exactly the same validation as any other
//! configuration source.
//!
//! ```toml
//! [clock]
//! active_color = "#FF2200"
//! show_grid = true
//! cell_padding = 1
//! initial_value = 14
//! ```

use toml::{Table, Value};

use crate::config::ClockConfig;
use crate::error::ConfigError;

/// Table name that holds clock settings.
pub const CLOCK_TABLE: &str = "clock";

/// Flatten a TOML document into `(key, value)` string pairs.
pub fn pairs_from_toml(source: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let document: Table = toml::from_str(source)?;
    let mut pairs = Vec::new();

    for (key, value) in &document {
        if key == CLOCK_TABLE {
            continue;
        }
        pairs.push((key.clone(), scalar_to_string(key, value)?));
    }

    if let Some(clock) = document.get(CLOCK_TABLE) {
        let Value::Table(clock) = clock else {
            return Err(ConfigError::UnsupportedValue(CLOCK_TABLE.to_owned()));
        };
        for (key, value) in clock {
            pairs.push((key.clone(), scalar_to_string(key, value)?));
        }
    }

    Ok(pairs)
}

/// Parse a settings document straight into a [`ClockConfig`].
pub fn config_from_toml(source: &str) -> Result<ClockConfig, ConfigError> { ClockConfig::from_pairs(pairs_from_toml(source)?) }

fn scalar_to_string(
    key: &str,
    value: &Value,
) -> Result<String, ConfigError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        _ => Err(ConfigError::UnsupportedValue(key.to_owned())),
    }
}
