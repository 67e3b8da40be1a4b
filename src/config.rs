//! Startup settings for the sandbox binary.
//!
//! Defaults can be overridden with `LIFE_RATE`, `LIFE_CELL_SIZE`,
//! `LIFE_WINDOW_WIDTH` and `LIFE_WINDOW_HEIGHT`. Rate and cell size are
//! clamped later by the controller, so only unparsable values are errors.

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

use crate::application::{DEFAULT_CELL_SIZE, DEFAULT_RATE};

pub const DEFAULT_WINDOW_WIDTH: u32 = 1000;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub rate: u32,
    pub cell_size: u32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            cell_size: DEFAULT_CELL_SIZE,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Settings {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build settings from any key lookup; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        let window_width = parse_var(&lookup, "LIFE_WINDOW_WIDTH", defaults.window_width)?;
        let window_height = parse_var(&lookup, "LIFE_WINDOW_HEIGHT", defaults.window_height)?;

        Ok(Self {
            rate: parse_var(&lookup, "LIFE_RATE", defaults.rate)?,
            cell_size: parse_var(&lookup, "LIFE_CELL_SIZE", defaults.cell_size)?,
            window_width: nonzero(window_width, "LIFE_WINDOW_WIDTH")?,
            window_height: nonzero(window_height, "LIFE_WINDOW_HEIGHT")?,
        })
    }
}

fn parse_var<F>(lookup: &F, var: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidNumber { var, value, source }),
    }
}

fn nonzero(value: u32, var: &'static str) -> Result<u32, ConfigError> {
    if value == 0 {
        Err(ConfigError::Zero { var })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|&(k, v)| (k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.rate, 4);
        assert_eq!(settings.cell_size, 32);
    }

    #[test]
    fn test_overrides() {
        let settings =
            Settings::from_lookup(lookup(&[("LIFE_RATE", " 7 "), ("LIFE_CELL_SIZE", "16")])).unwrap();
        assert_eq!(settings.rate, 7);
        assert_eq!(settings.cell_size, 16);
        assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn test_invalid_number() {
        let err = Settings::from_lookup(lookup(&[("LIFE_RATE", "fast")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: "LIFE_RATE", .. }));
        assert!(err.to_string().contains("LIFE_RATE"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = Settings::from_lookup(lookup(&[("LIFE_WINDOW_HEIGHT", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { var: "LIFE_WINDOW_HEIGHT" }));
    }
}
