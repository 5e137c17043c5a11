//! Error types.
//!
//! Formatting itself never fails: malformed input degrades to a best-effort
//! display value. The errors here cover the edges of the crate where input
//! arrives from outside a keystroke: mask names, configuration files, and
//! free-form date entry.

use std::path::PathBuf;

use thiserror::Error;

/// An unrecognized mask type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mask type '{name}' (expected one of: account, zip, phone, ssn, usd)")]
pub struct MaskTypeError {
    pub name: String,
}

/// Errors from loading a [`FieldConfig`](crate::config::FieldConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid field config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors from parsing a typed-in date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateInputError {
    #[error("empty date input")]
    Empty,

    #[error("unrecognized date '{0}' (expected MM/DD/YYYY or YYYY-MM-DD)")]
    Unrecognized(String),

    #[error("date out of range: {year:04}-{month:02}-{day:02}")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

// ===========================================================================
// Tests
// ===========================================================================
