//! Field configuration loaded from TOML.
//!
//! ```toml
//! mask = "usd"
//! placeholder = "0.00"
//!
//! [currency]
//! symbol = "$"
//! group_separator = ","
//! decimal_separator = "."
//!
//! [ssn]
//! obscure_char = "*"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mask::{CurrencyStyle, MaskFormatter, MaskType};

// ---------------------------------------------------------------------------
// SsnStyle
// ---------------------------------------------------------------------------

/// How an obscured SSN is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SsnStyle {
    pub obscure_char: char,
}

impl Default for SsnStyle {
    fn default() -> Self {
        Self { obscure_char: '*' }
    }
}

// ---------------------------------------------------------------------------
// FieldConfig
// ---------------------------------------------------------------------------

/// Options for one masked field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub mask: MaskType,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub currency: CurrencyStyle,
    #[serde(default)]
    pub ssn: SsnStyle,
}

impl FieldConfig {
    /// Default options for `mask`.
    pub fn new(mask: MaskType) -> Self {
        Self {
            mask,
            placeholder: String::new(),
            currency: CurrencyStyle::default(),
            ssn: SsnStyle::default(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), mask = %config.mask, "loaded field config");
        Ok(config)
    }

    /// Formatter for this field's mask and currency punctuation.
    pub fn formatter(&self) -> MaskFormatter {
        MaskFormatter::new(self.mask).with_currency(self.currency.clone())
    }

    /// Separators must be distinct non-digits; otherwise a formatted amount
    /// would not survive being re-read as digits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let group = self.currency.group_separator;
        let decimal = self.currency.decimal_separator;
        if group.is_ascii_digit() {
            return Err(ConfigError::InvalidValue {
                field: "currency.group_separator",
                reason: format!("'{group}' is a digit"),
            });
        }
        if decimal.is_ascii_digit() {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_separator",
                reason: format!("'{decimal}' is a digit"),
            });
        }
        if group == decimal {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_separator",
                reason: format!("'{decimal}' is also the group separator"),
            });
        }
        if self.currency.symbol.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                field: "currency.symbol",
                reason: "symbol must not contain digits".to_owned(),
            });
        }
        if self.ssn.obscure_char.is_ascii_digit() {
            return Err(ConfigError::InvalidValue {
                field: "ssn.obscure_char",
                reason: format!("'{}' is a digit", self.ssn.obscure_char),
            });
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
