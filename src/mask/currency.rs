//! Cent-based dollar amounts and their grouped decimal rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CurrencyStyle
// ---------------------------------------------------------------------------

/// Locale punctuation for currency amounts. Defaults to en-US.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencyStyle {
    /// Rendered beside the field as a decoration, never inside the value.
    pub symbol: String,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl CurrencyStyle {
    pub fn new() -> Self {
        Self {
            symbol: "$".to_owned(),
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_separators(mut self, group: char, decimal: char) -> Self {
        self.group_separator = group;
        self.decimal_separator = decimal;
        self
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Usd
// ---------------------------------------------------------------------------

/// A non-negative dollar amount held as integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Usd {
    cents: u64,
}

impl Usd {
    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    /// Amount in dollars (`cents / 100`).
    pub fn dollars(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Grouped amount without a currency symbol, e.g. `1,234.56`.
    pub fn to_display(self, style: &CurrencyStyle) -> String {
        group_cents(self.cents, style)
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display(&CurrencyStyle::default()))
    }
}

/// Render `cents` as grouped whole units, the decimal separator, and exactly
/// two fraction digits.
pub fn group_cents(cents: u64, style: &CurrencyStyle) -> String {
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 3);
    let lead = whole.len() % 3;
    for (i, ch) in whole.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(style.group_separator);
        }
        out.push(ch);
    }
    out.push(style.decimal_separator);
    out.push_str(&format!("{frac:02}"));
    out
}

// ===========================================================================
// Tests
// ===========================================================================
