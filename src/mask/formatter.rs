//! Mask formatting: raw input to display string and emitted value.
//!
//! Formatting is a pure function of the digit string and the mask type. It
//! never fails for text masks. The `usd` mask reads the digits as integer
//! cents and yields `None` when no amount can be parsed, in which case the
//! caller keeps its previous state.

use std::fmt;

use super::currency::{CurrencyStyle, Usd};
use super::digits::DigitString;
use super::kind::MaskType;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// The normalized value handed to the consuming form.
#[derive(Debug, Clone, PartialEq)]
pub enum EmittedValue {
    /// Formatted display string (account, zip, phone, ssn).
    Text(String),
    /// Numeric dollar amount (usd).
    Amount(Usd),
}

impl EmittedValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EmittedValue::Text(s) => Some(s),
            EmittedValue::Amount(_) => None,
        }
    }

    pub fn as_amount(&self) -> Option<Usd> {
        match self {
            EmittedValue::Amount(usd) => Some(*usd),
            EmittedValue::Text(_) => None,
        }
    }

    /// Dollar amount for usd fields, `None` for text fields.
    pub fn as_dollars(&self) -> Option<f64> {
        self.as_amount().map(Usd::dollars)
    }
}

impl fmt::Display for EmittedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmittedValue::Text(s) => f.write_str(s),
            EmittedValue::Amount(usd) => write!(f, "{:.2}", usd.dollars()),
        }
    }
}

/// One formatting result.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskOutput {
    /// Display string for the input element.
    pub display: String,
    /// Value for the host form.
    pub emitted: EmittedValue,
    /// Digits the display was built from.
    pub digits: DigitString,
}

// ---------------------------------------------------------------------------
// MaskFormatter
// ---------------------------------------------------------------------------

/// Formatter for a single mask type.
///
/// # Examples
///
/// ```
/// use masked_fields::mask::{MaskFormatter, MaskType};
///
/// let out = MaskFormatter::new(MaskType::Phone).format("5551234567").unwrap();
/// assert_eq!(out.display, "(555) 123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskFormatter {
    kind: MaskType,
    currency: CurrencyStyle,
}

impl MaskFormatter {
    pub fn new(kind: MaskType) -> Self {
        Self {
            kind,
            currency: CurrencyStyle::default(),
        }
    }

    /// Set the currency punctuation used by the usd mask (builder pattern).
    pub fn with_currency(mut self, currency: CurrencyStyle) -> Self {
        self.currency = currency;
        self
    }

    pub fn kind(&self) -> MaskType {
        self.kind
    }

    pub fn currency(&self) -> &CurrencyStyle {
        &self.currency
    }

    /// Normalize `raw` to digits, then apply the mask.
    ///
    /// Digits beyond the mask's maximum are dropped from the right.
    pub fn format(&self, raw: &str) -> Option<MaskOutput> {
        let digits = DigitString::from_raw_capped(raw, self.kind.max_digits());
        self.format_digits(digits)
    }

    /// Apply the mask to an already normalized digit string.
    pub fn format_digits(&self, digits: DigitString) -> Option<MaskOutput> {
        let d = digits.as_str();
        let (display, emitted) = match self.kind {
            MaskType::Account => {
                let s = group_account(d);
                (s.clone(), EmittedValue::Text(s))
            }
            MaskType::Zip => (d.to_owned(), EmittedValue::Text(d.to_owned())),
            MaskType::Phone => {
                let s = progressive_phone(d);
                (s.clone(), EmittedValue::Text(s))
            }
            MaskType::Ssn => {
                let s = progressive_ssn(d);
                (s.clone(), EmittedValue::Text(s))
            }
            MaskType::Usd => {
                let usd = Usd::from_cents(digits.parse_u64()?);
                (usd.to_display(&self.currency), EmittedValue::Amount(usd))
            }
        };
        Some(MaskOutput {
            display,
            emitted,
            digits,
        })
    }
}

/// Format `raw` with `kind` using default currency punctuation.
pub fn format(raw: &str, kind: MaskType) -> Option<MaskOutput> {
    MaskFormatter::new(kind).format(raw)
}

// ---------------------------------------------------------------------------
// Per-mask rules
// ---------------------------------------------------------------------------

/// `1234-5678-1234-5678`, one separator per completed group of four that is
/// followed by more digits.
fn group_account(d: &str) -> String {
    let mut out = String::with_capacity(d.len() + d.len() / 4);
    for (i, ch) in d.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push('-');
        }
        out.push(ch);
    }
    out
}

/// `(AAA`, `(AAA) PPP`, `(AAA) PPP-XXXX`.
fn progressive_phone(d: &str) -> String {
    match d.len() {
        0 => String::new(),
        1..=3 => format!("({d}"),
        4..=6 => format!("({}) {}", &d[..3], &d[3..]),
        _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
    }
}

/// `AAA`, `AAA-PP`, `AAA-PP-XXXX`.
fn progressive_ssn(d: &str) -> String {
    match d.len() {
        0..=3 => d.to_owned(),
        4..=5 => format!("{}-{}", &d[..3], &d[3..]),
        _ => format!("{}-{}-{}", &d[..3], &d[3..5], &d[5..]),
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn display(raw: &str, kind: MaskType) -> String {
        format(raw, kind).unwrap().display
    }

    // -----------------------------------------------------------------------
    // account
    // -----------------------------------------------------------------------

    #[test]
    fn account_separator_counts() {
        for (n, seps) in [(4, 0), (8, 1), (12, 2), (16, 3)] {
            let raw = "1234567812345678"[..n].to_owned();
            let out = display(&raw, MaskType::Account);
            assert_eq!(out.matches('-').count(), seps, "{n} digits");
        }
    }

    #[test]
    fn account_partial_groups() {
        assert_eq!(display("123", MaskType::Account), "123");
        assert_eq!(display("12345", MaskType::Account), "1234-5");
        assert_eq!(display("12345678", MaskType::Account), "1234-5678");
        assert_eq!(display("123456789", MaskType::Account), "1234-5678-9");
    }

    #[test]
    fn account_full_and_over_length() {
        assert_eq!(
            display("1234567812345678", MaskType::Account),
            "1234-5678-1234-5678"
        );
        assert_eq!(
            display("12345678123456789999", MaskType::Account),
            "1234-5678-1234-5678"
        );
    }

    // -----------------------------------------------------------------------
    // zip
    // -----------------------------------------------------------------------

    #[test]
    fn zip_is_digits_only() {
        assert_eq!(display("9021", MaskType::Zip), "9021");
        assert_eq!(display("90-210", MaskType::Zip), "90210");
        assert_eq!(display("902101234", MaskType::Zip), "90210");
    }

    // -----------------------------------------------------------------------
    // phone
    // -----------------------------------------------------------------------

    #[test]
    fn phone_progressive() {
        assert_eq!(display("", MaskType::Phone), "");
        assert_eq!(display("5", MaskType::Phone), "(5");
        assert_eq!(display("555", MaskType::Phone), "(555");
        assert_eq!(display("5551", MaskType::Phone), "(555) 1");
        assert_eq!(display("555123", MaskType::Phone), "(555) 123");
        assert_eq!(display("5551234", MaskType::Phone), "(555) 123-4");
        assert_eq!(display("5551234567", MaskType::Phone), "(555) 123-4567");
    }

    #[test]
    fn phone_ignores_noise_and_extra_digits() {
        assert_eq!(
            display("tel: 555.123.4567 ext 89", MaskType::Phone),
            "(555) 123-4567"
        );
    }

    // -----------------------------------------------------------------------
    // ssn
    // -----------------------------------------------------------------------

    #[test]
    fn ssn_progressive() {
        assert_eq!(display("", MaskType::Ssn), "");
        assert_eq!(display("12", MaskType::Ssn), "12");
        assert_eq!(display("123", MaskType::Ssn), "123");
        assert_eq!(display("1234", MaskType::Ssn), "123-4");
        assert_eq!(display("12345", MaskType::Ssn), "123-45");
        assert_eq!(display("123456", MaskType::Ssn), "123-45-6");
        assert_eq!(display("123456789", MaskType::Ssn), "123-45-6789");
        assert_eq!(display("1234567890", MaskType::Ssn), "123-45-6789");
    }

    // -----------------------------------------------------------------------
    // usd
    // -----------------------------------------------------------------------

    #[test]
    fn usd_reads_digits_as_cents() {
        let out = format("12345", MaskType::Usd).unwrap();
        assert_eq!(out.display, "123.45");
        assert_eq!(out.emitted.as_dollars(), Some(123.45));

        let out = format("100000", MaskType::Usd).unwrap();
        assert_eq!(out.display, "1,000.00");
        assert_eq!(out.emitted.as_dollars(), Some(1000.0));
        assert_eq!(out.emitted.to_string(), "1000.00");
    }

    #[test]
    fn usd_reformats_its_own_display() {
        assert_eq!(display("$1,000.00", MaskType::Usd), "1,000.00");
        assert_eq!(display("0.05", MaskType::Usd), "0.05");
    }

    #[test]
    fn usd_fails_closed() {
        assert_eq!(format("", MaskType::Usd), None);
        assert_eq!(format("abc", MaskType::Usd), None);
        assert_eq!(format("123456789012345678901", MaskType::Usd), None);
    }

    #[test]
    fn usd_custom_separators() {
        let f = MaskFormatter::new(MaskType::Usd)
            .with_currency(CurrencyStyle::new().with_separators('.', ','));
        assert_eq!(f.format("123456").unwrap().display, "1.234,56");
    }

    // -----------------------------------------------------------------------
    // emitted values
    // -----------------------------------------------------------------------

    #[test]
    fn text_masks_emit_display() {
        for kind in [MaskType::Account, MaskType::Zip, MaskType::Phone, MaskType::Ssn] {
            let out = format("123456789", kind).unwrap();
            assert_eq!(out.emitted, EmittedValue::Text(out.display.clone()));
            assert_eq!(out.emitted.as_amount(), None);
        }
    }

    #[test]
    fn output_keeps_capped_digits() {
        let out = format("(555) 123-4567 x9", MaskType::Phone).unwrap();
        assert_eq!(out.digits.as_str(), "5551234567");
    }
}
