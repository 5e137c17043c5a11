//! Display formatting for stored phone numbers.

use crate::mask::DigitString;

/// Format a stored phone number for display.
///
/// - 10 digits: `(555) 123-4567`
/// - 11 digits with a leading `1`: `+1 (555) 123-4567`
/// - anything else: the input, trimmed
pub fn format_phone_number(raw: &str) -> String {
    let digits = DigitString::from_raw(raw);
    let d = digits.as_str();
    match d.len() {
        10 => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
        11 if d.starts_with('1') => format!("+1 ({}) {}-{}", &d[1..4], &d[4..7], &d[7..]),
        _ => raw.trim().to_owned(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
