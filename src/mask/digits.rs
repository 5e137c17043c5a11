//! Digit-only normalization of raw input.

use std::fmt;

/// Raw input with every non-digit character removed.
///
/// Only ASCII `0`-`9` survive; other Unicode digits are treated as noise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DigitString(String);

impl DigitString {
    /// Strip everything that is not an ASCII digit.
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.chars().filter(char::is_ascii_digit).collect())
    }

    /// Strip non-digits and keep at most `cap` digits (from the left).
    pub fn from_raw_capped(raw: &str, cap: Option<usize>) -> Self {
        let mut digits = Self::from_raw(raw);
        if let Some(cap) = cap {
            // ASCII only, so byte length == char count.
            digits.0.truncate(cap);
        }
        digits
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the digits as an unsigned integer.
    ///
    /// Returns `None` when empty or when the value overflows `u64`.
    pub fn parse_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Count ASCII digits in `s`.
pub fn count_digits(s: &str) -> usize {
    s.bytes().filter(u8::is_ascii_digit).count()
}

/// Byte offset just after the `n`th digit of `s` (or 0 when `n == 0`).
///
/// When `s` holds fewer than `n` digits, returns `s.len()`.
pub fn offset_after_digits(s: &str, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, b) in s.bytes().enumerate() {
        if b.is_ascii_digit() {
            seen += 1;
            if seen == n {
                return i + 1;
            }
        }
    }
    s.len()
}

// ===========================================================================
// Tests
// ===========================================================================
