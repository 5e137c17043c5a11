//! SSN obscuring: a Revealed/Obscured overlay driven by focus and blur.
//!
//! The overlay is display-only. The field's real value is never rewritten;
//! the host renders [`SsnVisibility::overlay`] on top of it while obscured.

use std::sync::LazyLock;

use regex::Regex;

static COMPLETE_SSN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{3}-\d{2}-(\d{4})$").expect("SSN pattern is a valid regex")
});

/// Whether `value` is a complete, formatted SSN (`DDD-DD-DDDD`).
pub fn is_complete(value: &str) -> bool {
    COMPLETE_SSN.is_match(value)
}

/// Starred representation keeping only the last four digits, or `None` when
/// `value` is not a complete SSN.
///
/// ```
/// use masked_fields::mask::ssn::obscure;
///
/// assert_eq!(obscure("123-45-6789", '*').as_deref(), Some("***-**-6789"));
/// assert_eq!(obscure("123-45-678", '*'), None);
/// ```
pub fn obscure(value: &str, star: char) -> Option<String> {
    let caps = COMPLETE_SSN.captures(value)?;
    let mut out = String::with_capacity(11);
    out.extend(std::iter::repeat_n(star, 3));
    out.push('-');
    out.extend(std::iter::repeat_n(star, 2));
    out.push('-');
    out.push_str(&caps[1]);
    Some(out)
}

// ---------------------------------------------------------------------------
// SsnVisibility
// ---------------------------------------------------------------------------

/// Overlay state for an SSN field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SsnVisibility {
    /// The formatted digits are shown as typed.
    #[default]
    Revealed,
    /// The overlay covers the field.
    Obscured { overlay: String },
}

impl SsnVisibility {
    /// Focus always reveals.
    pub fn focus(&mut self) {
        *self = SsnVisibility::Revealed;
    }

    /// Blur obscures only a complete SSN; partial values stay visible.
    pub fn blur(&mut self, value: &str, star: char) {
        *self = match obscure(value, star) {
            Some(overlay) => SsnVisibility::Obscured { overlay },
            None => SsnVisibility::Revealed,
        };
    }

    pub fn is_obscured(&self) -> bool {
        matches!(self, SsnVisibility::Obscured { .. })
    }

    pub fn overlay(&self) -> Option<&str> {
        match self {
            SsnVisibility::Obscured { overlay } => Some(overlay),
            SsnVisibility::Revealed => None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
