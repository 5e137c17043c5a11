//! Currency amounts with their symbol, for read-only display.

use crate::mask::currency::group_cents;
use crate::mask::CurrencyStyle;

/// `$1,234.56`, or `-$1,234.56` for negative amounts.
pub fn format_currency(cents: i64, style: &CurrencyStyle) -> String {
    let body = group_cents(cents.unsigned_abs(), style);
    if cents < 0 {
        format!("-{}{body}", style.symbol)
    } else {
        format!("{}{body}", style.symbol)
    }
}

/// [`format_currency`] for a dollar amount, rounded to the nearest cent.
///
/// Amounts that are not finite, or whose cent count does not fit in an
/// `i64`, render as zero.
pub fn format_dollars(amount: f64, style: &CurrencyStyle) -> String {
    let cents = (amount * 100.0).round();
    // 2^63 is exact in f64; anything at or beyond it would saturate.
    let cents = if cents.is_finite() && cents.abs() < i64::MAX as f64 {
        cents as i64
    } else {
        0
    };
    format_currency(cents, style)
}

// ===========================================================================
// Tests
// ===========================================================================
