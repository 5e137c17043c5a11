//! Date display styles and typed-date parsing.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::DateInputError;

static US_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("US date pattern is a valid regex")
});

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("ISO date pattern is a valid regex")
});

/// How a date is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `10/16/2026`
    #[default]
    Short,
    /// `Oct 16, 2026`
    Medium,
    /// `October 16, 2026`
    Long,
    /// `2026-10-16`
    Iso,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Short => "%m/%d/%Y",
            DateStyle::Medium => "%b %-d, %Y",
            DateStyle::Long => "%B %-d, %Y",
            DateStyle::Iso => "%Y-%m-%d",
        }
    }
}

pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    date.format(style.pattern()).to_string()
}

/// Parse `MM/DD/YYYY`, `M/D/YYYY` or `YYYY-MM-DD`.
pub fn parse_date_input(raw: &str) -> Result<NaiveDate, DateInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateInputError::Empty);
    }

    let numbers = if let Some(caps) = US_DATE.captures(trimmed) {
        ymd(&caps[3], &caps[1], &caps[2])
    } else if let Some(caps) = ISO_DATE.captures(trimmed) {
        ymd(&caps[1], &caps[2], &caps[3])
    } else {
        None
    };
    let (year, month, day) =
        numbers.ok_or_else(|| DateInputError::Unrecognized(trimmed.to_owned()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateInputError::OutOfRange {
        year,
        month,
        day,
    })
}

fn ymd(year: &str, month: &str, day: &str) -> Option<(i32, u32, u32)> {
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn oct16() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn styles() {
        assert_eq!(format_date(oct16(), DateStyle::Short), "10/16/2026");
        assert_eq!(format_date(oct16(), DateStyle::Medium), "Oct 16, 2026");
        assert_eq!(format_date(oct16(), DateStyle::Long), "October 16, 2026");
        assert_eq!(format_date(oct16(), DateStyle::Iso), "2026-10-16");
    }

    #[test]
    fn single_digit_day_is_not_padded_in_words() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_date(d, DateStyle::Medium), "Mar 5, 2026");
        assert_eq!(format_date(d, DateStyle::Short), "03/05/2026");
    }

    #[test]
    fn parse_us_and_iso() {
        assert_eq!(parse_date_input("10/16/2026"), Ok(oct16()));
        assert_eq!(parse_date_input(" 10/16/2026 "), Ok(oct16()));
        assert_eq!(parse_date_input("2026-10-16"), Ok(oct16()));
        assert_eq!(
            parse_date_input("3/5/2026"),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap())
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_date_input("   "), Err(DateInputError::Empty));
        assert_eq!(
            parse_date_input("16.10.2026"),
            Err(DateInputError::Unrecognized("16.10.2026".into()))
        );
        assert_eq!(
            parse_date_input("02/30/2026"),
            Err(DateInputError::OutOfRange {
                year: 2026,
                month: 2,
                day: 30
            })
        );
        assert!(matches!(
            parse_date_input("13/01/2026"),
            Err(DateInputError::OutOfRange { month: 13, .. })
        ));
    }

    #[test]
    fn leap_day() {
        assert!(parse_date_input("02/29/2028").is_ok());
        assert!(parse_date_input("02/29/2026").is_err());
    }
}
