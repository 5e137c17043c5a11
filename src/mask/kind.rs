//! Mask type selector and its per-type metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MaskTypeError;

// ---------------------------------------------------------------------------
// MaskType
// ---------------------------------------------------------------------------

/// Which punctuation/grouping rule applies to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskType {
    /// Bank or card account number, `1234-5678-1234-5678`.
    Account,
    /// US postal code, digits only.
    Zip,
    /// US phone number, `(555) 123-4567`.
    Phone,
    /// Social security number, `123-45-6789`.
    Ssn,
    /// US dollar amount entered as cents, `1,234.56`.
    Usd,
}

impl MaskType {
    /// Every mask type, in declaration order.
    pub const ALL: [MaskType; 5] = [
        MaskType::Account,
        MaskType::Zip,
        MaskType::Phone,
        MaskType::Ssn,
        MaskType::Usd,
    ];

    /// The lowercase name used in configuration and hosts.
    pub fn name(self) -> &'static str {
        match self {
            MaskType::Account => "account",
            MaskType::Zip => "zip",
            MaskType::Phone => "phone",
            MaskType::Ssn => "ssn",
            MaskType::Usd => "usd",
        }
    }

    /// Maximum number of raw digits, or `None` when only numeric parsing
    /// bounds the value.
    pub fn max_digits(self) -> Option<usize> {
        match self {
            MaskType::Account => Some(16),
            MaskType::Zip => Some(5),
            MaskType::Phone => Some(10),
            MaskType::Ssn => Some(9),
            MaskType::Usd => None,
        }
    }

    /// Maximum length of the formatted display string, for the host input
    /// element's `maxlength`.
    pub fn max_length(self) -> Option<usize> {
        match self {
            MaskType::Account => Some(19),
            MaskType::Zip => Some(5),
            MaskType::Phone => Some(14),
            MaskType::Ssn => Some(11),
            MaskType::Usd => None,
        }
    }

    /// Virtual keyboard hint (`inputmode`).
    pub fn input_mode(self) -> &'static str {
        match self {
            MaskType::Phone => "tel",
            MaskType::Usd => "decimal",
            MaskType::Account | MaskType::Zip | MaskType::Ssn => "numeric",
        }
    }

    /// Browser autofill hint (`autocomplete`).
    pub fn autocomplete(self) -> &'static str {
        match self {
            MaskType::Account | MaskType::Ssn => "off",
            MaskType::Zip => "postal-code",
            MaskType::Phone => "tel-national",
            MaskType::Usd => "transaction-amount",
        }
    }

    /// Whether the emitted value is numeric rather than the display string.
    pub fn emits_number(self) -> bool {
        matches!(self, MaskType::Usd)
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaskType {
    type Err = MaskTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MaskType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MaskTypeError {
                name: trimmed.to_owned(),
            })
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("account".parse::<MaskType>().unwrap(), MaskType::Account);
        assert_eq!(" ZIP ".parse::<MaskType>().unwrap(), MaskType::Zip);
        assert_eq!("Usd".parse::<MaskType>().unwrap(), MaskType::Usd);
    }

    #[test]
    fn parse_unknown() {
        let err = "iban".parse::<MaskType>().unwrap_err();
        assert_eq!(err.name, "iban");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in MaskType::ALL {
            assert_eq!(kind.to_string().parse::<MaskType>().unwrap(), kind);
        }
    }

    #[test]
    fn digit_caps() {
        assert_eq!(MaskType::Account.max_digits(), Some(16));
        assert_eq!(MaskType::Phone.max_digits(), Some(10));
        assert_eq!(MaskType::Zip.max_digits(), Some(5));
        assert_eq!(MaskType::Ssn.max_digits(), Some(9));
        assert_eq!(MaskType::Usd.max_digits(), None);
    }

    #[test]
    fn display_lengths_fit_full_values() {
        assert_eq!(MaskType::Account.max_length(), Some("1234-5678-1234-5678".len()));
        assert_eq!(MaskType::Phone.max_length(), Some("(555) 123-4567".len()));
        assert_eq!(MaskType::Ssn.max_length(), Some("123-45-6789".len()));
    }

    #[test]
    fn input_hints() {
        assert_eq!(MaskType::Phone.input_mode(), "tel");
        assert_eq!(MaskType::Usd.input_mode(), "decimal");
        assert_eq!(MaskType::Zip.autocomplete(), "postal-code");
        assert_eq!(MaskType::Ssn.autocomplete(), "off");
    }

    #[test]
    fn only_usd_emits_number() {
        for kind in MaskType::ALL {
            assert_eq!(kind.emits_number(), kind == MaskType::Usd);
        }
    }
}
