//! Password-strength heuristic for strength meters.

use std::fmt;

/// Coarse strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        })
    }
}

/// Score in `0..=4` plus its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub level: StrengthLevel,
}

/// One point each for: 8+ chars, 12+ chars, mixed case, a digit, a symbol.
/// Capped at 4.
pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let has_lower = password.chars().any(char::is_lowercase);
    let has_upper = password.chars().any(char::is_uppercase);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    let points = [len >= 8, len >= 12, has_lower && has_upper, has_digit, has_symbol]
        .into_iter()
        .filter(|&p| p)
        .count();
    let score = points.min(4) as u8;

    let level = match score {
        0 | 1 => StrengthLevel::Weak,
        2 => StrengthLevel::Fair,
        3 => StrengthLevel::Good,
        _ => StrengthLevel::Strong,
    };
    PasswordStrength { score, level }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn score(p: &str) -> u8 {
        password_strength(p).score
    }

    #[test]
    fn empty_is_weak() {
        assert_eq!(
            password_strength(""),
            PasswordStrength {
                score: 0,
                level: StrengthLevel::Weak
            }
        );
    }

    #[test]
    fn individual_points() {
        assert_eq!(score("abcdefgh"), 1);
        assert_eq!(score("abcdefghijkl"), 2);
        assert_eq!(score("aB"), 1);
        assert_eq!(score("a1"), 1);
        assert_eq!(score("a!"), 1);
    }

    #[test]
    fn whitespace_is_not_a_symbol() {
        assert_eq!(score("a b"), 0);
    }

    #[test]
    fn levels() {
        assert_eq!(password_strength("password").level, StrengthLevel::Weak);
        assert_eq!(password_strength("password1").level, StrengthLevel::Fair);
        assert_eq!(password_strength("Password1").level, StrengthLevel::Good);
        assert_eq!(password_strength("Password1!").level, StrengthLevel::Strong);
    }

    #[test]
    fn capped_at_four() {
        assert_eq!(score("Correct-Horse-Battery-9"), 4);
    }

    #[test]
    fn level_ordering_and_display() {
        assert!(StrengthLevel::Weak < StrengthLevel::Strong);
        assert_eq!(StrengthLevel::Good.to_string(), "Good");
    }
}
