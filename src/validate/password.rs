//! Password Validator & Strength Scorer

use super::{is_space, FieldError, Verdict};

const MIN_LENGTH: usize = 8;

/// Which strength rules a password satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordCriteria {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordCriteria {
    /// Evaluate every rule independently on the raw value
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_min_length: password.chars().count() >= MIN_LENGTH,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(is_special),
        }
    }

    /// Number of satisfied rules (0-4)
    pub fn score(&self) -> u8 {
        [self.has_min_length, self.has_uppercase, self.has_digit, self.has_special]
            .iter()
            .filter(|&&x| x)
            .count() as u8
    }

    /// Strength bar fill (0-100)
    pub fn percent(&self) -> u16 {
        u16::from(self.score()) * 100 / 4
    }

    pub fn is_complete(&self) -> bool {
        self.score() == 4
    }

    pub fn label(&self) -> &'static str {
        strength_label(self.score())
    }
}

/// Neither a word character nor whitespace
fn is_special(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_' || is_space(c))
}

/// Get strength label for a score
fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "Empty",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        _ => "Strong",
    }
}

/// Validate a password, reporting the first unmet rule.
pub fn validate_password(value: &str) -> Verdict {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }

    let criteria = PasswordCriteria::evaluate(value);
    if !criteria.has_min_length {
        return Err(FieldError::PasswordTooShort);
    }
    if !criteria.has_uppercase {
        return Err(FieldError::PasswordNoUppercase);
    }
    if !criteria.has_digit {
        return Err(FieldError::PasswordNoDigit);
    }
    if !criteria.has_special {
        return Err(FieldError::PasswordNoSpecial);
    }

    Ok(())
}
