//! Email Validator
//!
//! Purely syntactic: no deliverability or DNS checks.

use std::sync::LazyLock;

use regex::Regex;

use super::{FieldError, Verdict};

/// Anything but `@` and browser whitespace (the regex crate's `\s` differs)
const PART: &str =
    r"[^@\t\n\x0B\x0C\r \x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}]";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!("(?i)^{PART}+@{PART}+\\.{PART}{{2,}}$");
    Regex::new(&pattern).expect("email pattern is valid")
});

/// Validate `local@domain.tld`, where the last label has at least two characters.
pub fn validate_email(value: &str) -> Verdict {
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }

    if !EMAIL_PATTERN.is_match(value) {
        return Err(FieldError::EmailInvalid);
    }

    Ok(())
}
