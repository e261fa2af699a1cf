//! Name Validator

use super::{is_space, FieldError, Verdict};

/// Validate a person's name.
///
/// Rules apply in order and the first failure wins: present, at least two
/// characters once trimmed, then ASCII letters and whitespace only.
pub fn validate_name(value: &str) -> Verdict {
    if value.is_empty() {
        return Err(FieldError::NameRequired);
    }

    if value.trim_matches(is_space).chars().count() < 2 {
        return Err(FieldError::NameTooShort);
    }

    if !value.chars().all(|c| c.is_ascii_alphabetic() || is_space(c)) {
        return Err(FieldError::NameInvalidChars);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(validate_name(""), Err(FieldError::NameRequired));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(validate_name("J"), Err(FieldError::NameTooShort));
        assert_eq!(validate_name("   "), Err(FieldError::NameTooShort));
        assert_eq!(validate_name(" J "), Err(FieldError::NameTooShort));
        // Length is checked before the character class
        assert_eq!(validate_name("1"), Err(FieldError::NameTooShort));
    }

    #[test]
    fn test_invalid_chars() {
        assert_eq!(validate_name("John1"), Err(FieldError::NameInvalidChars));
        assert_eq!(validate_name("Jo-Ann"), Err(FieldError::NameInvalidChars));
        assert_eq!(validate_name("José"), Err(FieldError::NameInvalidChars));
        assert_eq!(validate_name("Jo\u{85}hn"), Err(FieldError::NameInvalidChars));
    }

    #[test]
    fn test_any_digit_rejected() {
        for d in '0'..='9' {
            let value = format!("Ann{}", d);
            assert_eq!(validate_name(&value), Err(FieldError::NameInvalidChars));
        }
    }

    #[test]
    fn test_valid() {
        assert!(validate_name("John").is_ok());
        assert!(validate_name("Mary Jane").is_ok());
        assert!(validate_name("  Al  ").is_ok());
        assert!(validate_name("Jo\tAnn").is_ok());
        assert!(validate_name("Jo\u{feff}Ann").is_ok());
        assert_eq!(validate_name("\u{feff}J\u{feff}"), Err(FieldError::NameTooShort));
    }
}
