//! Field Validation
//!
//! Pure validators for the sign-up form and the password strength scorer.

pub mod email;
pub mod name;
pub mod password;

use thiserror::Error;

/// Why a field value was rejected.
///
/// The `Display` text is exactly what the form shows under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Name must be at least 2 characters long.")]
    NameTooShort,

    #[error("Name can only contain letters and spaces.")]
    NameInvalidChars,

    #[error("Email is required.")]
    EmailRequired,

    #[error("Invalid email format.")]
    EmailInvalid,

    #[error("Password is required.")]
    PasswordRequired,

    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,

    #[error("Password must contain at least one uppercase letter.")]
    PasswordNoUppercase,

    #[error("Password must contain at least one number.")]
    PasswordNoDigit,

    #[error("Password must contain at least one special character.")]
    PasswordNoSpecial,
}

/// Outcome of validating one field's current value.
pub type Verdict = Result<(), FieldError>;

/// The three inputs of the form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
        }
    }

    pub fn next(&self) -> Field {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Name,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Self::Name => Self::Password,
            Self::Email => Self::Name,
            Self::Password => Self::Email,
        }
    }

    /// Run this field's validator against a raw value
    pub fn validate(&self, value: &str) -> Verdict {
        match self {
            Self::Name => name::validate_name(value),
            Self::Email => email::validate_email(value),
            Self::Password => password::validate_password(value),
        }
    }
}

/// Whitespace as understood by the `\s` class of browser regular expressions.
///
/// Unlike `char::is_whitespace` this excludes U+0085 and includes U+FEFF.
pub(crate) fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r' | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

// Re-exports
pub use password::PasswordCriteria;
