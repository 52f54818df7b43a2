use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::AuthError;

/// Accepted mailbox syntax: a dotted or quoted local part, then either a
/// bracketed IPv4 literal or a dotted domain ending in a 2+ letter label.
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|.(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

/// Passwords of this length or shorter are rejected.
pub const MAX_REJECTED_PASSWORD_LENGTH: usize = 6;

static EMAIL_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(EMAIL_PATTERN).ok());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, AuthError> {
        let valid = EMAIL_REGEX
            .as_ref()
            .is_some_and(|re| re.is_match(raw));

        if !valid {
            return Err(AuthError::InvalidEmail);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() <= MAX_REJECTED_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort);
    }
    Ok(())
}
