//! User Name Value Object

use kernel::error::field::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

pub const USER_NAME_TOO_SHORT_MESSAGE: &str = "Username must be at least 3 characters";

/// User name chosen on the registration form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn parse(user_name: impl Into<String>) -> Result<Self, FieldError> {
        let user_name = user_name.into();

        if user_name.chars().count() < USER_NAME_MIN_LENGTH {
            return Err(FieldError::new("username", USER_NAME_TOO_SHORT_MESSAGE));
        }

        Ok(Self(user_name))
    }

    pub fn from_stored(user_name: impl Into<String>) -> Self {
        Self(user_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        assert!(UserName::parse("").is_err());
        assert!(UserName::parse("ab").is_err());
        assert!(UserName::parse("abc").is_ok());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Two Cyrillic letters are four bytes but still too short.
        assert!(UserName::parse("Ян").is_err());
        assert!(UserName::parse("Яна").is_ok());
    }

    #[test]
    fn test_error_targets_username_field() {
        let err = UserName::parse("x").unwrap_err();
        assert_eq!(err.field, "username");
        assert_eq!(err.message, USER_NAME_TOO_SHORT_MESSAGE);
    }
}
