//! Raw Password Value Object
//!
//! Passwords are only checked for shape. They are never stored, hashed or
//! logged, and `Debug` output is redacted.

use kernel::error::field::FieldError;
use std::fmt;

/// Minimum password length on registration (in characters)
pub const PASSWORD_MIN_LENGTH: usize = 6;

pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters";
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Password is required";
pub const PASSWORDS_DO_NOT_MATCH_MESSAGE: &str = "Passwords do not match";

/// Plain-text password as submitted
#[derive(Clone, PartialEq, Eq)]
pub struct RawPassword(String);

impl RawPassword {
    /// Registration rule: at least [`PASSWORD_MIN_LENGTH`] characters
    pub fn for_registration(password: impl Into<String>) -> Result<Self, FieldError> {
        let password = password.into();
        if password.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(FieldError::new("password", PASSWORD_TOO_SHORT_MESSAGE));
        }
        Ok(Self(password))
    }

    /// Login rule: anything non-empty
    pub fn for_login(password: impl Into<String>) -> Result<Self, FieldError> {
        let password = password.into();
        if password.is_empty() {
            return Err(FieldError::new("password", PASSWORD_REQUIRED_MESSAGE));
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_min_length() {
        assert!(RawPassword::for_registration("12345").is_err());
        assert!(RawPassword::for_registration("123456").is_ok());
    }

    #[test]
    fn test_login_requires_non_empty() {
        assert_eq!(
            RawPassword::for_login("").unwrap_err().message,
            PASSWORD_REQUIRED_MESSAGE
        );
        assert!(RawPassword::for_login("x").is_ok());
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = RawPassword::for_login("hunter22").unwrap();
        assert!(!format!("{:?}", password).contains("hunter22"));
    }
}
