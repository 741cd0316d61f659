//! Verification Session Entity
//!
//! The registration in progress for one browsing session, assembled from
//! the session bridge. Exists only while an email is stored.

use crate::domain::value_object::{
    email::Email, user_name::UserName, verification_code::VerificationCode,
};

#[derive(Debug, Clone)]
pub struct VerificationSession {
    pub email: Email,
    /// Cleared once the email is verified
    pub user_name: Option<UserName>,
    /// Cleared once the email is verified
    pub code: Option<VerificationCode>,
}

impl VerificationSession {
    /// Compare an entered code with the stored one; no stored code never matches
    pub fn code_matches(&self, input: &str) -> bool {
        self.code.as_ref().is_some_and(|code| code.matches(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(code: Option<&str>) -> VerificationSession {
        VerificationSession {
            email: Email::from_stored("user@example.com"),
            user_name: Some(UserName::from_stored("alice")),
            code: code.map(VerificationCode::from_stored),
        }
    }

    #[test]
    fn test_code_matches() {
        let session = session(Some("482193"));
        assert!(session.code_matches("482193"));
        assert!(!session.code_matches("482194"));
    }

    #[test]
    fn test_missing_code_never_matches() {
        assert!(!session(None).code_matches("482193"));
        assert!(!session(None).code_matches(""));
    }
}
