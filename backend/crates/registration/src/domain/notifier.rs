//! Email Notifier Port
//!
//! Outbound notifications of the flow. The shipped implementation only
//! logs (see `infra::log_notifier`).

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, verification_code::VerificationCode};
use crate::error::RegistrationResult;

/// Default recipient of registration summaries
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@zinkbank.ru";

/// Registration summary sent to the administrator after verification
#[derive(Debug, Clone)]
pub struct RegistrationSummary {
    /// `None` when the user name is no longer in the session
    pub username: Option<String>,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

impl RegistrationSummary {
    pub fn subject(&self) -> String {
        format!("New registration: {}", self.username_or_unknown())
    }

    pub fn body(&self) -> String {
        format!(
            "New user details:\n\nUsername: {}\nEmail: {}\nRegistered at: {}\n",
            self.username_or_unknown(),
            self.email,
            self.registered_at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }

    fn username_or_unknown(&self) -> &str {
        self.username.as_deref().unwrap_or("(unknown)")
    }
}

/// Notification delivery
#[trait_variant::make(EmailNotifier: Send)]
pub trait LocalEmailNotifier {
    /// Deliver a verification code to the registering address
    async fn send_verification_code(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> RegistrationResult<bool>;

    /// Deliver a registration summary to the administrator
    async fn send_registration_summary(
        &self,
        summary: &RegistrationSummary,
        admin_email: &str,
    ) -> RegistrationResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn summary(username: Option<&str>) -> RegistrationSummary {
        RegistrationSummary {
            username: username.map(str::to_string),
            email: "alice@example.com".to_string(),
            registered_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_subject_and_body() {
        let summary = summary(Some("alice"));
        assert_eq!(summary.subject(), "New registration: alice");
        let body = summary.body();
        assert!(body.contains("Username: alice"));
        assert!(body.contains("Email: alice@example.com"));
        assert!(body.contains("2024-05-01 12:30:00 UTC"));
    }

    #[test]
    fn test_missing_username() {
        assert_eq!(summary(None).subject(), "New registration: (unknown)");
    }
}
