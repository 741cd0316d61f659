//! Logging Email Notifier
//!
//! Stands in for a mail relay: waits a fixed delay, writes the message to
//! the log and reports success. Nothing leaves the process.

use std::time::Duration;

use crate::application::latency;
use crate::domain::notifier::{EmailNotifier, RegistrationSummary};
use crate::domain::value_object::{email::Email, verification_code::VerificationCode};
use crate::error::RegistrationResult;

#[derive(Debug, Clone)]
pub struct LogEmailNotifier {
    delay: Duration,
}

impl LogEmailNotifier {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for LogEmailNotifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl EmailNotifier for LogEmailNotifier {
    async fn send_verification_code(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> RegistrationResult<bool> {
        // The log is the only place a demo user can read the code from.
        tracing::info!(to = %email, code = %code, "Sending verification code");

        latency::simulate(self.delay).await;

        tracing::info!(to = %email, "Verification code sent");
        Ok(true)
    }

    async fn send_registration_summary(
        &self,
        summary: &RegistrationSummary,
        admin_email: &str,
    ) -> RegistrationResult<bool> {
        tracing::info!(
            to = admin_email,
            username = summary.username.as_deref().unwrap_or_default(),
            email = %summary.email,
            registered_at = %summary.registered_at.to_rfc3339(),
            "Sending registration summary"
        );
        tracing::debug!(subject = %summary.subject(), body = %summary.body(), "Summary message");

        latency::simulate(self.delay).await;

        tracing::info!(to = admin_email, "Registration summary sent");
        Ok(true)
    }
}
