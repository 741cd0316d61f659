//! Shared test doubles

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::application::latency;

use crate::domain::notifier::{EmailNotifier, RegistrationSummary};
use crate::domain::value_object::{email::Email, verification_code::VerificationCode};
use crate::error::RegistrationResult;

/// Notifier that records every message instead of logging it
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    codes: Arc<Mutex<Vec<(String, String)>>>,
    summaries: Arc<Mutex<Vec<(RegistrationSummary, String)>>>,
    undelivered: bool,
    delay: Duration,
}

impl RecordingNotifier {
    /// Records messages but reports each one as not delivered
    pub fn undelivering() -> Self {
        Self {
            undelivered: true,
            ..Self::default()
        }
    }

    /// Takes `delay` on the tokio clock before each message is recorded
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Codes sent so far as `(email, code)`
    pub fn codes(&self) -> Vec<(String, String)> {
        self.codes.lock().unwrap().clone()
    }

    pub fn last_code(&self) -> Option<String> {
        self.codes().last().map(|(_, code)| code.clone())
    }

    pub fn summaries(&self) -> Vec<(RegistrationSummary, String)> {
        self.summaries.lock().unwrap().clone()
    }
}

impl EmailNotifier for RecordingNotifier {
    async fn send_verification_code(
        &self,
        email: &Email,
        code: &VerificationCode,
    ) -> RegistrationResult<bool> {
        latency::simulate(self.delay).await;
        self.codes
            .lock()
            .unwrap()
            .push((email.as_str().to_string(), code.as_str().to_string()));
        Ok(!self.undelivered)
    }

    async fn send_registration_summary(
        &self,
        summary: &RegistrationSummary,
        admin_email: &str,
    ) -> RegistrationResult<bool> {
        latency::simulate(self.delay).await;
        self.summaries
            .lock()
            .unwrap()
            .push((summary.clone(), admin_email.to_string()));
        Ok(!self.undelivered)
    }
}
