//! Login Use Case
//!
//! Validates the sign-in form and waits. No account is looked up, no
//! session is established and the client stays on the page.

use std::sync::Arc;

use kernel::id::SessionId;

use crate::application::config::RegistrationConfig;
use crate::application::latency;
use crate::application::outcome::FlowOutcome;
use crate::application::submit_guard::{FormKind, SubmitGuards};
use crate::domain::entity::login_credentials::LoginCredentials;
use crate::domain::validation::validate_login;
use crate::error::{RegistrationError, RegistrationResult};

pub struct LoginUseCase {
    guards: SubmitGuards,
    config: Arc<RegistrationConfig>,
}

impl LoginUseCase {
    pub fn new(guards: SubmitGuards, config: Arc<RegistrationConfig>) -> Self {
        Self { guards, config }
    }

    pub async fn execute(
        &self,
        session: SessionId,
        credentials: LoginCredentials,
    ) -> RegistrationResult<FlowOutcome> {
        let valid = validate_login(&credentials).map_err(RegistrationError::Validation)?;

        let _submitting = self.guards.acquire(session, FormKind::Login)?;

        tracing::info!(
            session_id = %session,
            email = %valid.email,
            remember_me = valid.remember_me,
            "Sign-in submitted"
        );

        latency::simulate(self.config.login_delay).await;

        Ok(FlowOutcome::stay())
    }
}
