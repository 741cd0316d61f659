//! Register Use Case
//!
//! Validates the registration form, issues a verification code and hands
//! the identity over to the verification step.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::SessionId;

use crate::application::config::RegistrationConfig;
use crate::application::latency;
use crate::application::outcome::FlowOutcome;
use crate::application::session_store::RegistrationSessionStore;
use crate::application::submit_guard::{FormKind, SubmitGuards};
use crate::domain::entity::registration_draft::RegistrationDraft;
use crate::domain::notifier::EmailNotifier;
use crate::domain::repository::{CooldownRepository, SessionBridge};
use crate::domain::validation::validate_registration;
use crate::domain::value_object::{route::Route, toast::Toast, verification_code::VerificationCode};
use crate::error::{RegistrationError, RegistrationResult};

pub struct RegisterUseCase<S, N>
where
    S: SessionBridge + CooldownRepository,
    N: EmailNotifier,
{
    store: Arc<S>,
    notifier: Arc<N>,
    guards: SubmitGuards,
    config: Arc<RegistrationConfig>,
}

impl<S, N> RegisterUseCase<S, N>
where
    S: SessionBridge + CooldownRepository,
    N: EmailNotifier,
{
    pub fn new(
        store: Arc<S>,
        notifier: Arc<N>,
        guards: SubmitGuards,
        config: Arc<RegistrationConfig>,
    ) -> Self {
        Self {
            store,
            notifier,
            guards,
            config,
        }
    }

    pub async fn execute(
        &self,
        session: SessionId,
        draft: RegistrationDraft,
    ) -> RegistrationResult<FlowOutcome> {
        // Invalid forms never reach the network
        let valid = validate_registration(&draft).map_err(RegistrationError::Validation)?;
        drop(draft);

        let _submitting = self.guards.acquire(session, FormKind::Register)?;

        latency::simulate(self.config.register_delay).await;

        let code = VerificationCode::generate();

        // Nothing is stored for a code that never went out
        if !self
            .notifier
            .send_verification_code(&valid.email, &code)
            .await?
        {
            return Err(RegistrationError::Notification(format!(
                "verification code for {} was not delivered",
                valid.email
            )));
        }

        RegistrationSessionStore::new(self.store.clone())
            .begin(&session, &valid.email, &valid.user_name, &code)
            .await?;

        // A new registration starts with resend available
        self.store.reset(&session).await?;

        tracing::info!(
            session_id = %session,
            user_name = %valid.user_name,
            email = %valid.email,
            registered_at = %Utc::now().to_rfc3339(),
            "Registration submitted"
        );

        Ok(FlowOutcome::navigate(
            Toast::info(
                "Verification code sent",
                format!("A verification code was sent to {}.", valid.email),
            ),
            Route::VerifyEmail,
        ))
    }
}
