//! Verify Email Use Case
//!
//! Second step of the registration: the user enters the code sent to the
//! address captured by [`RegisterUseCase`](super::RegisterUseCase), or asks
//! for a new one once the resend cooldown is over.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::SessionId;
use tokio::time::Instant;

use crate::application::config::RegistrationConfig;
use crate::application::latency;
use crate::application::outcome::{FlowOutcome, ResendOutcome, VerifyEmailView};
use crate::application::session_store::RegistrationSessionStore;
use crate::application::submit_guard::{FormKind, SubmitGuards};
use crate::domain::cooldown::ResendCooldown;
use crate::domain::entity::verification_session::VerificationSession;
use crate::domain::notifier::{EmailNotifier, RegistrationSummary};
use crate::domain::repository::{CooldownRepository, SessionBridge};
use crate::domain::validation::validate_verification_code;
use crate::domain::value_object::{route::Route, toast::Toast, verification_code::VerificationCode};
use crate::error::{RegistrationError, RegistrationResult};

pub struct VerifyEmailUseCase<S, N>
where
    S: SessionBridge + CooldownRepository,
    N: EmailNotifier,
{
    store: Arc<S>,
    notifier: Arc<N>,
    guards: SubmitGuards,
    config: Arc<RegistrationConfig>,
}

impl<S, N> VerifyEmailUseCase<S, N>
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

    fn sessions(&self) -> RegistrationSessionStore<S> {
        RegistrationSessionStore::new(self.store.clone())
    }

    async fn require_session(&self, session: &SessionId) -> RegistrationResult<VerificationSession> {
        self.sessions()
            .load(session)
            .await?
            .ok_or(RegistrationError::SessionMissing)
    }

    async fn cooldown(&self, session: &SessionId) -> RegistrationResult<ResendCooldown> {
        let total = self.config.resend_cooldown_secs();
        Ok(match self.store.started_at(session).await? {
            Some(started) => ResendCooldown::after(total, started.elapsed()),
            None => ResendCooldown::new(total),
        })
    }

    /// Data for the verification page
    pub async fn open(&self, session: SessionId) -> RegistrationResult<VerifyEmailView> {
        let verification = self.require_session(&session).await?;
        let cooldown = self.cooldown(&session).await?;

        Ok(VerifyEmailView {
            email: verification.email,
            resend_available: !cooldown.is_active(),
            cooldown_secs: cooldown.remaining_secs(),
        })
    }

    /// Check an entered code against the stored one
    pub async fn submit(&self, session: SessionId, code: String) -> RegistrationResult<FlowOutcome> {
        let verification = self.require_session(&session).await?;
        validate_verification_code(&code).map_err(RegistrationError::Validation)?;

        let _submitting = self.guards.acquire(session, FormKind::VerifyEmail)?;

        latency::simulate(self.config.verify_delay).await;

        // Compared against the code stored when the submit started
        if !verification.code_matches(&code) {
            tracing::warn!(session_id = %session, email = %verification.email, "Invalid verification code entered");
            return Err(RegistrationError::CodeMismatch);
        }

        let summary = RegistrationSummary {
            username: verification.user_name.map(|name| name.into_inner()),
            email: verification.email.as_str().to_string(),
            registered_at: Utc::now(),
        };
        // Undelivered summary: the session stays as is so the user can retry
        if !self
            .notifier
            .send_registration_summary(&summary, &self.config.admin_email)
            .await?
        {
            return Err(RegistrationError::Notification(format!(
                "registration summary for {} was not delivered",
                summary.email
            )));
        }

        self.sessions().complete(&session).await?;

        tracing::info!(
            session_id = %session,
            email = %verification.email,
            "Email verified"
        );

        Ok(FlowOutcome::navigate(
            Toast::info("Email verified", "Registration completed successfully!"),
            Route::Login,
        ))
    }

    /// Issue a new code unless the cooldown is still running
    pub async fn resend(&self, session: SessionId) -> RegistrationResult<ResendOutcome> {
        let verification = self.require_session(&session).await?;

        // Claim the cooldown before anything is sent
        let total = self.config.resend_cooldown_secs();
        if let Some(remaining_secs) = self.store.try_start(&session, Instant::now(), total).await? {
            return Err(RegistrationError::ResendCooldown { remaining_secs });
        }

        let code = VerificationCode::generate();
        let delivered = match self
            .notifier
            .send_verification_code(&verification.email, &code)
            .await
        {
            Ok(delivered) => delivered,
            Err(err) => {
                self.store.reset(&session).await?;
                return Err(err);
            }
        };

        // The previous code stays valid when the new one never arrived
        if !delivered {
            self.store.reset(&session).await?;
            return Err(RegistrationError::Notification(format!(
                "verification code for {} was not delivered",
                verification.email
            )));
        }

        self.sessions().replace_code(&session, &code).await?;

        let mut cooldown = ResendCooldown::new(total);
        cooldown.start();

        tracing::info!(
            session_id = %session,
            email = %verification.email,
            cooldown_secs = cooldown.remaining_secs(),
            "Verification code resent"
        );

        Ok(ResendOutcome {
            toast: Toast::info(
                "Code resent",
                format!("A new verification code was sent to {}", verification.email),
            ),
            cooldown_secs: cooldown.remaining_secs(),
        })
    }
}
