//! HTTP Handlers

use axum::extract::{Extension, OriginalUri, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::error::app_error::AppError;
use kernel::id::SessionId;
use std::sync::Arc;

use crate::application::config::RegistrationConfig;
use crate::application::{LoginUseCase, RegisterUseCase, SubmitGuards, VerifyEmailUseCase};
use crate::domain::notifier::EmailNotifier;
use crate::domain::repository::{CooldownRepository, SessionBridge};
use crate::error::RegistrationResult;
use crate::presentation::dto::{
    FlowResponse, LoginRequest, RegisterRequest, ResendResponse, VerifyEmailRequest,
};
use crate::presentation::pages::{self, FormPage, LandingPage, VerifyEmailPage};

/// Shared state for registration handlers
#[derive(Clone)]
pub struct RegistrationAppState<S, N>
where
    S: SessionBridge + CooldownRepository + Clone + Send + Sync + 'static,
    N: EmailNotifier + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub notifier: Arc<N>,
    pub config: Arc<RegistrationConfig>,
    pub guards: SubmitGuards,
}

impl<S, N> RegistrationAppState<S, N>
where
    S: SessionBridge + CooldownRepository + Clone + Send + Sync + 'static,
    N: EmailNotifier + Clone + Send + Sync + 'static,
{
    fn register_use_case(&self) -> RegisterUseCase<S, N> {
        RegisterUseCase::new(
            self.store.clone(),
            self.notifier.clone(),
            self.guards.clone(),
            self.config.clone(),
        )
    }

    fn verify_email_use_case(&self) -> VerifyEmailUseCase<S, N> {
        VerifyEmailUseCase::new(
            self.store.clone(),
            self.notifier.clone(),
            self.guards.clone(),
            self.config.clone(),
        )
    }
}

// ============================================================================
// Landing
// ============================================================================

/// GET /
pub async fn landing() -> Json<LandingPage> {
    Json(pages::landing())
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page() -> Json<FormPage> {
    Json(pages::login())
}

/// POST /login
pub async fn login<S, N>(
    State(state): State<RegistrationAppState<S, N>>,
    Extension(session): Extension<SessionId>,
    Json(req): Json<LoginRequest>,
) -> RegistrationResult<Json<FlowResponse>>
where
    S: SessionBridge + CooldownRepository + Clone + Send + Sync + 'static,
    N: EmailNotifier + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.guards.clone(), state.config.clone());
    let outcome = use_case.execute(session, req.into()).await?;
    Ok(Json(outcome.into()))
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page() -> Json<FormPage> {
    Json(pages::register())
}

/// POST /register
pub async fn register<S, N>(
    State(state): State<RegistrationAppState<S, N>>,
    Extension(session): Extension<SessionId>,
    Json(req): Json<RegisterRequest>,
) -> RegistrationResult<Json<FlowResponse>>
where
    S: SessionBridge + CooldownRepository + Clone + Send + Sync + 'static,
    N: EmailNotifier + Clone + Send + Sync + 'static,
{
    let outcome = state.register_use_case().execute(session, req.into()).await?;
    Ok(Json(outcome.into()))
}

// ============================================================================
// Verify Email
// ============================================================================

/// GET /verify-email
pub async fn verify_email_page<S, N>(
    State(state): State<RegistrationAppState<S, N>>,
    Extension(session): Extension<SessionId>,
) -> RegistrationResult<Json<VerifyEmailPage>>
where
    S: SessionBridge + CooldownRepository + Clone + Send + Sync + 'static,
    N: EmailNotifier + Clone + Send + Sync + 'static,
{
    let view = state.verify_email_use_case().open(session).await?;
    Ok(Json(pages::verify_email(view)))
}

/// POST /verify-email
pub async fn verify_email<S, N>(
    State(state): State<RegistrationAppState<S, N>>,
    Extension(session): Extension<SessionId>,
    Json(req): Json<VerifyEmailRequest>,
) -> RegistrationResult<Json<FlowResponse>>
where
    S: SessionBridge + CooldownRepository + Clone + Send + Sync + 'static,
    N: EmailNotifier + Clone + Send + Sync + 'static,
{
    let outcome = state
        .verify_email_use_case()
        .submit(session, req.code)
        .await?;
    Ok(Json(outcome.into()))
}

/// POST /verify-email/resend
pub async fn resend_code<S, N>(
    State(state): State<RegistrationAppState<S, N>>,
    Extension(session): Extension<SessionId>,
) -> RegistrationResult<Json<ResendResponse>>
where
    S: SessionBridge + CooldownRepository + Clone + Send + Sync + 'static,
    N: EmailNotifier + Clone + Send + Sync + 'static,
{
    let outcome = state.verify_email_use_case().resend(session).await?;
    Ok(Json(outcome.into()))
}

// ============================================================================
// Fallback
// ============================================================================

/// Anything else, including the inert legal and reset-password links
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    tracing::debug!(path = %uri.path(), "No page for path");
    AppError::not_found(format!("No page at {}", uri.path()))
        .with_action("Go back to the home page")
        .into_response()
}
