//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::{FlowOutcome, ResendOutcome};
use crate::domain::entity::{login_credentials::LoginCredentials, registration_draft::RegistrationDraft};
use crate::domain::value_object::{route::Route, toast::Toast};

// ============================================================================
// Register
// ============================================================================

/// Registration form
///
/// Missing fields deserialize as empty so they surface as field errors
/// instead of a rejected body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl From<RegisterRequest> for RegistrationDraft {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            confirm_password: req.confirm_password,
            terms_accepted: req.terms,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Sign-in form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl From<LoginRequest> for LoginCredentials {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            remember_me: req.remember_me,
        }
    }
}

// ============================================================================
// Verify Email
// ============================================================================

/// Verification form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyEmailRequest {
    pub code: String,
}

/// Resend response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendResponse {
    pub toast: Toast,
    pub cooldown_seconds: u32,
}

impl From<ResendOutcome> for ResendResponse {
    fn from(outcome: ResendOutcome) -> Self {
        Self {
            toast: outcome.toast,
            cooldown_seconds: outcome.cooldown_secs,
        }
    }
}

// ============================================================================
// Flow
// ============================================================================

/// Response of every form submit: what to show and where to go next
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowResponse {
    pub toast: Option<Toast>,
    pub redirect: Option<Route>,
}

impl From<FlowOutcome> for FlowResponse {
    fn from(outcome: FlowOutcome) -> Self {
        Self {
            toast: outcome.toast,
            redirect: outcome.redirect,
        }
    }
}
