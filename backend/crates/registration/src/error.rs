//! Registration Error Types
//!
//! Flow-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use kernel::error::{app_error::AppError, field::FieldError, kind::ErrorKind};
use thiserror::Error;

use crate::application::submit_guard::FormKind;
use crate::domain::value_object::{route::Route, toast::Toast};

/// Registration-specific result type alias
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Registration-specific error variants
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// One or more form fields failed validation
    #[error("Form validation failed ({} field errors)", .0.len())]
    Validation(Vec<FieldError>),

    /// Entered code differs from the stored one
    #[error("Verification code does not match")]
    CodeMismatch,

    /// Verification requested without a registration in this session
    #[error("No registration in progress")]
    SessionMissing,

    /// Resend requested while the cooldown is still running
    #[error("Resend is available in {remaining_secs} seconds")]
    ResendCooldown { remaining_secs: u32 },

    /// Same form submitted again while the previous submit is pending
    #[error("{0} form is already being submitted")]
    SubmitInProgress(FormKind),

    /// Notification stub reported a failure
    #[error("Notification failed: {0}")]
    Notification(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistrationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistrationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistrationError::CodeMismatch => StatusCode::BAD_REQUEST,
            RegistrationError::SessionMissing => StatusCode::SEE_OTHER,
            RegistrationError::ResendCooldown { .. } => StatusCode::TOO_MANY_REQUESTS,
            RegistrationError::SubmitInProgress(_) => StatusCode::CONFLICT,
            RegistrationError::Notification(_) => StatusCode::SERVICE_UNAVAILABLE,
            RegistrationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    ///
    /// `SessionMissing` is rendered as a redirect, its kind only matters
    /// when the error is converted to an `AppError` elsewhere.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::Validation(_) => ErrorKind::UnprocessableEntity,
            RegistrationError::CodeMismatch => ErrorKind::BadRequest,
            RegistrationError::SessionMissing => ErrorKind::NotFound,
            RegistrationError::ResendCooldown { .. } => ErrorKind::TooManyRequests,
            RegistrationError::SubmitInProgress(_) => ErrorKind::Conflict,
            RegistrationError::Notification(_) => ErrorKind::ServiceUnavailable,
            RegistrationError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Toast the client should show alongside the error, if any
    pub fn toast(&self) -> Option<Toast> {
        match self {
            RegistrationError::CodeMismatch => Some(Toast::destructive(
                "Invalid code",
                "Please check the code and try again",
            )),
            RegistrationError::ResendCooldown { remaining_secs } => Some(Toast::destructive(
                "Please wait",
                format!("You can request a new code in {remaining_secs} seconds"),
            )),
            RegistrationError::Notification(_) => Some(Toast::destructive(
                "Email not sent",
                "We could not send the email, please try again",
            )),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            RegistrationError::Validation(errors) => err
                .with_field_errors(errors.clone())
                .with_action("Correct the highlighted fields and submit again"),
            RegistrationError::CodeMismatch => err.with_action("Check the code or request a new one"),
            RegistrationError::SessionMissing => err.with_action("Start the registration again"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RegistrationError::Internal(msg) => {
                tracing::error!(message = %msg, "Registration internal error");
            }
            RegistrationError::Notification(msg) => {
                tracing::error!(message = %msg, "Notification delivery failed");
            }
            RegistrationError::CodeMismatch => {
                tracing::warn!("Verification code mismatch");
            }
            _ => {
                tracing::debug!(error = %self, "Registration flow error");
            }
        }
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        self.log();

        if let RegistrationError::SessionMissing = self {
            return Redirect::to(Route::Register.path()).into_response();
        }

        let mut body = self.to_app_error().problem_details();
        if let Some(toast) = self.toast() {
            body["toast"] = serde_json::json!(toast);
        }
        if let RegistrationError::ResendCooldown { remaining_secs } = self {
            body["cooldownSeconds"] = serde_json::json!(remaining_secs);
        }

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<RegistrationError> for AppError {
    fn from(err: RegistrationError) -> Self {
        err.to_app_error()
    }
}

impl From<AppError> for RegistrationError {
    fn from(err: AppError) -> Self {
        RegistrationError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RegistrationError::Validation(vec![]).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(RegistrationError::CodeMismatch.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RegistrationError::SessionMissing.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(
            RegistrationError::ResendCooldown { remaining_secs: 12 }.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            RegistrationError::SubmitInProgress(FormKind::Register).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_mismatch_carries_destructive_toast() {
        let toast = RegistrationError::CodeMismatch.toast().unwrap();
        assert!(toast.is_destructive());
        assert_eq!(toast.title, "Invalid code");
    }

    #[test]
    fn test_validation_to_app_error_keeps_fields() {
        let err = RegistrationError::Validation(vec![FieldError::new("terms", "must accept")]);
        let app = err.to_app_error();
        assert_eq!(app.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(app.field_errors().len(), 1);
    }

    #[test]
    fn test_notification_failure_is_unavailable_with_toast() {
        let err = RegistrationError::Notification("code not delivered".into());
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert!(err.toast().unwrap().is_destructive());
    }

    #[test]
    fn test_session_missing_redirects_to_register() {
        let response = RegistrationError::SessionMissing.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/register");
    }
}
