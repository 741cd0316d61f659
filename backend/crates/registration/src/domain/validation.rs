//! Form Validation
//!
//! One function per form. Each runs every rule and reports all failures
//! as `(field, message)` pairs, so the client can mark each field.

use kernel::error::field::FieldError;

use crate::domain::entity::{
    login_credentials::{LoginCredentials, ValidLogin},
    registration_draft::{RegistrationDraft, ValidRegistration},
};
use crate::domain::value_object::{
    email::Email,
    password::{PASSWORDS_DO_NOT_MATCH_MESSAGE, RawPassword},
    user_name::UserName,
    verification_code::CODE_LENGTH,
};

pub const TERMS_NOT_ACCEPTED_MESSAGE: &str = "You must accept the terms of use";
pub const CODE_LENGTH_MESSAGE: &str = "Verification code must be 6 digits";

/// Registration form rules
///
/// The password confirmation is compared even when other fields fail.
pub fn validate_registration(
    draft: &RegistrationDraft,
) -> Result<ValidRegistration, Vec<FieldError>> {
    let mut errors = Vec::new();

    let user_name = UserName::parse(draft.username.as_str()).map_err(|e| errors.push(e)).ok();
    let email = Email::parse(draft.email.as_str()).map_err(|e| errors.push(e)).ok();

    if let Err(e) = RawPassword::for_registration(draft.password.as_str()) {
        errors.push(e);
    }

    if draft.password != draft.confirm_password {
        errors.push(FieldError::new(
            "confirmPassword",
            PASSWORDS_DO_NOT_MATCH_MESSAGE,
        ));
    }

    if !draft.terms_accepted {
        errors.push(FieldError::new("terms", TERMS_NOT_ACCEPTED_MESSAGE));
    }

    match (user_name, email) {
        (Some(user_name), Some(email)) if errors.is_empty() => {
            Ok(ValidRegistration { user_name, email })
        }
        _ => Err(errors),
    }
}

/// Sign-in form rules
pub fn validate_login(credentials: &LoginCredentials) -> Result<ValidLogin, Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = Email::parse(credentials.email.as_str()).map_err(|e| errors.push(e)).ok();

    if let Err(e) = RawPassword::for_login(credentials.password.as_str()) {
        errors.push(e);
    }

    match email {
        Some(email) if errors.is_empty() => Ok(ValidLogin {
            email,
            remember_me: credentials.remember_me,
        }),
        _ => Err(errors),
    }
}

/// Verification form rule: exactly six characters
pub fn validate_verification_code(code: &str) -> Result<(), Vec<FieldError>> {
    if code.chars().count() == CODE_LENGTH {
        Ok(())
    } else {
        Err(vec![FieldError::new("code", CODE_LENGTH_MESSAGE)])
    }
}
