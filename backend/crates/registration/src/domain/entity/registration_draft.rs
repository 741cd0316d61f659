//! Registration Draft Entity
//!
//! The registration form as submitted. Lives for one request: only the
//! user name and email survive into the session bridge.

use crate::domain::value_object::{email::Email, user_name::UserName};

#[derive(Debug, Clone, Default)]
pub struct RegistrationDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

/// What remains of a draft once it passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub user_name: UserName,
    pub email: Email,
}
