//! Login Credentials Entity
//!
//! Submitted sign-in form. Never checked against any account.

use crate::domain::value_object::email::Email;

#[derive(Debug, Clone, Default)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Credentials that passed form validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLogin {
    pub email: Email,
    pub remember_me: bool,
}
