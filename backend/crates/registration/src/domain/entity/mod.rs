//! Entity Module

pub mod login_credentials;
pub mod registration_draft;
pub mod verification_session;
