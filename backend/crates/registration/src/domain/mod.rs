//! Domain Layer
//!
//! Entities, value objects, form validation, the resend cooldown and the
//! ports (session bridge, email notifier) implemented in infrastructure.

pub mod cooldown;
pub mod entity;
pub mod notifier;
pub mod repository;
pub mod validation;
pub mod value_object;

// Re-exports
pub use cooldown::ResendCooldown;
pub use entity::{
    login_credentials::LoginCredentials, registration_draft::RegistrationDraft,
    verification_session::VerificationSession,
};
pub use notifier::{EmailNotifier, RegistrationSummary};
pub use repository::{CooldownRepository, SessionBridge, SessionKey};
