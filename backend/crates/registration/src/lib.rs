//! Registration Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Form rules, value objects, session and notifier ports
//! - `application/` - Use cases and the services they share
//! - `infra/` - In-memory session store, logging notifier
//! - `presentation/` - HTTP handlers, DTOs, page views, router
//!
//! ## Flow
//! - `/register` validates the form and issues a 6-digit verification code
//! - `/verify-email` checks the code, with a throttled resend
//! - `/login` validates the form only; no account is ever stored
//!
//! ## Session Model
//! - Flow state lives server-side, keyed by a session id
//! - The id travels in an HMAC-signed, HttpOnly cookie
//! - Nothing expires; state is lost when the process exits

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::RegistrationConfig;
pub use error::{RegistrationError, RegistrationResult};
pub use infra::{InMemorySessionStore, LogEmailNotifier};
pub use presentation::router::{registration_router, registration_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod test_support;
