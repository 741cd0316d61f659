//! Application Layer
//!
//! Use cases of the registration flow and the services they share.

pub mod config;
pub mod latency;
pub mod login;
pub mod outcome;
pub mod register;
pub mod session_store;
pub mod submit_guard;
pub mod verify_email;

// Re-exports
pub use config::RegistrationConfig;
pub use login::LoginUseCase;
pub use outcome::{FlowOutcome, ResendOutcome, VerifyEmailView};
pub use register::RegisterUseCase;
pub use session_store::RegistrationSessionStore;
pub use submit_guard::{FormKind, SubmitGuard, SubmitGuards};
pub use verify_email::VerifyEmailUseCase;
