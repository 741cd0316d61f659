//! Infrastructure Layer
//!
//! In-memory session storage and the logging notifier.

pub mod log_notifier;
pub mod memory;

pub use log_notifier::LogEmailNotifier;
pub use memory::InMemorySessionStore;
