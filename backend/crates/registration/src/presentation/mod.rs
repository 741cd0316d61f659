//! Presentation Layer
//!
//! HTTP handlers, DTOs, page views, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;

pub use handlers::RegistrationAppState;
pub use middleware::session_cookie;
pub use router::{registration_router, registration_router_generic};
