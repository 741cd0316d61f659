//! Registration Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::{RegistrationConfig, SubmitGuards};
use crate::domain::notifier::EmailNotifier;
use crate::domain::repository::{CooldownRepository, SessionBridge};
use crate::infra::{InMemorySessionStore, LogEmailNotifier};
use crate::presentation::handlers::{self, RegistrationAppState};
use crate::presentation::middleware::session_cookie;

/// Create the registration router with in-memory sessions and the logging notifier
pub fn registration_router(config: RegistrationConfig) -> Router {
    let notifier = LogEmailNotifier::new(config.notifier_delay);
    registration_router_generic(InMemorySessionStore::new(), notifier, config)
}

/// Create a registration router for any store and notifier implementation
pub fn registration_router_generic<S, N>(store: S, notifier: N, config: RegistrationConfig) -> Router
where
    S: SessionBridge + CooldownRepository + Clone + Send + Sync + 'static,
    N: EmailNotifier + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = RegistrationAppState {
        store: Arc::new(store),
        notifier: Arc::new(notifier),
        config: config.clone(),
        guards: SubmitGuards::new(),
    };

    Router::new()
        .route("/", get(handlers::landing))
        .route("/login", get(handlers::login_page).post(handlers::login::<S, N>))
        .route(
            "/register",
            get(handlers::register_page).post(handlers::register::<S, N>),
        )
        .route(
            "/verify-email",
            get(handlers::verify_email_page::<S, N>).post(handlers::verify_email::<S, N>),
        )
        .route("/verify-email/resend", post(handlers::resend_code::<S, N>))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(config, session_cookie))
}
