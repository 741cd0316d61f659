//! Session Middleware
//!
//! Attaches a [`SessionId`] to every request. The id travels in an
//! HMAC-signed cookie; a missing or tampered cookie starts a new session.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::SessionId;
use platform::cookie::{extract_cookie, set_cookie_header};
use platform::crypto::{sign_token, verify_token};
use std::sync::Arc;

use crate::application::config::RegistrationConfig;

/// Session id carried by a signed cookie value
pub fn session_from_cookie(config: &RegistrationConfig, value: &str) -> Option<SessionId> {
    verify_token(&config.session_secret, value)?.parse().ok()
}

/// Cookie value for a session id
pub fn session_cookie_value(config: &RegistrationConfig, session: &SessionId) -> String {
    sign_token(&config.session_secret, &session.to_string())
}

pub async fn session_cookie(
    State(config): State<Arc<RegistrationConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let existing = extract_cookie(req.headers(), &config.session_cookie_name)
        .and_then(|value| session_from_cookie(&config, &value));

    let (session, is_new) = match existing {
        Some(session) => (session, false),
        None => (SessionId::new(), true),
    };

    req.extensions_mut().insert(session);

    let mut response = next.run(req).await;

    if is_new {
        tracing::debug!(session_id = %session, "Session started");
        let value = session_cookie_value(&config, &session);
        if let Some(cookie) = set_cookie_header(&config.session_cookie(), &value) {
            response.headers_mut().append(header::SET_COOKIE, cookie);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_round_trip() {
        let config = RegistrationConfig::development();
        let session = SessionId::new();
        let value = session_cookie_value(&config, &session);
        assert_eq!(session_from_cookie(&config, &value), Some(session));
    }

    #[test]
    fn test_tampered_or_foreign_cookie_rejected() {
        let config = RegistrationConfig::development();
        let other = RegistrationConfig::development();
        let value = session_cookie_value(&config, &SessionId::new());

        assert_eq!(session_from_cookie(&other, &value), None);
        let forged = format!("{}.{}", SessionId::new(), value.rsplit('.').next().unwrap());
        assert_eq!(session_from_cookie(&config, &forged), None);
        assert_eq!(session_from_cookie(&config, "garbage"), None);
    }
}
