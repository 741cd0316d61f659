//! Application Configuration
//!
//! Configuration for the registration flow.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::cooldown::DEFAULT_RESEND_COOLDOWN_SECS;
use crate::domain::notifier::DEFAULT_ADMIN_EMAIL;

/// Registration flow configuration
#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Secret key for HMAC-signing the session cookie (32 bytes)
    pub session_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Simulated latency of the registration submit
    pub register_delay: Duration,
    /// Simulated latency of the code check
    pub verify_delay: Duration,
    /// Simulated latency of the sign-in submit
    pub login_delay: Duration,
    /// Simulated latency of each notifier call
    pub notifier_delay: Duration,
    /// Lockout after a resend
    pub resend_cooldown: Duration,
    /// Recipient of registration summaries
    pub admin_email: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "zink_session".to_string(),
            session_secret: [0u8; 32],
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            register_delay: Duration::from_millis(1500),
            verify_delay: Duration::from_millis(1000),
            login_delay: Duration::from_millis(1500),
            notifier_delay: Duration::from_millis(500),
            resend_cooldown: Duration::from_secs(u64::from(DEFAULT_RESEND_COOLDOWN_SECS)),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
        }
    }
}

impl RegistrationConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Cooldown length in whole seconds
    pub fn resend_cooldown_secs(&self) -> u32 {
        u32::try_from(self.resend_cooldown.as_secs()).unwrap_or(u32::MAX)
    }

    /// Cookie settings for the session cookie (browser-session lifetime)
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            max_age_secs: None,
            ..CookieConfig::default()
        }
    }
}
