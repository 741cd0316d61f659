//! Repository Traits
//!
//! Ports for per-session state. Implementations live in `infra/`.

use kernel::id::SessionId;
use tokio::time::Instant;

use crate::error::RegistrationResult;

/// Keys of the session bridge (string-keyed, string-valued)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    RegistrationEmail,
    RegistrationUsername,
    VerificationCode,
}

impl SessionKey {
    /// Wire name of the key
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SessionKey::RegistrationEmail => "registrationEmail",
            SessionKey::RegistrationUsername => "registrationUsername",
            SessionKey::VerificationCode => "verificationCode",
        }
    }
}

/// Ephemeral key/value store scoped to one browsing session
#[trait_variant::make(SessionBridge: Send)]
pub trait LocalSessionBridge {
    /// Read a value
    async fn get(&self, session: &SessionId, key: SessionKey) -> RegistrationResult<Option<String>>;

    /// Write (or overwrite) a value
    async fn set(&self, session: &SessionId, key: SessionKey, value: String)
    -> RegistrationResult<()>;

    /// Remove a value
    async fn remove(&self, session: &SessionId, key: SessionKey) -> RegistrationResult<()>;

    /// Drop every value stored for a session
    async fn clear(&self, session: &SessionId) -> RegistrationResult<()>;
}

/// Start instants of running resend cooldowns
#[trait_variant::make(CooldownRepository: Send)]
pub trait LocalCooldownRepository {
    /// When the cooldown for this session was last started
    async fn started_at(&self, session: &SessionId) -> RegistrationResult<Option<Instant>>;

    /// Start a cooldown of `total_secs` at `at` unless one is still running
    ///
    /// Check and start happen as one step, so concurrent callers cannot both
    /// start. Returns the remaining seconds of the running cooldown, or
    /// `None` when this call started a new one.
    async fn try_start(
        &self,
        session: &SessionId,
        at: Instant,
        total_secs: u32,
    ) -> RegistrationResult<Option<u32>>;

    /// Forget the cooldown
    async fn reset(&self, session: &SessionId) -> RegistrationResult<()>;
}
