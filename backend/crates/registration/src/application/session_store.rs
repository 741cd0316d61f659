//! Typed accessors over the session bridge
//!
//! Each use case works through this store instead of raw keys, and only
//! touches the entries it owns.

use std::sync::Arc;

use kernel::id::SessionId;

use crate::domain::entity::verification_session::VerificationSession;
use crate::domain::repository::{SessionBridge, SessionKey};
use crate::domain::value_object::{
    email::Email, user_name::UserName, verification_code::VerificationCode,
};
use crate::error::RegistrationResult;

pub struct RegistrationSessionStore<B>
where
    B: SessionBridge,
{
    bridge: Arc<B>,
}

impl<B> RegistrationSessionStore<B>
where
    B: SessionBridge,
{
    pub fn new(bridge: Arc<B>) -> Self {
        Self { bridge }
    }

    /// Record a freshly registered identity and its code
    ///
    /// Whatever an abandoned registration left behind is dropped first.
    pub async fn begin(
        &self,
        session: &SessionId,
        email: &Email,
        user_name: &UserName,
        code: &VerificationCode,
    ) -> RegistrationResult<()> {
        self.bridge.clear(session).await?;
        self.bridge
            .set(session, SessionKey::RegistrationEmail, email.as_str().to_string())
            .await?;
        self.bridge
            .set(session, SessionKey::RegistrationUsername, user_name.as_str().to_string())
            .await?;
        self.bridge
            .set(session, SessionKey::VerificationCode, code.as_str().to_string())
            .await
    }

    /// Registration in progress; `None` unless a non-empty email is stored
    pub async fn load(&self, session: &SessionId) -> RegistrationResult<Option<VerificationSession>> {
        let email = match self.bridge.get(session, SessionKey::RegistrationEmail).await? {
            Some(email) if !email.is_empty() => Email::from_stored(email),
            _ => return Ok(None),
        };

        let user_name = self
            .bridge
            .get(session, SessionKey::RegistrationUsername)
            .await?
            .map(UserName::from_stored);
        let code = self
            .bridge
            .get(session, SessionKey::VerificationCode)
            .await?
            .map(VerificationCode::from_stored);

        Ok(Some(VerificationSession {
            email,
            user_name,
            code,
        }))
    }

    /// Overwrite the stored code
    pub async fn replace_code(
        &self,
        session: &SessionId,
        code: &VerificationCode,
    ) -> RegistrationResult<()> {
        self.bridge
            .set(session, SessionKey::VerificationCode, code.as_str().to_string())
            .await
    }

    /// Verification succeeded: drop the code and the user name
    pub async fn complete(&self, session: &SessionId) -> RegistrationResult<()> {
        self.bridge.remove(session, SessionKey::VerificationCode).await?;
        self.bridge
            .remove(session, SessionKey::RegistrationUsername)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemorySessionStore;

    #[tokio::test]
    async fn test_begin_replaces_abandoned_registration() {
        let bridge = Arc::new(InMemorySessionStore::new());
        let store = RegistrationSessionStore::new(bridge.clone());
        let session = SessionId::new();

        store
            .begin(
                &session,
                &Email::from_stored("alice@example.com"),
                &UserName::from_stored("alice"),
                &VerificationCode::from_stored("111111"),
            )
            .await
            .unwrap();
        store.complete(&session).await.unwrap();

        store
            .begin(
                &session,
                &Email::from_stored("bob@example.com"),
                &UserName::from_stored("bob"),
                &VerificationCode::from_stored("222222"),
            )
            .await
            .unwrap();

        let loaded = store.load(&session).await.unwrap().unwrap();
        assert_eq!(loaded.email.as_str(), "bob@example.com");
        assert_eq!(loaded.user_name.as_ref().unwrap().as_str(), "bob");
        assert!(loaded.code_matches("222222"));
        assert_eq!(bridge.snapshot(&session).await.len(), 3);
    }

    #[tokio::test]
    async fn test_load_requires_email() {
        let bridge = Arc::new(InMemorySessionStore::new());
        let store = RegistrationSessionStore::new(bridge.clone());
        let session = SessionId::new();

        bridge
            .set(&session, SessionKey::VerificationCode, "482193".into())
            .await
            .unwrap();
        assert!(store.load(&session).await.unwrap().is_none());
    }
}
