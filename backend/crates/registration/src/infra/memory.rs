//! In-memory Session Store
//!
//! Backs both the session bridge and the resend cooldowns. Entries live
//! until removed or the process exits; nothing expires on its own.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::SessionId;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::cooldown::ResendCooldown;
use crate::domain::repository::{CooldownRepository, SessionBridge, SessionKey};
use crate::error::RegistrationResult;

#[derive(Debug, Default)]
struct SessionEntry {
    values: HashMap<SessionKey, String>,
    cooldown_started_at: Option<Instant>,
}

impl SessionEntry {
    fn is_empty(&self) -> bool {
        self.values.is_empty() && self.cooldown_started_at.is_none()
    }
}

/// Process-local store shared by clones
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions holding any state
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Copy of every value stored for a session, keyed by wire name
    pub async fn snapshot(&self, session: &SessionId) -> HashMap<&'static str, String> {
        self.sessions
            .read()
            .await
            .get(session)
            .map(|entry| {
                entry
                    .values
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    async fn update<F>(&self, session: &SessionId, f: F)
    where
        F: FnOnce(&mut SessionEntry) + Send,
    {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.entry(*session).or_default();
        f(entry);
        if entry.is_empty() {
            sessions.remove(session);
        }
    }
}

// ============================================================================
// Session Bridge Implementation
// ============================================================================

impl SessionBridge for InMemorySessionStore {
    async fn get(&self, session: &SessionId, key: SessionKey) -> RegistrationResult<Option<String>> {
        Ok(self
            .sessions
            .read()
            .await
            .get(session)
            .and_then(|entry| entry.values.get(&key).cloned()))
    }

    async fn set(
        &self,
        session: &SessionId,
        key: SessionKey,
        value: String,
    ) -> RegistrationResult<()> {
        tracing::trace!(session_id = %session, key = key.as_str(), "Session value set");
        self.update(session, |entry| {
            entry.values.insert(key, value);
        })
        .await;
        Ok(())
    }

    async fn remove(&self, session: &SessionId, key: SessionKey) -> RegistrationResult<()> {
        tracing::trace!(session_id = %session, key = key.as_str(), "Session value removed");
        self.update(session, |entry| {
            entry.values.remove(&key);
        })
        .await;
        Ok(())
    }

    async fn clear(&self, session: &SessionId) -> RegistrationResult<()> {
        self.update(session, |entry| entry.values.clear()).await;
        Ok(())
    }
}

// ============================================================================
// Cooldown Repository Implementation
// ============================================================================

impl CooldownRepository for InMemorySessionStore {
    async fn started_at(&self, session: &SessionId) -> RegistrationResult<Option<Instant>> {
        Ok(self
            .sessions
            .read()
            .await
            .get(session)
            .and_then(|entry| entry.cooldown_started_at))
    }

    async fn try_start(
        &self,
        session: &SessionId,
        at: Instant,
        total_secs: u32,
    ) -> RegistrationResult<Option<u32>> {
        // One write guard for both the check and the start
        let mut sessions = self.sessions.write().await;
        let entry = sessions.entry(*session).or_default();

        if let Some(started) = entry.cooldown_started_at {
            let running = ResendCooldown::after(total_secs, at.saturating_duration_since(started));
            if running.is_active() {
                return Ok(Some(running.remaining_secs()));
            }
        }

        entry.cooldown_started_at = Some(at);
        Ok(None)
    }

    async fn reset(&self, session: &SessionId) -> RegistrationResult<()> {
        self.update(session, |entry| entry.cooldown_started_at = None)
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = InMemorySessionStore::new();
        let session = SessionId::new();

        store
            .set(&session, SessionKey::RegistrationEmail, "a@example.com".into())
            .await
            .unwrap();
        assert_eq!(
            store.get(&session, SessionKey::RegistrationEmail).await.unwrap(),
            Some("a@example.com".to_string())
        );
        assert_eq!(store.get(&session, SessionKey::VerificationCode).await.unwrap(), None);

        store.remove(&session, SessionKey::RegistrationEmail).await.unwrap();
        assert_eq!(store.get(&session, SessionKey::RegistrationEmail).await.unwrap(), None);
        // Empty sessions are dropped
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        let a = SessionId::new();
        let b = SessionId::new();

        store.set(&a, SessionKey::VerificationCode, "111111".into()).await.unwrap();
        store.set(&b, SessionKey::VerificationCode, "222222".into()).await.unwrap();
        store.clear(&a).await.unwrap();
        assert_eq!(store.session_count().await, 1);

        assert_eq!(store.get(&a, SessionKey::VerificationCode).await.unwrap(), None);
        assert_eq!(
            store.get(&b, SessionKey::VerificationCode).await.unwrap(),
            Some("222222".to_string())
        );
    }

    #[tokio::test]
    async fn test_snapshot_uses_wire_names() {
        let store = InMemorySessionStore::new();
        let session = SessionId::new();
        store
            .set(&session, SessionKey::RegistrationUsername, "alice".into())
            .await
            .unwrap();

        let snapshot = store.snapshot(&session).await;
        assert_eq!(snapshot.get("registrationUsername").map(String::as_str), Some("alice"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_start_and_reset() {
        let store = InMemorySessionStore::new();
        let session = SessionId::new();
        let now = Instant::now();

        assert_eq!(store.started_at(&session).await.unwrap(), None);
        assert_eq!(store.try_start(&session, now, 30).await.unwrap(), None);
        assert_eq!(store.started_at(&session).await.unwrap(), Some(now));
        store.reset(&session).await.unwrap();
        assert_eq!(store.started_at(&session).await.unwrap(), None);
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_start_refuses_while_running() {
        let store = InMemorySessionStore::new();
        let session = SessionId::new();
        let started = Instant::now();

        assert_eq!(store.try_start(&session, started, 30).await.unwrap(), None);
        assert_eq!(store.try_start(&session, started, 30).await.unwrap(), Some(30));

        let later = started + std::time::Duration::from_secs(12);
        assert_eq!(store.try_start(&session, later, 30).await.unwrap(), Some(18));
        // Refused attempts leave the original start in place
        assert_eq!(store.started_at(&session).await.unwrap(), Some(started));

        let expired = started + std::time::Duration::from_secs(30);
        assert_eq!(store.try_start(&session, expired, 30).await.unwrap(), None);
        assert_eq!(store.started_at(&session).await.unwrap(), Some(expired));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_try_start_has_one_winner() {
        let store = InMemorySessionStore::new();
        let session = SessionId::new();
        let now = Instant::now();

        let (a, b) = tokio::join!(
            store.try_start(&session, now, 30),
            store.try_start(&session, now, 30)
        );
        let started = [a.unwrap(), b.unwrap()]
            .iter()
            .filter(|outcome| outcome.is_none())
            .count();
        assert_eq!(started, 1);
    }

    #[tokio::test]
    async fn test_clear_keeps_cooldown() {
        let store = InMemorySessionStore::new();
        let session = SessionId::new();
        let now = Instant::now();

        store.set(&session, SessionKey::RegistrationEmail, "a@example.com".into()).await.unwrap();
        store.try_start(&session, now, 30).await.unwrap();
        store.clear(&session).await.unwrap();

        assert!(store.snapshot(&session).await.is_empty());
        assert_eq!(store.started_at(&session).await.unwrap(), Some(now));
    }
}
