//! Submit Guard
//!
//! At most one pending submit per form and session. The guard is released
//! when dropped, which also covers a request future dropped mid-wait
//! (client went away), so nothing runs after a cancelled await.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use derive_more::Display;
use kernel::id::SessionId;

use crate::error::{RegistrationError, RegistrationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FormKind {
    #[display("Registration")]
    Register,
    #[display("Email verification")]
    VerifyEmail,
    #[display("Sign-in")]
    Login,
}

type InFlight = HashSet<(SessionId, FormKind)>;

/// Registry of submits in flight
#[derive(Debug, Clone, Default)]
pub struct SubmitGuards {
    in_flight: Arc<Mutex<InFlight>>,
}

impl SubmitGuards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a submit as pending, failing if one already is
    pub fn acquire(&self, session: SessionId, form: FormKind) -> RegistrationResult<SubmitGuard> {
        if !lock(&self.in_flight).insert((session, form)) {
            return Err(RegistrationError::SubmitInProgress(form));
        }

        Ok(SubmitGuard {
            in_flight: Arc::clone(&self.in_flight),
            key: (session, form),
        })
    }

    pub fn is_submitting(&self, session: SessionId, form: FormKind) -> bool {
        lock(&self.in_flight).contains(&(session, form))
    }
}

/// Pending submit; dropping it re-enables the form
#[derive(Debug)]
pub struct SubmitGuard {
    in_flight: Arc<Mutex<InFlight>>,
    key: (SessionId, FormKind),
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        lock(&self.in_flight).remove(&self.key);
    }
}

// The set stays consistent even if a holder panicked, so poisoning is ignored.
fn lock(in_flight: &Mutex<InFlight>) -> MutexGuard<'_, InFlight> {
    in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_rejected_while_pending() {
        let guards = SubmitGuards::new();
        let session = SessionId::new();

        let guard = guards.acquire(session, FormKind::Register).unwrap();
        assert!(guards.is_submitting(session, FormKind::Register));
        assert!(matches!(
            guards.acquire(session, FormKind::Register),
            Err(RegistrationError::SubmitInProgress(FormKind::Register))
        ));

        drop(guard);
        assert!(!guards.is_submitting(session, FormKind::Register));
        assert!(guards.acquire(session, FormKind::Register).is_ok());
    }

    #[test]
    fn test_forms_and_sessions_are_independent() {
        let guards = SubmitGuards::new();
        let a = SessionId::new();
        let b = SessionId::new();

        let _register = guards.acquire(a, FormKind::Register).unwrap();
        assert!(guards.acquire(a, FormKind::Login).is_ok());
        assert!(guards.acquire(b, FormKind::Register).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submit_releases_guard() {
        let guards = SubmitGuards::new();
        let session = SessionId::new();

        let pending = {
            let guards = guards.clone();
            async move {
                let _guard = guards.acquire(session, FormKind::VerifyEmail)?;
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                RegistrationResult::Ok(())
            }
        };

        // Dropped by the timeout before the sleep completes.
        let result = tokio::time::timeout(std::time::Duration::from_millis(10), pending).await;
        assert!(result.is_err());
        assert!(!guards.is_submitting(session, FormKind::VerifyEmail));
    }
}
