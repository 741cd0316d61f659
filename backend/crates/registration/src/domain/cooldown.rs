//! Resend Cooldown
//!
//! Countdown that locks the "resend code" action. It starts at the
//! configured number of seconds and loses one per elapsed second; resend
//! is available again once it reaches zero.

use std::time::Duration;

/// Default cooldown after a resend (seconds)
pub const DEFAULT_RESEND_COOLDOWN_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCooldown {
    total_secs: u32,
    remaining_secs: u32,
}

impl ResendCooldown {
    /// Idle cooldown (resend available)
    pub const fn new(total_secs: u32) -> Self {
        Self {
            total_secs,
            remaining_secs: 0,
        }
    }

    /// Cooldown state after `elapsed` time since it was started
    pub fn after(total_secs: u32, elapsed: Duration) -> Self {
        let ticks = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);
        Self {
            total_secs,
            remaining_secs: total_secs.saturating_sub(ticks),
        }
    }

    /// Restart the countdown from the full duration
    pub fn start(&mut self) {
        self.remaining_secs = self.total_secs;
    }

    /// One second elapsed
    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    pub const fn is_active(&self) -> bool {
        self.remaining_secs > 0
    }

    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub const fn total_secs(&self) -> u32 {
        self.total_secs
    }
}

impl Default for ResendCooldown {
    fn default() -> Self {
        Self::new(DEFAULT_RESEND_COOLDOWN_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_started() {
        let cooldown = ResendCooldown::default();
        assert!(!cooldown.is_active());
        assert_eq!(cooldown.remaining_secs(), 0);
    }

    #[test]
    fn test_thirty_ticks_reenable_resend() {
        let mut cooldown = ResendCooldown::default();
        cooldown.start();

        for tick in 1..30 {
            cooldown.tick();
            assert!(cooldown.is_active(), "inactive after {tick} ticks");
            assert_eq!(cooldown.remaining_secs(), 30 - tick);
        }

        cooldown.tick();
        assert!(!cooldown.is_active());

        // Saturates at zero
        cooldown.tick();
        assert_eq!(cooldown.remaining_secs(), 0);
    }

    #[test]
    fn test_after_elapsed_time() {
        assert_eq!(ResendCooldown::after(30, Duration::ZERO).remaining_secs(), 30);
        assert_eq!(
            ResendCooldown::after(30, Duration::from_millis(999)).remaining_secs(),
            30
        );
        assert_eq!(ResendCooldown::after(30, Duration::from_secs(1)).remaining_secs(), 29);
        assert!(ResendCooldown::after(30, Duration::from_millis(29_999)).is_active());
        assert!(!ResendCooldown::after(30, Duration::from_secs(30)).is_active());
        assert!(!ResendCooldown::after(30, Duration::from_secs(u64::MAX)).is_active());
    }

    #[test]
    fn test_restart() {
        let mut cooldown = ResendCooldown::after(30, Duration::from_secs(20));
        cooldown.start();
        assert_eq!(cooldown.remaining_secs(), 30);
    }
}
