//! Simulated network latency
//!
//! Submits wait a fixed delay before acting. The wait runs on the tokio
//! clock, so tests with a paused runtime skip it instantly.

use std::time::Duration;

pub async fn simulate(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    tracing::trace!(delay_ms = delay.as_millis() as u64, "Simulating request latency");
    tokio::time::sleep(delay).await;
}
