//! Persistence backend seam for form saves

use super::error::StoreError;
use crate::state::FormValues;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

/// Default latency of the simulated persistence call
pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(300);

/// Where saved form values are sent before the store records them.
/// Implementations stand in for a remote API call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormBackend: Send + Sync {
    /// Persist the values of one form. `dispatched_at` is when the save
    /// was requested, which may be earlier than the first poll.
    async fn persist(
        &self,
        form_id: &str,
        values: &FormValues,
        dispatched_at: Instant,
    ) -> Result<(), StoreError>;
}

/// Backend that completes a fixed delay after dispatch and always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_DELAY)
    }
}

#[async_trait]
impl FormBackend for SimulatedBackend {
    async fn persist(
        &self,
        form_id: &str,
        values: &FormValues,
        dispatched_at: Instant,
    ) -> Result<(), StoreError> {
        tracing::debug!(
            form_id,
            fields = values.len(),
            delay_ms = self.delay.as_millis() as u64,
            "simulating persistence call"
        );
        tokio::time::sleep_until(dispatched_at + self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedBackend::default().delay, Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_persist_waits_for_delay() {
        let backend = SimulatedBackend::new(Duration::from_millis(300));
        let start = Instant::now();
        backend
            .persist("contact", &FormValues::new(), start)
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_counts_from_dispatch() {
        let backend = SimulatedBackend::new(Duration::from_millis(300));
        let dispatched = Instant::now();
        tokio::time::advance(Duration::from_millis(100)).await;

        backend
            .persist("contact", &FormValues::new(), dispatched)
            .await
            .unwrap();
        let elapsed = dispatched.elapsed();
        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(310));
    }
}
