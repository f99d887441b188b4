//! Request pacing for the Jira client.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Spaces requests at least `cooldown` apart. A zero cooldown disables pacing.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    cooldown: Duration,
    next_slot: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            next_slot: Arc::new(Mutex::new(None)),
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Waits for the next free slot and reserves the one after it.
    pub async fn hit(&self) {
        if self.cooldown.is_zero() {
            return;
        }
        let mut slot = self.next_slot.lock().await;
        if let Some(ready_at) = *slot {
            if ready_at > Instant::now() {
                sleep_until(ready_at).await;
            }
        }
        *slot = Some(Instant::now() + self.cooldown);
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

#[cfg(test)]
mod tests {
    use super::RateLimiter;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn second_hit_is_delayed_by_cooldown() {
        let limiter = RateLimiter::new(Duration::from_millis(40));

        limiter.hit().await;
        let start = Instant::now();
        limiter.hit().await;

        assert!(start.elapsed() >= Duration::from_millis(35));
    }

    #[tokio::test]
    async fn disabled_limiter_never_waits() {
        let limiter = RateLimiter::disabled();
        assert!(limiter.cooldown().is_zero());

        let start = Instant::now();
        for _ in 0..5 {
            limiter.hit().await;
        }
        assert!(start.elapsed() < Duration::from_millis(20));
    }
}
