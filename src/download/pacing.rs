//! Request pacing.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

/// Fixed pause inserted after network calls, plus an optional random extra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pacer {
    interval: Duration,
    jitter: Duration,
}

impl Pacer {
    pub fn new(interval: Duration, jitter: Duration) -> Self {
        Self { interval, jitter }
    }

    /// A pacer that never waits.
    pub fn none() -> Self {
        Self::default()
    }

    /// Wait for the next pause.
    pub async fn pause(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }

    fn next_delay(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.interval;
        }
        let extra = rand::thread_rng().gen_range(0..=jitter_ms);
        self.interval + Duration::from_millis(extra)
    }
}
