//! Request pacing for the external provider.
//!
//! The Naver endpoints are rate limited, so the pipeline inserts a cooldown
//! after every provider call and a longer one after each seed-expansion
//! round. The policy is injectable: orchestration code holds a
//! [`Pacer`] trait object, production uses [`FixedPacer`], and tests swap in
//! [`NoOpPacer`] to run at full speed without touching the orchestration
//! logic.
//!
//! Callers skip the pause after the final call of a loop; no request
//! follows it.

use std::time::Duration;

use async_trait::async_trait;

/// Cooldown inserted after each provider request, matching the original
/// tooling's pause.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Cooldown inserted after each seed-expansion round.
pub const DEFAULT_ROUND_DELAY: Duration = Duration::from_millis(200);

/// Pacing policy for provider traffic.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Pause after a single provider request.
    async fn request_pause(&self);

    /// Pause after one full expansion round for a seed.
    async fn round_pause(&self);
}

/// Fixed-interval pacing: every pause sleeps for a configured duration.
#[derive(Debug, Clone)]
pub struct FixedPacer {
    request_delay: Duration,
    round_delay: Duration,
}

impl FixedPacer {
    /// Create a pacer with explicit delays.
    pub fn new(request_delay: Duration, round_delay: Duration) -> Self {
        FixedPacer {
            request_delay,
            round_delay,
        }
    }

    /// The per-request delay.
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// The per-round delay.
    pub fn round_delay(&self) -> Duration {
        self.round_delay
    }
}

impl Default for FixedPacer {
    fn default() -> Self {
        FixedPacer::new(DEFAULT_REQUEST_DELAY, DEFAULT_ROUND_DELAY)
    }
}

#[async_trait]
impl Pacer for FixedPacer {
    async fn request_pause(&self) {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
    }

    async fn round_pause(&self) {
        if !self.round_delay.is_zero() {
            tokio::time::sleep(self.round_delay).await;
        }
    }
}

/// A pacer that never waits. Intended for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPacer;

#[async_trait]
impl Pacer for NoOpPacer {
    async fn request_pause(&self) {}

    async fn round_pause(&self) {}
}
