use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Minimum-interval pacing for outbound requests.
///
/// Clones share the same schedule, so every holder together makes at most
/// one call per interval. A zero interval disables pacing entirely.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_call: Arc<Mutex<Option<Instant>>>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Waits until the interval since the previous call has elapsed, then
    /// claims the current slot. The first call never waits.
    pub async fn wait(&self) {
        if self.interval.is_zero() {
            return;
        }

        let mut last_call = self.last_call.lock().await;

        if let Some(previous) = *last_call {
            let ready_at = previous + self.interval;

            if ready_at > Instant::now() {
                tokio::time::sleep_until(ready_at).await;
            }
        }

        *last_call = Some(Instant::now());
    }
}
