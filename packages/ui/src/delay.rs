use std::time::Duration;

use guidance::{Delay, Scheduler};

/// Timer for the current platform: browser timers on web, tokio elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformDelay;

impl Delay for PlatformDelay {
    async fn sleep(&self, duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}

/// A scheduler that waits `latency` on the platform timer.
pub fn scheduler(latency: Duration) -> Scheduler<PlatformDelay> {
    Scheduler::new(PlatformDelay, latency)
}
