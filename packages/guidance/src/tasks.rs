//! # Delayed tasks
//!
//! The UI fakes network latency (sign-in, saves, assistant replies) by waiting
//! before applying a result. [`Scheduler::submit`] pairs the work with a
//! [`TaskHandle`]; awaiting the returned future sleeps for the configured
//! latency and then runs the work, unless the handle was cancelled first.
//!
//! The wait itself is behind the [`Delay`] trait so each platform supplies its
//! own timer and tests can use [`Immediate`].

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Async timer.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Completes at once regardless of the requested duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl Delay for Immediate {
    async fn sleep(&self, _duration: Duration) {}
}

/// Timer backed by the tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

#[cfg(not(target_arch = "wasm32"))]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Cancels a submitted task. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Whether both handles control the same submission.
    pub fn same_task(&self, other: &TaskHandle) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

#[derive(Clone, Debug)]
pub struct Scheduler<D: Delay> {
    delay: D,
    latency: Duration,
}

impl<D: Delay + Clone> Scheduler<D> {
    pub fn new(delay: D, latency: Duration) -> Self {
        Self { delay, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Queue `work` behind the latency.
    ///
    /// The future yields `None` when the handle was cancelled before the wait
    /// ended; `work` is then never called. Each submission is independent.
    pub fn submit<T, F>(&self, work: F) -> (TaskHandle, impl Future<Output = Option<T>>)
    where
        F: FnOnce() -> T,
    {
        let handle = TaskHandle::default();
        let watch = handle.clone();
        let delay = self.delay.clone();
        let latency = self.latency;
        let pending = async move {
            if watch.is_cancelled() {
                return None;
            }
            delay.sleep(latency).await;
            if watch.is_cancelled() {
                tracing::debug!("delayed task cancelled");
                return None;
            }
            Some(work())
        };
        (handle, pending)
    }
}

impl Scheduler<Immediate> {
    /// A scheduler that never waits.
    pub fn immediate() -> Self {
        Self::new(Immediate, Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_immediate_completes() {
        let scheduler = Scheduler::new(Immediate, Duration::from_secs(60));
        let (_handle, pending) = scheduler.submit(|| 7);
        assert_eq!(pending.await, Some(7));
    }

    #[tokio::test]
    async fn test_cancelled_work_never_runs() {
        let ran = Cell::new(false);
        let scheduler = Scheduler::immediate();
        let (handle, pending) = scheduler.submit(|| ran.set(true));
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(pending.await, None);
        assert!(!ran.get());
    }

    #[test]
    fn test_handle_identity() {
        let scheduler = Scheduler::immediate();
        let (a, _) = scheduler.submit(|| ());
        let (b, _) = scheduler.submit(|| ());
        assert!(a.same_task(&a.clone()));
        assert!(!a.same_task(&b));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_latency() {
        let scheduler = Scheduler::new(TokioDelay, Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        let (_handle, pending) = scheduler.submit(|| "reply");
        assert_eq!(pending.await, Some("reply"));
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_wait() {
        let scheduler = Scheduler::new(TokioDelay, Duration::from_millis(1000));
        let (handle, pending) = scheduler.submit(|| 1);
        let (result, ()) = tokio::join!(pending, async {
            tokio::time::sleep(Duration::from_millis(400)).await;
            handle.cancel();
        });
        assert_eq!(result, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_complete_independently() {
        let scheduler = Scheduler::new(TokioDelay, Duration::from_millis(1500));
        let (first, a) = scheduler.submit(|| "first");
        let (_second, b) = scheduler.submit(|| "second");
        first.cancel();
        let (a, b) = tokio::join!(a, b);
        assert_eq!(a, None);
        assert_eq!(b, Some("second"));
    }
}
