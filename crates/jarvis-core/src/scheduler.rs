//! Production implementations of the scheduling and randomness seams.

use jarvis_protocol::{RandomSource, Scheduler};
use log::debug;
use std::time::Duration;

/// Scheduler backed by a spawned `tokio::time::sleep`.
///
/// Fire-and-forget: once scheduled, the task always runs. Requires a tokio
/// runtime context.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        debug!("scheduling deferred task (delay_ms={})", delay.as_millis());
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

/// Uniform random source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::{ThreadRandom, TokioScheduler};
    use jarvis_protocol::{RandomSource, Scheduler};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[test]
    fn thread_random_stays_in_unit_interval() {
        let random = ThreadRandom;
        for _ in 0..100 {
            let value = random.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        TokioScheduler.schedule(
            Duration::from_millis(1500),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(!fired.load(Ordering::SeqCst));
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(fired.load(Ordering::SeqCst));
    }
}
