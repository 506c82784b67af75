//! Manually advanced scheduler for deterministic delayed-effect tests.

use jarvis_protocol::Scheduler;
use parking_lot::Mutex;
use std::time::Duration;

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce() + Send + 'static>,
}

#[derive(Default)]
struct Inner {
    now: Duration,
    seq: u64,
    tasks: Vec<PendingTask>,
}

/// Scheduler whose clock only moves when a test calls [`ManualScheduler::advance`].
///
/// Tasks fire synchronously inside `advance`, in due order with ties broken
/// by scheduling order.
#[derive(Default)]
pub struct ManualScheduler {
    inner: Mutex<Inner>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward and run every task that has come due.
    pub fn advance(&self, delta: Duration) {
        self.inner.lock().now += delta;
        loop {
            // Take one due task at a time so tasks run outside the lock and
            // may themselves schedule follow-ups.
            let next = {
                let mut inner = self.inner.lock();
                let now = inner.now;
                let index = inner
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due <= now)
                    .min_by_key(|(_, pending)| (pending.due, pending.seq))
                    .map(|(index, _)| index);
                match index {
                    Some(index) => inner.tasks.remove(index).task,
                    None => break,
                }
            };
            next();
        }
    }

    /// Number of tasks still waiting to come due.
    pub fn pending(&self) -> usize {
        self.inner.lock().tasks.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        let mut inner = self.inner.lock();
        let due = inner.now + delay;
        let seq = inner.seq;
        inner.seq += 1;
        inner.tasks.push(PendingTask { due, seq, task });
    }
}
