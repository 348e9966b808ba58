//! Delayed task adapters
//!
//! The validator only needs fire-and-forget scheduling: no cancellation, no
//! ordering guarantees between tasks.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;

use crate::shared::error::{AppError, AppResult};

/// Work to run once the delay elapses
pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// Schedules a task to run once after a delay
pub trait Timer: Send + Sync {
    fn schedule(&self, delay: Duration, task: TimerTask);
}

/// Timer backed by a Tokio runtime
#[derive(Debug, Clone)]
pub struct TokioTimer {
    handle: Handle,
}

impl TokioTimer {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Timer on the runtime of the calling context
    pub fn current() -> AppResult<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| AppError::Runtime(format!("No Tokio runtime available for timers: {}", e)))
    }
}

impl Timer for TokioTimer {
    fn schedule(&self, delay: Duration, task: TimerTask) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

struct PendingTask {
    deadline: Duration,
    seq: u64,
    task: TimerTask,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Timer driven by the host's own clock, for single-threaded event loops
#[derive(Default)]
pub struct ManualTimer {
    clock: Mutex<ManualClock>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward and run every task that came due, earliest first.
    ///
    /// Each task runs with the clock at its own deadline, so work it schedules
    /// also runs in this call once that work comes due.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock().now + by;

        let mut count = 0;
        while let Some(pending) = self.next_due(target) {
            (pending.task)();
            count += 1;
        }

        self.clock().now = target;
        count
    }

    fn next_due(&self, target: Duration) -> Option<PendingTask> {
        let mut clock = self.clock();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.deadline <= target)
            .min_by_key(|(_, task)| (task.deadline, task.seq))
            .map(|(index, _)| index)?;

        let pending = clock.pending.swap_remove(index);
        clock.now = clock.now.max(pending.deadline);
        Some(pending)
    }

    /// Tasks scheduled but not yet run
    pub fn pending(&self) -> usize {
        self.clock().pending.len()
    }

    fn clock(&self) -> MutexGuard<'_, ManualClock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, task: TimerTask) {
        let mut clock = self.clock();
        let deadline = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.push(PendingTask { deadline, seq, task });
    }
}
