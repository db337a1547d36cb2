//! One-shot deferred task contracts.

use std::{cell::RefCell, fmt, rc::Rc};

/// Boxed callback run once when a scheduled delay elapses.
pub type DeferredTask = Box<dyn FnOnce()>;

/// Host service that runs a callback once after a delay.
pub trait TaskScheduler {
    /// Schedules `task` to run once after `delay_ms` milliseconds.
    ///
    /// The returned handle owns the pending task: dropping or cancelling it before the delay
    /// elapses prevents the task from running.
    fn schedule_once(&self, delay_ms: u32, task: DeferredTask) -> ScheduledTask;
}

/// Ownership handle for a pending one-shot task.
///
/// Cancels the task when dropped unless [`ScheduledTask::detach`] was called.
#[must_use = "dropping a ScheduledTask cancels it"]
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    /// Creates a handle whose cancellation runs `cancel`.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
            detach: None,
        }
    }

    /// Creates a handle for a task that was never scheduled.
    pub fn inert() -> Self {
        Self {
            cancel: None,
            detach: None,
        }
    }

    /// Sets the hook [`ScheduledTask::detach`] runs to keep host resources for the task alive
    /// once the handle no longer owns them.
    pub fn on_detach(mut self, detach: impl FnOnce() + 'static) -> Self {
        self.detach = Some(Box::new(detach));
        self
    }

    /// Cancels the task if it has not run yet.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Releases ownership so the task runs even after the handle is gone.
    pub fn detach(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
        self.cancel = None;
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Scheduler that drops every task, for unsupported targets.
pub struct NoopScheduler;

impl TaskScheduler for NoopScheduler {
    fn schedule_once(&self, _delay_ms: u32, _task: DeferredTask) -> ScheduledTask {
        ScheduledTask::inert()
    }
}

struct PendingTask {
    id: u64,
    due_ms: u64,
    task: DeferredTask,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTask>,
}

#[derive(Clone, Default)]
/// Virtual-time scheduler; tasks run only when the clock is advanced.
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    /// Returns the current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Returns how many tasks are waiting to run.
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Advances the clock by `ms`, running every task that becomes due in due-time order.
    ///
    /// Returns the number of tasks that ran.
    pub fn advance_by(&self, ms: u64) -> usize {
        let target = self.now_ms().saturating_add(ms);
        let mut ran = 0;
        loop {
            // Release the borrow before running the task so it may schedule or cancel others.
            let next = {
                let mut clock = self.inner.borrow_mut();
                let due = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due_ms <= target)
                    .min_by_key(|(_, pending)| (pending.due_ms, pending.id))
                    .map(|(index, _)| index);
                due.map(|index| {
                    let pending = clock.pending.remove(index);
                    clock.now_ms = clock.now_ms.max(pending.due_ms);
                    pending.task
                })
            };
            match next {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }
        self.inner.borrow_mut().now_ms = target;
        ran
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.inner.borrow();
        f.debug_struct("ManualScheduler")
            .field("now_ms", &clock.now_ms)
            .field("pending", &clock.pending.len())
            .finish()
    }
}

impl TaskScheduler for ManualScheduler {
    fn schedule_once(&self, delay_ms: u32, task: DeferredTask) -> ScheduledTask {
        let id = {
            let mut clock = self.inner.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due_ms = clock.now_ms.saturating_add(u64::from(delay_ms));
            clock.pending.push(PendingTask { id, due_ms, task });
            id
        };
        let clock = Rc::downgrade(&self.inner);
        ScheduledTask::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.borrow_mut().pending.retain(|pending| pending.id != id);
            }
        })
    }
}
