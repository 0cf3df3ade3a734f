//! Single-slot cancellable deferred task
//!
//! Models a delayed callback driven by the frame loop. At most one task is
//! pending at a time: scheduling a new one supersedes whatever was pending,
//! and the superseded task is handed back to the caller instead of running.

use log::trace;

/// Identifies one scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A task waiting for its due time
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTask<T> {
    pub handle: TaskHandle,
    pub due_at: f64,
    pub payload: T,
}

/// Holds at most one pending task
#[derive(Debug, Clone)]
pub struct TransitionScheduler<T> {
    pending: Option<ScheduledTask<T>>,
    next_id: u64,
}

impl<T> TransitionScheduler<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            next_id: 0,
        }
    }

    /// Schedule `payload` to fire `delay` seconds after `now`
    ///
    /// Returns the new handle and the task it superseded, if any.
    pub fn schedule(&mut self, now: f64, delay: f64, payload: T) -> (TaskHandle, Option<ScheduledTask<T>>) {
        let superseded = self.pending.take();
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;

        if let Some(old) = &superseded {
            trace!("task {} superseded by task {}", old.handle.0, handle.0);
        }

        self.pending = Some(ScheduledTask {
            handle,
            due_at: now + delay.max(0.0),
            payload,
        });
        (handle, superseded)
    }

    /// Drop the pending task without running it
    pub fn cancel(&mut self) -> Option<ScheduledTask<T>> {
        self.pending.take()
    }

    /// Take the pending task if it is due at `now`
    pub fn poll(&mut self, now: f64) -> Option<ScheduledTask<T>> {
        match &self.pending {
            Some(task) if now >= task.due_at => self.pending.take(),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for TransitionScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_when_due() {
        let mut scheduler = TransitionScheduler::new();
        let (handle, superseded) = scheduler.schedule(1.0, 0.1, "reveal");
        assert!(superseded.is_none());

        assert!(scheduler.poll(1.05).is_none());
        assert!(scheduler.is_pending());

        let fired = scheduler.poll(1.2).expect("task should be due");
        assert_eq!(fired.handle, handle);
        assert_eq!(fired.payload, "reveal");
        assert!(!scheduler.is_pending());
        assert!(scheduler.poll(5.0).is_none());
    }

    #[test]
    fn test_new_task_supersedes_pending() {
        let mut scheduler = TransitionScheduler::new();
        let (first, _) = scheduler.schedule(0.0, 0.1, 1);
        let (second, superseded) = scheduler.schedule(0.05, 0.1, 2);

        assert_ne!(first, second);
        assert_eq!(superseded.map(|t| t.handle), Some(first));

        // Only the second task ever fires
        assert!(scheduler.poll(0.1).is_none());
        let fired = scheduler.poll(0.2).unwrap();
        assert_eq!(fired.payload, 2);
        assert!(scheduler.poll(1.0).is_none());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = TransitionScheduler::new();
        scheduler.schedule(0.0, 0.1, ());
        assert!(scheduler.cancel().is_some());
        assert!(scheduler.poll(1.0).is_none());
        assert!(scheduler.cancel().is_none());
    }

    #[test]
    fn test_negative_delay_fires_immediately() {
        let mut scheduler = TransitionScheduler::new();
        scheduler.schedule(2.0, -1.0, ());
        assert!(scheduler.poll(2.0).is_some());
    }
}
