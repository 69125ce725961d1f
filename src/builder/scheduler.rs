//! Cancelable delayed tasks
//!
//! The wizard never sleeps. Delayed transitions are queued here with a due
//! instant and handed back by [`Scheduler::poll`] once the caller's clock
//! passes it. The caller owns the clock, which keeps tests deterministic.

use std::time::{Duration, Instant};

/// Identifier of a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TaskId,
    due: Instant,
    task: T,
}

/// Queue of delayed tasks ordered by due time, then by scheduling order
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: now + delay,
            task,
        });
        id
    }

    /// Drop a task; returns whether it was still pending
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Drop every pending task
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest due instant, for sizing the event poll timeout
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Remove and return every task due at `now`, oldest first
    pub fn poll(&mut self, now: Instant) -> Vec<(TaskId, T)> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|entry| entry.due <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.due, entry.id));
        due.into_iter().map(|entry| (entry.id, entry.task)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_returns_due_tasks_in_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_millis(300), "late");
        scheduler.schedule(start, Duration::from_millis(100), "early");

        assert!(scheduler.poll(start + Duration::from_millis(50)).is_empty());

        let due = scheduler.poll(start + Duration::from_millis(400));
        let tasks: Vec<_> = due.into_iter().map(|(_, task)| task).collect();
        assert_eq!(tasks, vec!["early", "late"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(start, Duration::from_millis(10), 1);
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.poll(start + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_next_due() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        assert!(scheduler.next_due().is_none());
        scheduler.schedule(start, Duration::from_millis(500), ());
        assert_eq!(scheduler.next_due(), Some(start + Duration::from_millis(500)));
    }
}
