use std::time::Duration;

use super::state::Generation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelayedTask {
    Settle,
    Win,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayedCall {
    pub generation: Generation,
    pub due: Duration,
    pub task: DelayedTask,
}

#[derive(Clone, Debug, Default)]
pub struct DelayedCalls {
    pending: Vec<DelayedCall>,
}

impl DelayedCalls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, generation: Generation, due: Duration, task: DelayedTask) {
        self.pending.push(DelayedCall {
            generation,
            due,
            task,
        });
    }

    /// Removes and returns every call due at `now`, earliest first.
    pub fn take_due(&mut self, now: Duration) -> Vec<DelayedCall> {
        let mut due = Vec::new();
        self.pending.retain(|call| {
            if call.due <= now {
                due.push(*call);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|call| call.due);
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
