//! Deferred-task queue for staged AI turns.
//!
//! The session never blocks: AI selection and commit are queued with
//! wall-clock due times and drained from the frontend tick loop. Tokens
//! allow cancelling tasks that have not fired yet.

use std::time::Instant;

use crate::game_state::checkers_types::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskToken(u64);

/// The two stages of an AI turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTask {
    /// Run the policy and make its selection visible.
    SelectBestMove,
    /// Commit the staged move through the regular move path.
    CommitMove { from: Coord, to: Coord },
}

#[derive(Debug, Clone)]
struct Scheduled {
    token: TaskToken,
    due: Instant,
    task: AiTask,
}

#[derive(Debug)]
pub struct Scheduler {
    next_token: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_token: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, task: AiTask, due: Instant) -> TaskToken {
        self.next_token += 1;
        let token = TaskToken(self.next_token);
        self.pending.push(Scheduled { token, due, task });
        token
    }

    /// Removes a task that has not fired yet. Returns whether anything was
    /// cancelled.
    pub fn cancel(&mut self, token: TaskToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.token != token);
        before != self.pending.len()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Removes and returns every task due at `now`, in schedule order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<AiTask> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());
        for entry in self.pending.drain(..) {
            if entry.due <= now {
                due.push(entry.task);
            } else {
                remaining.push(entry);
            }
        }
        self.pending = remaining;
        due
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
