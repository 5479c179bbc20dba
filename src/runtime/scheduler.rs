use crate::runtime::event::AppEvent;
use crate::runtime::time::Instant;
use std::collections::VecDeque;
use std::time::Duration;

/// Timers are fire-and-forget: once scheduled they cannot be cancelled,
/// matching the page's semantics for the success-message removal and the
/// typewriter ticks.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerCommand {
    EmitNow(AppEvent),
    EmitAfter { delay: Duration, event: AppEvent },
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    event: AppEvent,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    ready: VecDeque<AppEvent>,
    delayed: Vec<DelayedTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::EmitNow(event) => {
                self.ready.push_back(event);
            }
            SchedulerCommand::EmitAfter { delay, event } => {
                self.delayed.push(DelayedTask {
                    due_at: now + delay,
                    event,
                });
            }
        }
    }

    pub fn drain_ready(&mut self, now: Instant) -> Vec<AppEvent> {
        let mut idx = 0usize;
        while idx < self.delayed.len() {
            if self.delayed[idx].due_at <= now {
                let task = self.delayed.swap_remove(idx);
                self.ready.push_back(task.event);
            } else {
                idx += 1;
            }
        }

        self.ready.drain(..).collect()
    }

    /// Time until the next pending event, Duration::ZERO when one is
    /// already ready, None when nothing is scheduled.
    pub fn next_due(&self, now: Instant) -> Option<Duration> {
        if !self.ready.is_empty() {
            return Some(Duration::ZERO);
        }
        self.delayed
            .iter()
            .map(|task| task.due_at.saturating_duration_since(now))
            .min()
    }
}
