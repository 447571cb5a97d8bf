use std::{collections::VecDeque, time::Duration};

/// Deferred actions on a virtual clock.
///
/// Time only moves when the owner calls [`Scheduler::advance`], so a frame
/// loop can feed it real frame deltas and tests can step it by hand.
/// Actions due at the same instant come out in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    now: Duration,
    queue: VecDeque<(Duration, A)>,
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Scheduler { now: Duration::ZERO, queue: VecDeque::new() }
    }

    /// Queues `action` to fire `after` from the current instant.
    pub fn schedule(&mut self, after: Duration, action: A) {
        let due = self.now.saturating_add(after);
        let at = self.queue.partition_point(|(d, _)| *d <= due);
        self.queue.insert(at, (due, action));
    }

    /// Moves the clock forward and returns every action that became due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<A> {
        self.now = self.now.saturating_add(elapsed);
        let mut due = Vec::new();
        while self.queue.front().is_some_and(|(d, _)| *d <= self.now) {
            if let Some((_, action)) = self.queue.pop_front() {
                due.push(action);
            }
        }
        due
    }

    /// Returns all pending actions at once, jumping the clock to the last one.
    pub fn drain(&mut self) -> Vec<A> {
        if let Some((last, _)) = self.queue.back() {
            self.now = self.now.max(*last);
        }
        self.queue.drain(..).map(|(_, action)| action).collect()
    }

    /// Drops every pending action and returns how many there were.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}
