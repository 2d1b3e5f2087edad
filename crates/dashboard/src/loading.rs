use std::time::{Duration, Instant};

/// Cosmetic "loading" flag raised for a fixed duration after each inventory
/// mutation. A new mark replaces the pending deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingIndicator {
    duration: Duration,
    busy_until: Option<Instant>,
}

impl LoadingIndicator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            busy_until: None,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.busy_until = Some(now + self.duration);
    }

    pub fn is_loading(&self, now: Instant) -> bool {
        self.busy_until.is_some_and(|until| now < until)
    }
}
