//! Repeating timer for the single-threaded game loop.

use std::time::{Duration, Instant};

/// Fires once per interval when polled. The owner holds the only handle;
/// cancelling consumes it, so a cancelled timer can never fire again.
#[derive(Debug)]
pub struct RepeatingTimer {
    interval: Duration,
    next_fire: Instant,
}

impl RepeatingTimer {
    pub fn start(now: Instant, interval: Duration) -> Self {
        Self {
            interval,
            next_fire: now + interval,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.next_fire
    }

    /// Returns true when the deadline has passed and re-arms one interval
    /// from `now`. A late poll fires once, not once per missed interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_fire {
            return false;
        }
        self.next_fire = now + self.interval;
        true
    }

    pub fn cancel(self) {}
}
