use std::thread;
use std::time::{Duration, Instant};

/// Source of time for everything that waits.
///
/// The game only ever needs "how long since start" and "block for this long",
/// so a test can swap in a clock that advances only when slept on.
pub trait Clock {
    /// Monotonic time since some fixed epoch.
    fn now(&self) -> Duration;
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration)
    }
}
