//! # One-shot timer
//!
//! `Idle -> Armed -> Expired`, once. Expiry is not delivered asynchronously:
//! whoever holds the timer polls it against the clock, and the first poll at
//! or past the deadline flips it to `Expired`. There is no way back to
//! `Armed`; a new window needs a new timer.

use std::time::Duration;

use log::info;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Armed,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("one-shot timer cannot be armed while {0:?}")]
    NotIdle(TimerState),
}

#[derive(Debug, Clone)]
pub struct OneShotTimer {
    duration: Duration,
    started: Duration,
    state: TimerState,
}

impl OneShotTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: Duration::ZERO,
            state: TimerState::Idle,
        }
    }

    /// Start the countdown at `now`.
    pub fn arm(&mut self, now: Duration) -> Result<(), TimerError> {
        if self.state != TimerState::Idle {
            return Err(TimerError::NotIdle(self.state));
        }

        self.started = now;
        self.state = TimerState::Armed;
        Ok(())
    }

    /// Advance the state machine to `now` and report where it ended up.
    pub fn poll(&mut self, now: Duration) -> TimerState {
        if self.state == TimerState::Armed {
            let elapsed = now.saturating_sub(self.started);
            if elapsed >= self.duration {
                self.state = TimerState::Expired;
                info!("timer expired, window took {:.3}s", elapsed.as_secs_f64());
            }
        }
        self.state
    }

    #[inline]
    pub fn is_expired(&mut self, now: Duration) -> bool {
        self.poll(now) == TimerState::Expired
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// When the window closes, if it has been armed.
    pub fn deadline(&self) -> Option<Duration> {
        match self.state {
            TimerState::Idle => None,
            _ => Some(self.started + self.duration),
        }
    }
}
