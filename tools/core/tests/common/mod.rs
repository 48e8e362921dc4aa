#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use mastermind_core::{BlinkTiming, CaptureConfig, Clock, GameConfig};
use mastermind_hal::{GpioError, Level, Mode, PinIo, Wiring};

/// Reads past the end of a script before a stalled wait is treated as a hang.
const STALL_LIMIT: usize = 1_000_000;

/// Time only moves when something sleeps.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn elapsed(&self) -> Duration {
        self.now.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

/// Pins backed by a script of button samples, recording everything written.
#[derive(Debug, Default)]
pub struct ScriptedPins {
    button: u8,
    samples: VecDeque<bool>,
    overrun: usize,
    pub modes: Vec<(u8, Mode)>,
    pub writes: Vec<(u8, Level)>,
}

impl ScriptedPins {
    pub fn new(button: u8, samples: impl IntoIterator<Item = bool>) -> Self {
        Self {
            button,
            samples: samples.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }

    /// High pulses written to `pin`.
    pub fn blinks_on(&self, pin: u8) -> usize {
        self.writes
            .iter()
            .filter(|&&(p, level)| p == pin && level == Level::High)
            .count()
    }
}

impl PinIo for ScriptedPins {
    fn configure_pin(&mut self, pin: u8, mode: Mode) -> Result<(), GpioError> {
        self.modes.push((pin, mode));
        Ok(())
    }

    fn write_level(&mut self, pin: u8, level: Level) -> Result<(), GpioError> {
        self.writes.push((pin, level));
        Ok(())
    }

    fn read_level(&mut self, pin: u8) -> Result<bool, GpioError> {
        if pin != self.button {
            return Err(GpioError::UnsupportedPin(pin));
        }
        match self.samples.pop_front() {
            Some(sample) => Ok(sample),
            None => {
                self.overrun += 1;
                assert!(self.overrun < STALL_LIMIT, "button script ran out, game is waiting forever");
                Ok(false)
            }
        }
    }
}

/// One second window sampled every 200ms: five samples per digit.
pub fn fast_capture() -> CaptureConfig {
    CaptureConfig {
        window: Duration::from_secs(1),
        poll_interval: Duration::from_millis(200),
    }
}

pub fn samples_per_window(config: &CaptureConfig) -> usize {
    (config.window.as_millis() / config.poll_interval.as_millis()) as usize
}

/// Opening press, then `presses` samples held down, then released for the
/// rest of the window.
pub fn digit_script(config: &CaptureConfig, presses: usize) -> Vec<bool> {
    let polls = samples_per_window(config);
    assert!(presses <= polls, "cannot fit {} presses in {} polls", presses, polls);

    let mut script = vec![true];
    script.extend(std::iter::repeat(true).take(presses));
    script.extend(std::iter::repeat(false).take(polls - presses));
    script
}

pub fn guess_script(config: &CaptureConfig, digits: [usize; 3]) -> Vec<bool> {
    digits
        .iter()
        .flat_map(|&d| digit_script(config, d))
        .collect()
}

pub fn test_config() -> GameConfig {
    GameConfig {
        capture: fast_capture(),
        blink: BlinkTiming {
            on: Duration::from_millis(10),
            off: Duration::from_millis(10),
            settle: Duration::from_millis(5),
        },
        ..GameConfig::default()
    }
}

pub fn wiring() -> Wiring {
    Wiring::default()
}
