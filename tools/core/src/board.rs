//! # Board
//!
//! Symbolic LED/button operations on top of [`PinIo`]. This is the only
//! feedback channel the player gets, so every wait here is a real,
//! blocking wait on the single thread of control.

use std::time::Duration;

use mastermind_hal::{GpioError, Level, Mode, PinIo};

use crate::clock::Clock;

/// Blink duty cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTiming {
    pub on: Duration,
    pub off: Duration,
    /// Pause after the last blink of a group, so groups read apart.
    pub settle: Duration,
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self {
            on: Duration::from_millis(700),
            off: Duration::from_millis(700),
            settle: Duration::from_millis(500),
        }
    }
}

pub struct Board<P, C> {
    pins: P,
    clock: C,
    timing: BlinkTiming,
}

impl<P: PinIo, C: Clock> Board<P, C> {
    pub fn new(pins: P, clock: C) -> Self {
        Self {
            pins,
            clock,
            timing: BlinkTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: BlinkTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn configure(&mut self, pin: u8, mode: Mode) -> Result<(), GpioError> {
        self.pins.configure_pin(pin, mode)
    }

    #[inline]
    pub fn turn_on(&mut self, pin: u8) -> Result<(), GpioError> {
        self.pins.write_level(pin, Level::High)
    }

    #[inline]
    pub fn turn_off(&mut self, pin: u8) -> Result<(), GpioError> {
        self.pins.write_level(pin, Level::Low)
    }

    /// `pin` must already be configured as an input.
    #[inline]
    pub fn is_pressed(&mut self, pin: u8) -> Result<bool, GpioError> {
        self.pins.read_level(pin)
    }

    /// Spin on the button until it reads high. No timeout: if nobody presses
    /// it, this never returns.
    pub fn wait_until_pressed(&mut self, pin: u8) -> Result<(), GpioError> {
        while !self.is_pressed(pin)? {
            core::hint::spin_loop();
        }
        Ok(())
    }

    /// `count` on/off cycles followed by the settle delay. `count == 0` is
    /// just the settle delay.
    pub fn blink(&mut self, pin: u8, count: u8) -> Result<(), GpioError> {
        for _ in 0..count {
            self.turn_on(pin)?;
            self.clock.sleep(self.timing.on);
            self.turn_off(pin)?;
            self.clock.sleep(self.timing.off);
        }
        self.clock.sleep(self.timing.settle);
        Ok(())
    }

    #[inline]
    pub fn delay(&self, duration: Duration) {
        self.clock.sleep(duration)
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn timing(&self) -> BlinkTiming {
        self.timing
    }

    pub fn pins(&self) -> &P {
        &self.pins
    }

    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_parts(self) -> (P, C) {
        (self.pins, self.clock)
    }
}
