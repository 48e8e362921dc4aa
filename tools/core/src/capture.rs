//! # Input capture
//!
//! One digit is entered as a burst of presses: the first press opens a
//! five second window, and every poll inside the window that sees the button
//! down counts one. The raw count is clamped to the palette.

use std::io::Write;
use std::time::Duration;

use log::{debug, info};
use mastermind_hal::{PinIo, Wiring};

use crate::board::Board;
use crate::clock::Clock;
use crate::error::GameError;
use crate::sequence::{Sequence, COLORS, SEQ_LEN};
use crate::timer::OneShotTimer;

/// Highest digit a burst of presses can produce.
pub const MAX_DIGIT: u8 = COLORS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConfig {
    /// How long the window stays open after the first press.
    pub window: Duration,
    /// Gap between button samples inside the window.
    pub poll_interval: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(5),
            poll_interval: Duration::from_millis(200),
        }
    }
}

/// Counts above [`MAX_DIGIT`] become [`MAX_DIGIT`]. Zero stays zero.
#[inline]
pub fn clamp_presses(raw: u32) -> u8 {
    raw.min(MAX_DIGIT as u32) as u8
}

#[derive(Debug, Clone)]
pub struct InputCapture {
    config: CaptureConfig,
    wiring: Wiring,
}

impl InputCapture {
    pub fn new(config: CaptureConfig, wiring: Wiring) -> Self {
        Self { config, wiring }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Block for the opening press, then count presses until the window
    /// closes. The opening press itself is not counted.
    pub fn capture_digit<P: PinIo, C: Clock>(
        &self,
        board: &mut Board<P, C>,
    ) -> Result<u8, GameError> {
        let button = self.wiring.button;
        board.wait_until_pressed(button)?;

        let mut timer = OneShotTimer::new(self.config.window);
        timer.arm(board.now())?;
        debug!("input window open for {:?}", self.config.window);

        let mut raw = 0u32;
        while !timer.is_expired(board.now()) {
            if board.is_pressed(button)? {
                raw += 1;
                info!("button pressed ({})", raw);
            }
            board.delay(self.config.poll_interval);
        }

        let digit = clamp_presses(raw);
        if raw > MAX_DIGIT as u32 {
            debug!("{} presses clamped to {}", raw, digit);
        }
        Ok(digit)
    }

    /// Echo a captured digit: one red blink, then `digit` green blinks.
    pub fn acknowledge<P: PinIo, C: Clock>(
        &self,
        board: &mut Board<P, C>,
        digit: u8,
    ) -> Result<(), GameError> {
        board.blink(self.wiring.red_led, 1)?;
        board.blink(self.wiring.green_led, digit)?;
        Ok(())
    }

    /// Capture a whole guess, echoing each digit on the LEDs and on `out`.
    pub fn capture_guess<P: PinIo, C: Clock, W: Write>(
        &self,
        board: &mut Board<P, C>,
        out: &mut W,
    ) -> Result<Sequence, GameError> {
        let mut digits = [0u8; SEQ_LEN];

        for slot in digits.iter_mut() {
            let digit = self.capture_digit(board)?;
            writeln!(out, "Input: {}", digit)?;
            self.acknowledge(board, digit)?;
            writeln!(out)?;
            *slot = digit;
        }

        Ok(Sequence::new(digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_the_palette() {
        assert_eq!(clamp_presses(0), 0);
        assert_eq!(clamp_presses(2), 2);
        assert_eq!(clamp_presses(3), 3);
        assert_eq!(clamp_presses(17), 3);
        assert_eq!(clamp_presses(u32::MAX), 3);
    }
}
