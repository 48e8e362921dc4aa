use std::io;

use mastermind_hal::GpioError;
use thiserror::Error;

use crate::timer::TimerError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Gpio(#[from] GpioError),

    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error("failed to write game output")]
    Output(#[from] io::Error),
}

/// Rejected integer encodings of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("{0} has more than 3 digits")]
    TooManyDigits(u32),

    #[error("digit {digit} at position {position} is not a colour (expected 1..=3)")]
    OutOfPalette { position: usize, digit: u8 },
}
