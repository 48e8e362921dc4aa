use std::io;

use thiserror::Error;

/// Everything that can go wrong between us and the GPIO controller.
///
/// None of these are recoverable at runtime; the front-end reports them and
/// exits.
#[derive(Debug, Error)]
pub enum GpioError {
    #[error("pin {0} not supported")]
    UnsupportedPin(u8),

    #[error("pin table is full, cannot add pin {0}")]
    PinTableFull(u8),

    #[error("register offset {0:#05x} is outside the GPIO window")]
    OffsetOutOfRange(usize),

    #[error("unable to open /dev/mem")]
    Open(#[source] io::Error),

    #[error("mmap (GPIO) failed")]
    Map(#[source] io::Error),
}
