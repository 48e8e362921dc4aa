//! # MasterMind HAL
//!
//! Direct register access to the BCM2836/BCM2837 GPIO controller, as wired on
//! the MasterMind board: two LEDs and one push-button.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mastermind_hal::{Gpio, Level, Mode, PinIo, RegisterBlock, Wiring, GPIO_BASE};
//!
//! let wiring = Wiring::default();
//! let regs = RegisterBlock::map(GPIO_BASE)?;
//! let mut gpio = Gpio::new(regs, &wiring.pins())?;
//!
//! gpio.configure_pin(wiring.green_led, Mode::Output)?;
//! gpio.configure_pin(wiring.button, Mode::Input)?;
//!
//! gpio.write_level(wiring.green_led, Level::High)?;
//! let pressed = gpio.read_level(wiring.button)?;
//! ```
//!
//! ## Register Map
//!
//! Only the registers the game touches are named here; see [`pin`] for the
//! per-pin arithmetic.
//!
//! | Offset | Register  | Access | Purpose                                 |
//! |--------|-----------|--------|-----------------------------------------|
//! | `0x00` | `GPFSEL0` | RW     | Function select, 10 pins x 3 bits each  |
//! | `0x1C` | `GPSET0`  | WO     | Write 1 to drive a pin high             |
//! | `0x28` | `GPCLR0`  | WO     | Write 1 to drive a pin low              |
//! | `0x34` | `GPLEV0`  | RO     | Current level of pins 0-31              |
//!
//! Mode changes are a read-modify-write of a shared function-select word, so
//! they are not atomic with respect to each other. Level changes go through
//! the set/clear registers and never race across pins.

pub mod error;
pub mod gpio;
pub mod pin;
pub mod regs;
pub mod wiring;

pub use error::GpioError;
pub use gpio::{Gpio, PinIo};
pub use pin::{Level, Mode, PinDescriptor};
pub use regs::{is_privileged, RegisterBlock, BLOCK_SIZE, GPIO_BASE};
pub use wiring::Wiring;
