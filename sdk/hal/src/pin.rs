//! # Pin descriptors
//!
//! The controller packs pins into banks:
//!
//! - function select: 10 pins per 32-bit word, 3 bits per pin
//!   (`GPFSEL0` = pins 0-9, `GPFSEL1` = pins 10-19, ...)
//! - set / clear / level: 32 pins per word, 1 bit per pin
//!
//! [`PinDescriptor::for_bcm`] turns a BCM pin number into the byte offsets and
//! bit positions for all of these, so none of the arithmetic lives in the
//! register access path.

use core::ops::Range;

pub const GPFSEL0: usize = 0x00;
pub const GPSET0: usize = 0x1C;
pub const GPCLR0: usize = 0x28;
pub const GPLEV0: usize = 0x34;

/// Width of one function-select field.
pub const FSEL_WIDTH: usize = 3;
const PINS_PER_FSEL: u8 = 10;
const PINS_PER_BANK: u8 = 32;

/// Highest BCM pin on the BCM2836/7.
pub const MAX_PIN: u8 = 53;

/// Function-select values. The controller also has six alternate functions,
/// which the game never uses.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Input = 0b000,
    Output = 0b001,
}

impl Mode {
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Where a pin lives in the register window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDescriptor {
    pub pin: u8,
    /// Byte offset of the function-select word holding this pin.
    pub fsel_offset: usize,
    /// Bit position of the 3-bit field inside that word.
    pub fsel_shift: usize,
    pub set_offset: usize,
    pub clear_offset: usize,
    pub level_offset: usize,
    /// `pin % 32`, the bit inside the set/clear/level words.
    pub bit: usize,
}

impl PinDescriptor {
    /// Descriptor for a BCM pin number, `None` past [`MAX_PIN`].
    pub const fn for_bcm(pin: u8) -> Option<Self> {
        if pin > MAX_PIN {
            return None;
        }

        let bank = (pin / PINS_PER_BANK) as usize * 4;

        Some(Self {
            pin,
            fsel_offset: GPFSEL0 + (pin / PINS_PER_FSEL) as usize * 4,
            fsel_shift: (pin % PINS_PER_FSEL) as usize * FSEL_WIDTH,
            set_offset: GPSET0 + bank,
            clear_offset: GPCLR0 + bank,
            level_offset: GPLEV0 + bank,
            bit: (pin % PINS_PER_BANK) as usize,
        })
    }

    /// Bit range of the function-select field, for `BitField::set_bits`.
    #[inline]
    pub const fn fsel_bits(&self) -> Range<usize> {
        self.fsel_shift..self.fsel_shift + FSEL_WIDTH
    }

    /// Single-bit mask written to the set or clear register.
    #[inline]
    pub const fn mask(&self) -> u32 {
        1 << self.bit
    }

    /// Set register for `High`, clear register for `Low`.
    #[inline]
    pub const fn level_register(&self, level: Level) -> usize {
        match level {
            Level::High => self.set_offset,
            Level::Low => self.clear_offset,
        }
    }
}
