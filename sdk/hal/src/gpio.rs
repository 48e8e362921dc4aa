use bit_field::BitField;
use heapless::FnvIndexMap;
use log::{debug, trace};

use crate::error::GpioError;
use crate::pin::{Level, Mode, PinDescriptor};
use crate::regs::RegisterBlock;

/// Most pins a [`Gpio`] will track. The board uses three.
pub const MAX_PINS: usize = 8;

/// Pin-level operations the game needs from the hardware.
///
/// [`Gpio`] is the real thing; anything else implementing this is a
/// stand-in, which is how the game logic gets tested off the board.
pub trait PinIo {
    fn configure_pin(&mut self, pin: u8, mode: Mode) -> Result<(), GpioError>;
    fn write_level(&mut self, pin: u8, level: Level) -> Result<(), GpioError>;
    fn read_level(&mut self, pin: u8) -> Result<bool, GpioError>;
}

/// Register-level driver for the pins the board is wired to.
pub struct Gpio {
    regs: RegisterBlock,
    pins: FnvIndexMap<u8, PinDescriptor, MAX_PINS>,
}

impl Gpio {
    /// Take ownership of the register window and register `pins`.
    /// Any other pin number is rejected by every operation.
    pub fn new(regs: RegisterBlock, pins: &[u8]) -> Result<Self, GpioError> {
        let mut table = FnvIndexMap::new();

        for &pin in pins {
            let descriptor = PinDescriptor::for_bcm(pin).ok_or(GpioError::UnsupportedPin(pin))?;
            table
                .insert(pin, descriptor)
                .map_err(|_| GpioError::PinTableFull(pin))?;
        }

        Ok(Self { regs, pins: table })
    }

    pub fn descriptor(&self, pin: u8) -> Result<&PinDescriptor, GpioError> {
        self.pins.get(&pin).ok_or(GpioError::UnsupportedPin(pin))
    }

    pub fn registers(&self) -> &RegisterBlock {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut RegisterBlock {
        &mut self.regs
    }
}

impl PinIo for Gpio {
    fn configure_pin(&mut self, pin: u8, mode: Mode) -> Result<(), GpioError> {
        let d = *self.descriptor(pin)?;

        // clears the 3-bit field then ORs the mode in, other pins untouched
        self.regs.modify(d.fsel_offset, |mut word| {
            word.set_bits(d.fsel_bits(), mode.bits());
            word
        })?;

        debug!("pin {} -> {:?} (fsel {:#04x} << {})", pin, mode, d.fsel_offset, d.fsel_shift);
        Ok(())
    }

    fn write_level(&mut self, pin: u8, level: Level) -> Result<(), GpioError> {
        let d = *self.descriptor(pin)?;
        trace!("pin {} -> {:?}", pin, level);
        self.regs.write(d.level_register(level), d.mask())
    }

    fn read_level(&mut self, pin: u8) -> Result<bool, GpioError> {
        let d = *self.descriptor(pin)?;
        Ok(self.regs.read(d.level_offset)?.get_bit(d.bit))
    }
}
