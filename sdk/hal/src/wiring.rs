//! BCM pin numbers of the board.

/// Green LED, the primary feedback channel.
pub const LED: u8 = 13;
/// Red LED, used as a separator between blink groups.
pub const LED2: u8 = 5;
pub const BUTTON: u8 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    pub green_led: u8,
    pub red_led: u8,
    pub button: u8,
}

impl Wiring {
    pub const fn pins(&self) -> [u8; 3] {
        [self.green_led, self.red_led, self.button]
    }
}

impl Default for Wiring {
    fn default() -> Self {
        Self {
            green_led: LED,
            red_led: LED2,
            button: BUTTON,
        }
    }
}
