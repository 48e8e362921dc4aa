use std::fmt;
use std::ops::Index;

use rand::Rng;

use crate::error::SequenceError;

/// Positions in a code.
pub const SEQ_LEN: usize = 3;
/// Colours are `1..=COLORS`.
pub const COLORS: u8 = 3;

/// A code: the hidden secret or a player's guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sequence([u8; SEQ_LEN]);

impl Sequence {
    pub const fn new(digits: [u8; SEQ_LEN]) -> Self {
        Self(digits)
    }

    pub const fn digits(&self) -> [u8; SEQ_LEN] {
        self.0
    }

    /// Split a decimal number into digits, right-aligned: `12` becomes
    /// `[0, 1, 2]`. Extra leading digits are dropped. No palette check.
    pub fn decode(code: u32) -> Self {
        let mut digits = [0u8; SEQ_LEN];
        let mut rest = code;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        Self(digits)
    }

    /// Like [`Sequence::decode`], but every digit must be a colour.
    pub fn from_code(code: u32) -> Result<Self, SequenceError> {
        if code > 999 {
            return Err(SequenceError::TooManyDigits(code));
        }

        let seq = Self::decode(code);
        for (position, &digit) in seq.0.iter().enumerate() {
            if !(1..=COLORS).contains(&digit) {
                return Err(SequenceError::OutOfPalette { position, digit });
            }
        }
        Ok(seq)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; SEQ_LEN];
        for d in digits.iter_mut() {
            *d = rng.gen_range(1..=COLORS);
        }
        Self(digits)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl From<[u8; SEQ_LEN]> for Sequence {
    fn from(digits: [u8; SEQ_LEN]) -> Self {
        Self(digits)
    }
}

impl Index<usize> for Sequence {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.0[i]
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} {} {}", a, b, c)
    }
}
