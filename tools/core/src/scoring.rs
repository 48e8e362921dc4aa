//! # Scoring
//!
//! Two independent implementations of the same rule, kept side by side so
//! one can check the other.
//!
//! The rule, for secret `s` and guess `g`:
//!
//! 1. `exact` counts positions with `s[i] == g[i]`. Those slots are spent on
//!    both sides.
//! 2. For every other position `i`, find the first `j != i` whose slot is not
//!    spent and with `g[j] == s[i]`. The match only counts if `g[j]` differs
//!    from the colour of the previous approximate match (initially none).
//!    On a match, `approx += 1` and that colour becomes the previous one.
//!
//! Step 2 only remembers the most recent colour and never marks slots as
//! used, so the result is not symmetric in its arguments: `(121, 213)`
//! scores `0 exact / 3 approximate` but `(213, 121)` scores `0 / 2`. Both
//! implementations agree on this, and the asymmetry is kept.

use std::fmt;

use bitflags::bitflags;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sequence::{Sequence, SEQ_LEN};

/// Colour value meaning "no approximate match yet". Never a palette colour.
const NO_COLOUR: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchResult {
    pub exact: u8,
    pub approx: u8,
}

impl MatchResult {
    pub const fn new(exact: u8, approx: u8) -> Self {
        Self { exact, approx }
    }

    #[inline]
    pub const fn is_win(&self) -> bool {
        self.exact as usize == SEQ_LEN
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact\n{} approximate", self.exact, self.approx)
    }
}

pub trait Scorer {
    fn name(&self) -> &'static str;
    fn score(&self, secret: &Sequence, guess: &Sequence) -> MatchResult;
}

/// Nested loops, written to be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

impl Scorer for Reference {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn score(&self, secret: &Sequence, guess: &Sequence) -> MatchResult {
        let mut spent = [false; SEQ_LEN];
        let mut result = MatchResult::default();

        for i in 0..SEQ_LEN {
            if secret[i] == guess[i] {
                spent[i] = true;
                result.exact += 1;
            }
        }

        let mut last = NO_COLOUR;
        for i in 0..SEQ_LEN {
            if spent[i] {
                continue;
            }
            for j in 0..SEQ_LEN {
                if j == i || spent[j] {
                    continue;
                }
                if guess[j] == secret[i] && guess[j] != last {
                    last = guess[j];
                    result.approx += 1;
                    break;
                }
            }
        }

        result
    }
}

bitflags! {
    /// A set of positions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Slots: u8 {
        const FIRST = 1 << 0;
        const SECOND = 1 << 1;
        const THIRD = 1 << 2;
    }
}

impl Slots {
    #[inline]
    fn at(i: usize) -> Self {
        Self::from_bits_truncate(1 << i)
    }
}

/// Set arithmetic over slot masks.
///
/// The guess is indexed once into a per-colour table of the slots holding
/// that colour; an approximate match is then a non-empty difference of
/// masks instead of an inner loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bitmask;

impl Scorer for Bitmask {
    fn name(&self) -> &'static str {
        "bitmask"
    }

    fn score(&self, secret: &Sequence, guess: &Sequence) -> MatchResult {
        let mut by_colour = [Slots::empty(); 256];
        let mut spent = Slots::empty();

        for (i, (s, g)) in secret.iter().zip(guess.iter()).enumerate() {
            by_colour[g as usize] |= Slots::at(i);
            if s == g {
                spent |= Slots::at(i);
            }
        }

        let exact = spent.bits().count_ones() as u8;
        let mut approx = 0;
        let mut last = NO_COLOUR;

        for (i, colour) in secret.iter().enumerate() {
            let here = Slots::at(i);
            if spent.contains(here) {
                continue;
            }
            let open = by_colour[colour as usize] - spent - here;
            if !open.is_empty() && colour != last {
                last = colour;
                approx += 1;
            }
        }

        MatchResult::new(exact, approx)
    }
}

/// Score with the [`Reference`] implementation.
pub fn score(secret: &Sequence, guess: &Sequence) -> MatchResult {
    Reference.score(secret, guess)
}

/// Run both implementations on one pair.
pub fn compare(secret: &Sequence, guess: &Sequence) -> (MatchResult, MatchResult) {
    let a = Reference.score(secret, guess);
    let b = Bitmask.score(secret, guess);
    trace!("{} vs {}: {:?} / {:?}", secret, guess, a, b);
    (a, b)
}

pub fn random_pair<R: Rng + ?Sized>(rng: &mut R) -> (Sequence, Sequence) {
    (Sequence::random(rng), Sequence::random(rng))
}

/// Outcome of running both scorers over random pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossCheck {
    pub trials: u32,
    pub agreed: u32,
    pub first_disagreement: Option<(Sequence, Sequence, MatchResult, MatchResult)>,
}

impl CrossCheck {
    pub fn passed(&self) -> bool {
        self.agreed == self.trials
    }
}

/// Compare both scorers on `trials` random pairs drawn from `seed`.
/// The same seed always draws the same pairs.
pub fn cross_check(seed: u64, trials: u32) -> CrossCheck {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = CrossCheck {
        trials,
        agreed: 0,
        first_disagreement: None,
    };

    for _ in 0..trials {
        let (secret, guess) = random_pair(&mut rng);
        let (a, b) = compare(&secret, &guess);
        if a == b {
            report.agreed += 1;
        } else if report.first_disagreement.is_none() {
            report.first_disagreement = Some((secret, guess, a, b));
        }
    }

    report
}
