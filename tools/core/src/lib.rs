//! # MasterMind core
//!
//! Everything above the registers: the LED/button facade, the one-shot input
//! window, the two scoring implementations, and the round loop.
//!
//! ## The Game Loop
//!
//! ```ignore
//! use mastermind_core::{Board, Game, GameConfig, Outcome, SystemClock};
//! use mastermind_hal::{Gpio, RegisterBlock, GPIO_BASE};
//!
//! let config = GameConfig::default();
//! let gpio = Gpio::new(RegisterBlock::map(GPIO_BASE)?, &config.wiring.pins())?;
//! let board = Board::new(gpio, SystemClock::new());
//!
//! let mut game = Game::new(board, config, std::io::stdout());
//! match game.run(None)? {
//!     Outcome::Won { rounds } => { /* ... */ }
//!     Outcome::Exhausted { .. } => { /* ... */ }
//! }
//! ```
//!
//! A round is: capture three digits from the button, score them against the
//! secret, blink the result back. Five rounds without an exact match ends
//! the game.
//!
//! ## Feedback
//!
//! | Event                 | Red LED  | Green LED        |
//! |-----------------------|----------|------------------|
//! | round starts          | 3 blinks |                  |
//! | digit captured        | 1 blink  | digit blinks     |
//! | guess complete        | 2 blinks |                  |
//! | result                | 1 blink  | exact, then approx |
//! | won                   | held on  | 3 blinks         |

pub mod board;
pub mod capture;
pub mod clock;
pub mod error;
pub mod game;
pub mod scoring;
pub mod sequence;
pub mod timer;

pub use board::{BlinkTiming, Board};
pub use capture::{clamp_presses, CaptureConfig, InputCapture};
pub use clock::{Clock, SystemClock};
pub use error::{GameError, SequenceError};
pub use game::{Game, GameConfig, GameState, Outcome, Phase};
pub use scoring::{score, Bitmask, MatchResult, Reference, Scorer};
pub use sequence::{Sequence, COLORS, SEQ_LEN};
pub use timer::{OneShotTimer, TimerError, TimerState};
