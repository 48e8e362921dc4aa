use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};
use mastermind_hal::{Mode, PinIo, Wiring};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{BlinkTiming, Board};
use crate::capture::{CaptureConfig, InputCapture};
use crate::clock::Clock;
use crate::error::GameError;
use crate::scoring::{score, MatchResult};
use crate::sequence::Sequence;

/// Rounds before the game gives up.
pub const MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub wiring: Wiring,
    pub capture: CaptureConfig,
    pub blink: BlinkTiming,
    pub max_attempts: u32,
    /// Print the secret before the first round.
    pub debug: bool,
    /// Seed for the generated secret. `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wiring: Wiring::default(),
            capture: CaptureConfig::default(),
            blink: BlinkTiming::default(),
            max_attempts: MAX_ATTEMPTS,
            debug: false,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Setup,
    RoundActive,
    Won,
    Exhausted,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Exhausted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { rounds: u32 },
    Exhausted { rounds: u32 },
}

/// Everything that changes between rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub attempts: u32,
    pub found: bool,
    pub secret: Sequence,
    pub guess: Sequence,
}

pub struct Game<P, C, W> {
    board: Board<P, C>,
    config: GameConfig,
    capture: InputCapture,
    out: W,
    phase: Phase,
    state: GameState,
}

impl<P: PinIo, C: Clock, W: Write> Game<P, C, W> {
    /// `out` receives the player-facing transcript.
    pub fn new(board: Board<P, C>, config: GameConfig, out: W) -> Self {
        let board = board.with_timing(config.blink);
        let capture = InputCapture::new(config.capture, config.wiring);

        Self {
            board,
            config,
            capture,
            out,
            phase: Phase::Init,
            state: GameState::default(),
        }
    }

    /// Play one full game. With `secret == None` a random one is drawn.
    pub fn run(&mut self, secret: Option<Sequence>) -> Result<Outcome, GameError> {
        self.enter(Phase::Init);
        self.state = GameState {
            secret: secret.unwrap_or_else(|| self.draw_secret()),
            ..GameState::default()
        };

        self.enter(Phase::Setup);
        self.setup()?;

        info!("Game Start");
        if self.config.debug {
            writeln!(self.out, "Secret: {}", self.state.secret)?;
        }

        self.enter(Phase::RoundActive);
        let outcome = self.play_rounds()?;

        match outcome {
            Outcome::Won { rounds } => {
                self.enter(Phase::Won);
                self.celebrate(rounds)?;
            }
            Outcome::Exhausted { .. } => {
                self.enter(Phase::Exhausted);
                writeln!(self.out, "Sequence not found")?;
            }
        }

        self.out.flush()?;
        Ok(outcome)
    }

    fn enter(&mut self, phase: Phase) {
        debug!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn draw_secret(&self) -> Sequence {
        let seed = self.config.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        });
        debug!("secret drawn with seed {}", seed);
        Sequence::random(&mut StdRng::seed_from_u64(seed))
    }

    fn setup(&mut self) -> Result<(), GameError> {
        let Wiring {
            green_led,
            red_led,
            button,
        } = self.config.wiring;

        self.board.configure(green_led, Mode::Output)?;
        self.board.configure(red_led, Mode::Output)?;
        self.board.configure(button, Mode::Input)?;
        Ok(())
    }

    fn play_rounds(&mut self) -> Result<Outcome, GameError> {
        let Wiring {
            green_led, red_led, ..
        } = self.config.wiring;

        while self.state.attempts < self.config.max_attempts {
            self.state.attempts += 1;
            let round = self.state.attempts;

            self.board.blink(red_led, 3)?;
            writeln!(self.out, "Round {}\n", round)?;

            self.state.guess = self.capture.capture_guess(&mut self.board, &mut self.out)?;
            self.board.blink(red_led, 2)?;

            let result = score(&self.state.secret, &self.state.guess);
            debug!("round {}: {} scored {:?}", round, self.state.guess, result);

            if result.is_win() {
                self.state.found = true;
                return Ok(Outcome::Won { rounds: round });
            }

            // no feedback after the last round, the game is over anyway
            if round == self.config.max_attempts {
                break;
            }

            self.show_result(result, green_led, red_led)?;
        }

        Ok(Outcome::Exhausted {
            rounds: self.state.attempts,
        })
    }

    fn show_result(
        &mut self,
        result: MatchResult,
        green_led: u8,
        red_led: u8,
    ) -> Result<(), GameError> {
        writeln!(self.out, "{}\n", result)?;
        self.board.blink(green_led, result.exact)?;
        self.board.blink(red_led, 1)?;
        self.board.blink(green_led, result.approx)?;
        Ok(())
    }

    fn celebrate(&mut self, rounds: u32) -> Result<(), GameError> {
        let Wiring {
            green_led, red_led, ..
        } = self.config.wiring;

        writeln!(self.out, "Game completed in {} rounds", rounds)?;
        self.board.turn_on(red_led)?;
        self.board.blink(green_led, 3)?;
        self.board.turn_off(red_led)?;
        writeln!(self.out, "SUCCESS")?;
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board<P, C> {
        &self.board
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (Board<P, C>, W) {
        (self.board, self.out)
    }
}
