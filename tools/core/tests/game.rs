mod common;

use common::{guess_script, test_config, ManualClock, ScriptedPins};
use mastermind_core::{Board, Game, GameConfig, Outcome, Phase, Sequence};
use mastermind_hal::{Level, Mode};

fn play(
    config: GameConfig,
    secret: Sequence,
    guesses: &[[usize; 3]],
) -> (Outcome, Phase, ScriptedPins, String) {
    let script: Vec<bool> = guesses
        .iter()
        .flat_map(|&g| guess_script(&config.capture, g))
        .collect();
    let pins = ScriptedPins::new(config.wiring.button, script);
    let board = Board::new(pins, ManualClock::default());

    let mut game = Game::new(board, config, Vec::new());
    let outcome = game.run(Some(secret)).unwrap();
    let phase = game.phase();

    let (board, out) = game.into_parts();
    let (pins, _) = board.into_parts();
    (outcome, phase, pins, String::from_utf8(out).unwrap())
}

#[test]
fn first_round_win() {
    let (outcome, phase, pins, out) = play(test_config(), Sequence::new([1, 2, 3]), &[[1, 2, 3]]);

    assert_eq!(outcome, Outcome::Won { rounds: 1 });
    assert_eq!(phase, Phase::Won);
    assert_eq!(
        out,
        "Round 1\n\nInput: 1\n\nInput: 2\n\nInput: 3\n\nGame completed in 1 rounds\nSUCCESS\n"
    );
    assert_eq!(pins.remaining(), 0);
}

#[test]
fn pins_are_configured_before_play() {
    let config = test_config();
    let w = config.wiring;
    let (_, _, pins, _) = play(config, Sequence::new([1, 1, 1]), &[[1, 1, 1]]);

    assert_eq!(
        pins.modes,
        vec![
            (w.green_led, Mode::Output),
            (w.red_led, Mode::Output),
            (w.button, Mode::Input),
        ]
    );
}

#[test]
fn win_holds_red_while_green_blinks() {
    let config = test_config();
    let w = config.wiring;
    let (_, _, pins, _) = play(config, Sequence::new([2, 2, 2]), &[[2, 2, 2]]);

    let tail = &pins.writes[pins.writes.len() - 8..];
    assert_eq!(tail[0], (w.red_led, Level::High));
    assert!(tail[1..7].iter().all(|&(pin, _)| pin == w.green_led));
    assert_eq!(tail[7], (w.red_led, Level::Low));
}

#[test]
fn five_misses_exhaust_the_game() {
    let guesses = [[3, 3, 3]; 5];
    let (outcome, phase, pins, out) = play(test_config(), Sequence::new([1, 2, 3]), &guesses);

    assert_eq!(outcome, Outcome::Exhausted { rounds: 5 });
    assert_eq!(phase, Phase::Exhausted);
    assert_eq!(out.matches("Round ").count(), 5);
    // the last round gets no feedback
    assert_eq!(out.matches("1 exact\n0 approximate\n\n").count(), 4);
    assert!(out.ends_with("Input: 3\n\nSequence not found\n"));
    assert!(!out.contains("SUCCESS"));
    assert_eq!(pins.remaining(), 0);
}

#[test]
fn feedback_between_rounds() {
    let (outcome, _, _, out) = play(
        test_config(),
        Sequence::new([1, 1, 2]),
        &[[2, 1, 1], [1, 1, 2]],
    );

    assert_eq!(outcome, Outcome::Won { rounds: 2 });
    assert!(out.contains("Round 1\n\n"));
    assert!(out.contains("1 exact\n2 approximate\n\n"));
    assert!(out.contains("Round 2\n\n"));
    assert!(out.ends_with("Game completed in 2 rounds\nSUCCESS\n"));
}

#[test]
fn round_feedback_blinks_in_order() {
    let config = test_config();
    let (red, green) = (config.wiring.red_led, config.wiring.green_led);
    let (_, _, pins, _) = play(config, Sequence::new([1, 1, 2]), &[[2, 1, 1], [1, 1, 2]]);

    let lit: Vec<u8> = pins
        .writes
        .iter()
        .filter(|&&(_, level)| level == Level::High)
        .map(|&(pin, _)| pin)
        .collect();

    let round_one = [
        red, red, red, // round marker
        red, green, green, // digit 2
        red, green, // digit 1
        red, green, // digit 1
        red, red, // guess complete
        green, // 1 exact
        red, // separator
        green, green, // 2 approximate
    ];
    assert_eq!(lit[..round_one.len()], round_one);
    // next round starts with its marker
    assert_eq!(lit[round_one.len()..round_one.len() + 3], [red, red, red]);
}

#[test]
fn debug_prints_the_secret() {
    let config = GameConfig {
        debug: true,
        ..test_config()
    };
    let (_, _, _, out) = play(config, Sequence::new([3, 2, 1]), &[[3, 2, 1]]);

    assert!(out.starts_with("Secret: 3 2 1\n"));
}

#[test]
fn seeded_secret_is_reproducible() {
    let draw = |seed| {
        let config = GameConfig {
            seed: Some(seed),
            debug: true,
            max_attempts: 1,
            ..test_config()
        };
        let script = guess_script(&config.capture, [0, 0, 0]);
        let pins = ScriptedPins::new(config.wiring.button, script);
        let mut game = Game::new(Board::new(pins, ManualClock::default()), config, Vec::new());

        let outcome = game.run(None).unwrap();
        let secret = game.state().secret;
        assert!(secret.iter().all(|d| (1..=3).contains(&d)));
        assert_eq!(outcome, Outcome::Exhausted { rounds: 1 });
        secret
    };

    assert_eq!(draw(1701), draw(1701));
}
