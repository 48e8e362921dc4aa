mod common;

use std::time::Duration;

use common::{digit_script, fast_capture, guess_script, wiring, ManualClock, ScriptedPins};
use mastermind_core::{Board, InputCapture, Sequence};

fn board(script: Vec<bool>) -> Board<ScriptedPins, ManualClock> {
    Board::new(ScriptedPins::new(wiring().button, script), ManualClock::default())
}

#[test]
fn counts_presses_inside_the_window() {
    let config = fast_capture();
    let capture = InputCapture::new(config, wiring());
    let mut board = board(digit_script(&config, 2));

    assert_eq!(capture.capture_digit(&mut board).unwrap(), 2);
    assert_eq!(board.pins().remaining(), 0);
    assert_eq!(board.now(), config.window);
}

#[test]
fn too_many_presses_clamp_to_three() {
    let config = fast_capture();
    let capture = InputCapture::new(config, wiring());
    let mut board = board(digit_script(&config, 5));

    assert_eq!(capture.capture_digit(&mut board).unwrap(), 3);
}

#[test]
fn no_presses_is_zero() {
    let config = fast_capture();
    let capture = InputCapture::new(config, wiring());
    let mut board = board(digit_script(&config, 0));

    assert_eq!(capture.capture_digit(&mut board).unwrap(), 0);
}

#[test]
fn waits_for_the_opening_press() {
    let config = fast_capture();
    let capture = InputCapture::new(config, wiring());

    let mut script = vec![false; 40];
    script.extend(digit_script(&config, 1));
    let mut board = board(script);

    assert_eq!(capture.capture_digit(&mut board).unwrap(), 1);
    // idle spinning costs no clock time
    assert_eq!(board.now(), config.window);
}

#[test]
fn guess_is_echoed_on_leds_and_output() {
    let config = fast_capture();
    let w = wiring();
    let capture = InputCapture::new(config, w);
    let mut board = board(guess_script(&config, [3, 1, 2]));
    let mut out = Vec::new();

    let guess = capture.capture_guess(&mut board, &mut out).unwrap();

    assert_eq!(guess, Sequence::new([3, 1, 2]));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Input: 3\n\nInput: 1\n\nInput: 2\n\n"
    );
    assert_eq!(board.pins().blinks_on(w.red_led), 3);
    assert_eq!(board.pins().blinks_on(w.green_led), 6);
}

#[test]
fn blink_zero_is_only_the_settle_pause() {
    let w = wiring();
    let mut board = board(Vec::new());

    board.blink(w.green_led, 0).unwrap();
    assert!(board.pins().writes.is_empty());
    assert_eq!(board.now(), Duration::from_millis(500));

    board.blink(w.green_led, 2).unwrap();
    assert_eq!(board.pins().blinks_on(w.green_led), 2);
    assert_eq!(board.now(), Duration::from_millis(500 + 2 * 1400 + 500));
}
