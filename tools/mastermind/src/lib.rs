//! Shared plumbing for the `master-mind` and `testm` binaries.

use mastermind_core::{score, MatchResult, Sequence};
use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the stderr logger. `log` records from the library crates come
/// through the same subscriber.
pub fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

pub fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

/// Exit status for a failed parse: 0 for `--help`/`--version`, 1 for a
/// usage error.
pub fn usage_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// `master-mind -u` output: the match counts and nothing else.
pub fn unit_test(secret: &Sequence, guess: &Sequence) -> String {
    score(secret, guess).to_string()
}

/// Result block printed by `testm`.
pub fn report(secret: &Sequence, guess: &Sequence, result: &MatchResult) -> String {
    format!("Secret: {}\nGuess:  {}\n{}", secret, guess, result)
}
