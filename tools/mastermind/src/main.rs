use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use mastermind::{on_off, setup_logging, unit_test, usage_status};
use mastermind_core::{Board, CaptureConfig, Game, GameConfig, Outcome, Sequence, SystemClock};
use mastermind_hal::{is_privileged, Gpio, RegisterBlock, GPIO_BASE};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "master-mind")]
#[command(version, about = "MasterMind on a Raspberry Pi, played with one button and two LEDs", long_about = None)]
struct Cli {
    /// Print the settings and log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Show the secret before the first round
    #[arg(short, long)]
    debug: bool,

    /// Score SEQ1 (secret) against SEQ2 (guess) and exit
    #[arg(short, long, num_args = 2, value_names = ["SEQ1", "SEQ2"])]
    unit_test: Option<Vec<u32>>,

    /// Play against this secret instead of a random one, e.g. 123
    #[arg(short, long)]
    secret: Option<u32>,

    /// Seconds the input window stays open after the first press
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    window: u64,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(ExitCode::from(usage_status(&e)));
        }
    };

    setup_logging(cli.verbose);

    if cli.verbose {
        println!("Settings for running the program");
        println!("Verbose is {}", on_off(cli.verbose));
        println!("Debug is {}", on_off(cli.debug));
        println!("Unittest is {}", on_off(cli.unit_test.is_some()));
        if let Some(secret) = cli.secret {
            println!("Secret sequence set to {}", secret);
        }
    }

    if let Some(codes) = &cli.unit_test {
        let (m, n) = (codes[0], codes[1]);
        if cli.verbose {
            println!("Testing matches function with sequences {} and {}", m, n);
        }

        let (secret, guess) = (Sequence::decode(m), Sequence::decode(n));
        for (code, seq) in [(m, &secret), (n, &guess)] {
            if let Err(e) = Sequence::from_code(code) {
                warn!("{}: {}, scoring {} anyway", code, e, seq);
            }
        }

        println!("{}", unit_test(&secret, &guess));
        return Ok(ExitCode::SUCCESS);
    }

    let secret = cli
        .secret
        .map(Sequence::from_code)
        .transpose()
        .context("invalid secret sequence")?;
    if let Some(secret) = secret {
        debug!("running with supplied secret {}", secret);
    }

    if !is_privileged() {
        eprintln!("setup: Must be root. (Did you forget sudo?)");
    }

    let config = GameConfig {
        debug: cli.debug,
        capture: CaptureConfig {
            window: Duration::from_secs(cli.window),
            ..CaptureConfig::default()
        },
        ..GameConfig::default()
    };

    let regs = RegisterBlock::map(GPIO_BASE)
        .with_context(|| format!("setup: failed to map GPIO registers at {:#x}", GPIO_BASE))?;
    let gpio = Gpio::new(regs, &config.wiring.pins()).context("setup: bad pin wiring")?;
    let board = Board::new(gpio, SystemClock::new());

    let mut game = Game::new(board, config, io::stdout().lock());
    match game.run(secret)? {
        Outcome::Won { rounds } => info!("won after {} rounds", rounds),
        Outcome::Exhausted { rounds } => info!("gave up after {} rounds", rounds),
    }

    Ok(ExitCode::SUCCESS)
}
