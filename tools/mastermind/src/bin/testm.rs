use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use mastermind::{report, setup_logging, usage_status};
use mastermind_core::scoring::{compare, random_pair};
use mastermind_core::{Bitmask, Reference, Scorer, Sequence};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "testm")]
#[command(version, about = "Cross-check the two scoring implementations", long_about = None)]
struct Cli {
    /// Print every random pair
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level
    #[arg(short, long)]
    debug: bool,

    /// Seed for the random pairs
    #[arg(short, long, default_value_t = 1701)]
    seed: u64,

    /// Number of random pairs
    #[arg(short = 'n', long, default_value_t = 10)]
    iterations: u32,

    /// Score this pair (secret, guess) instead of random ones
    #[arg(num_args = 2, value_names = ["SEQ1", "SEQ2"])]
    pair: Option<Vec<u32>>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_status(&e));
        }
    };
    setup_logging(cli.debug);

    match &cli.pair {
        Some(codes) => score_pair(codes[0], codes[1]),
        None => random_pairs(&cli),
    }
}

fn score_pair(m: u32, n: u32) -> ExitCode {
    eprintln!("Testing matches function with sequences {} and {}", m, n);
    let (secret, guess) = (Sequence::decode(m), Sequence::decode(n));

    let scorers: [&dyn Scorer; 2] = [&Reference, &Bitmask];
    let mut results = Vec::with_capacity(scorers.len());

    for scorer in scorers {
        let start = Instant::now();
        let result = scorer.score(&secret, &guess);
        let elapsed = start.elapsed();

        println!("{} ({} in {:?})", report(&secret, &guess, &result), scorer.name(), elapsed);
        results.push(result);
    }

    if results[0] == results[1] {
        println!("__ result OK");
        ExitCode::SUCCESS
    } else {
        println!("** result WRONG");
        ExitCode::FAILURE
    }
}

fn random_pairs(cli: &Cli) -> ExitCode {
    eprintln!(
        "Running tests of matches function with {} pairs of random input sequences ...",
        cli.iterations
    );

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut ok = 0;

    for _ in 0..cli.iterations {
        let (secret, guess) = random_pair(&mut rng);
        if cli.verbose {
            eprintln!("Random sequences are:\n{}\n{}", secret, guess);
        }

        let (a, b) = compare(&secret, &guess);
        println!("Matches ({}): {} {}", Reference.name(), a.exact, a.approx);
        println!("Matches ({}):   {} {}", Bitmask.name(), b.exact, b.approx);

        if a == b {
            println!("__ result OK");
            ok += 1;
        } else {
            println!("** result WRONG");
        }
    }

    eprintln!("{} out of {} tests OK", ok, cli.iterations);
    if ok == cli.iterations {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
