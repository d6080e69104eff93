//! Sutom Solver CLI
//!
//! Thin driver around the solver library: loads a dictionary file, runs the
//! requested command and prints the results.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use sutom_solver::{
    filter_candidates, guess_distribution, load_dictionary_from_str, run_batch, run_session, Constraint,
    Constraints, Letter, LetterSet, Position, Ranker, Strategy, Word,
};

/// Sutom Solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dictionary")]
    dictionary: PathBuf,

    /// How the next guess is picked
    #[arg(short = 's', long = "strategy", value_enum, default_value_t = StrategyArg::Frequency)]
    strategy: StrategyArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Frequency,
    Exhaustive,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Frequency => Strategy::Frequency,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game against a secret word
    Solve { secret: String },
    /// Print the number of attempts needed for each secret
    Batch {
        #[arg(required = true)]
        secrets: Vec<String>,
    },
    /// List the candidates matching explicit constraints and recommend a guess
    Suggest {
        #[arg(short, long)]
        length: usize,
        /// Letter at an exact position, e.g. Z1
        #[arg(short, long, value_parser = parse_placement)]
        known: Vec<(Letter, Position)>,
        /// Letter present but not at this position, e.g. I5
        #[arg(short, long, value_parser = parse_placement)]
        misplaced: Vec<(Letter, Position)>,
        /// Letters with no further occurrence, e.g. ABO
        #[arg(short, long, default_value = "")]
        forbidden: String,
    },
    /// Play every dictionary word of a length and show the attempt distribution
    Bench {
        #[arg(short, long)]
        length: usize,
    },
}

fn parse_placement(s: &str) -> Result<(Letter, Position), String> {
    let mut chars = s.trim().chars();
    let letter = chars
        .next()
        .and_then(Letter::from_char)
        .ok_or_else(|| format!("'{s}' must start with a letter"))?;
    let position = chars
        .as_str()
        .parse::<usize>()
        .ok()
        .and_then(Position::new)
        .ok_or_else(|| format!("'{s}' must end with a position starting at 1"))?;
    Ok((letter, position))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(&cli.dictionary)?;
    let dictionary = load_dictionary_from_str(&data);
    info!("loaded {} words from {}", dictionary.len(), cli.dictionary.display());

    let ranker = Strategy::from(cli.strategy).ranker();

    match cli.command {
        Command::Solve { secret } => {
            let secret = Word::parse(&secret)?;
            println!("Solving for: {}", secret);
            println!();

            let attempts = run_session(&secret, &dictionary, &ranker)?;
            for (i, attempt) in attempts.iter().enumerate() {
                println!("Guess {}: {} → {}", i + 1, attempt.guess, attempt.feedback);
            }
            println!();
            println!("Solved in {} guesses.", attempts.len());
        }
        Command::Batch { secrets } => {
            let secrets = secrets
                .iter()
                .map(|s| Word::parse(s))
                .collect::<sutom_solver::Result<Vec<_>>>()?;
            let counts = run_batch(&secrets, &dictionary, &ranker)?;
            for (secret, count) in secrets.iter().zip(&counts) {
                println!("{:>12} {}", secret.to_string(), count);
            }
        }
        Command::Suggest {
            length,
            known,
            misplaced,
            forbidden,
        } => {
            let placements = known
                .into_iter()
                .map(|(l, p)| Constraint::known(l, p))
                .chain(misplaced.into_iter().map(|(l, p)| Constraint::misplaced(l, p)))
                .collect();
            let constraints = Constraints::from_parts(placements, LetterSet::from_letters(&forbidden));

            let candidates = filter_candidates(&dictionary, length, &constraints)?;
            println!("Remaining possibilities: {}", candidates.len());
            for word in candidates.iter().take(20) {
                println!("  {}", word);
            }
            if candidates.len() > 20 {
                println!("  ...and {} more", candidates.len() - 20);
            }
            match ranker.choose(&candidates, &constraints) {
                Some(best) => println!("Best guess: {}", best),
                None => println!("No possible words remaining."),
            }
        }
        Command::Bench { length } => {
            let secrets: Vec<Word> = dictionary.iter().filter(|w| w.len() == length).cloned().collect();
            println!("Running benchmark on {} words...", secrets.len());

            let start = Instant::now();
            let distribution = guess_distribution(&secrets, &dictionary, &ranker)?;
            let elapsed = start.elapsed();

            let total: usize = distribution.iter().map(|(_, c)| c).sum();
            let total_guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();

            println!("Guess distribution:");
            for (guesses, count) in &distribution {
                let pct = *count as f64 / total as f64 * 100.0;
                let bar = "█".repeat((*count * 40 / total).max(1));
                println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
            }
            if total > 0 {
                println!("Average guesses: {:.3}", total_guesses as f64 / total as f64);
            }
            println!("Time elapsed: {:.2?}", elapsed);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
