//! # Sutom Solver
//!
//! A solver for SUTOM-style word puzzles: the first letter of the secret is
//! revealed, and each guess is answered with letters at the right place,
//! letters present elsewhere, and letters absent.
//!
//! The solver keeps the pool of dictionary words consistent with every answer
//! so far and picks the next guess with one of two strategies, a letter
//! frequency heuristic or an exhaustive simulation of every possible answer.
//! The library performs no I/O: dictionaries come in as words already loaded.

pub mod constraint;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod ranker;
pub mod session;
pub mod word;

pub use constraint::{resolve_position, ClaimLedger, Constraint, Constraints};
pub use error::{EmptyReason, Result, SolverError};
pub use feedback::{derive_feedback, Feedback, Mark};
pub use filter::{count_matching, filter_candidates, is_consistent};
pub use ranker::{
    rank_by_exhaustive_simulation, rank_by_frequency, ExhaustiveRanker, FrequencyRanker, Ranker, Strategy,
};
pub use session::{guess_distribution, run_batch, run_session, Attempt, Session, SessionState};
pub use word::{Letter, LetterSet, Position, Word, ALPHABET_SIZE, MAX_WORD_LENGTH};

/// Parse a newline-separated word list, skipping blank or invalid lines
pub fn load_dictionary_from_str(data: &str) -> Vec<Word> {
    data.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| Word::parse(line).ok())
        .collect()
}
