//! Error types shared by every stage of the solver.

use std::fmt;
use thiserror::Error;

use crate::word::{Letter, Word};

/// Why a filtering pass produced no candidates at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The dictionary holds no word of the requested length.
    NoWordOfLength,
    /// Words of that length exist, but none carry the known letters.
    NoKnownMatch,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::NoWordOfLength => write!(f, "no word has this length"),
            EmptyReason::NoKnownMatch => write!(f, "no word matches the known letters"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("'{0}' is not a valid word")]
    InvalidWord(String),

    #[error("position {position} of letter '{letter}' is outside a word of length {length}")]
    InvalidPosition {
        letter: Letter,
        position: usize,
        length: usize,
    },

    #[error("dictionary is unsatisfiable for length {length}: {reason}")]
    EmptyResult { length: usize, reason: EmptyReason },

    #[error("no candidate left for secret {secret} at round {round}")]
    Unsolvable { secret: Word, round: usize },
}

pub type Result<T> = std::result::Result<T, SolverError>;
