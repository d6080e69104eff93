//! Constraint model.
//!
//! A round of feedback is a list of [`Constraint`]s plus a set of forbidden
//! letters. Repeated letters are disambiguated through a [`ClaimLedger`],
//! which records which positions of a candidate have already been attributed
//! to a given letter.

use std::fmt;

use crate::error::{Result, SolverError};
use crate::feedback::Feedback;
use crate::word::{Letter, LetterSet, Position, Word, ALPHABET_SIZE};

/// A positional fact about the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The solution has exactly `letter` at `position`.
    Known { letter: Letter, position: Position },
    /// The solution contains `letter` at an unclaimed position other than
    /// `position`.
    Misplaced { letter: Letter, position: Position },
}

impl Constraint {
    pub fn known(letter: Letter, position: Position) -> Self {
        Constraint::Known { letter, position }
    }

    pub fn misplaced(letter: Letter, position: Position) -> Self {
        Constraint::Misplaced { letter, position }
    }

    pub fn letter(self) -> Letter {
        match self {
            Constraint::Known { letter, .. } | Constraint::Misplaced { letter, .. } => letter,
        }
    }

    pub fn position(self) -> Position {
        match self {
            Constraint::Known { position, .. } | Constraint::Misplaced { position, .. } => position,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Constraint::Known { .. })
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Known { letter, position } => write!(f, "{letter}@{position}"),
            Constraint::Misplaced { letter, position } => write!(f, "{letter}!{position}"),
        }
    }
}

/// The constraint set a filtering pass works from.
///
/// `placements` holds one round's positional picture; `forbidden` is kept
/// across rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    placements: Vec<Constraint>,
    forbidden: LetterSet,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// The opening state of a session: only the first letter is revealed.
    pub fn first_letter(letter: Letter) -> Self {
        Self {
            placements: vec![Constraint::known(letter, Position::from_index(0))],
            forbidden: LetterSet::new(),
        }
    }

    pub fn from_parts(placements: Vec<Constraint>, forbidden: LetterSet) -> Self {
        Self {
            placements,
            forbidden,
        }
    }

    pub fn with(mut self, constraint: Constraint) -> Self {
        self.placements.push(constraint);
        self
    }

    pub fn with_forbidden(mut self, letters: LetterSet) -> Self {
        self.forbidden = self.forbidden.union(letters);
        self
    }

    pub fn placements(&self) -> &[Constraint] {
        &self.placements
    }

    pub fn known(&self) -> impl Iterator<Item = (Letter, Position)> + '_ {
        self.placements.iter().filter_map(|c| match *c {
            Constraint::Known { letter, position } => Some((letter, position)),
            Constraint::Misplaced { .. } => None,
        })
    }

    pub fn misplaced(&self) -> impl Iterator<Item = (Letter, Position)> + '_ {
        self.placements.iter().filter_map(|c| match *c {
            Constraint::Misplaced { letter, position } => Some((letter, position)),
            Constraint::Known { .. } => None,
        })
    }

    pub fn forbidden(&self) -> LetterSet {
        self.forbidden
    }

    /// Folds one round of feedback in: placements are replaced, forbidden
    /// letters accumulate.
    pub fn apply(&mut self, feedback: &Feedback) {
        self.placements = feedback.constraints().to_vec();
        self.forbidden = self.forbidden.union(feedback.forbidden());
    }

    /// Returns the state after folding `feedback`, leaving `self` untouched.
    pub fn layered(&self, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        next.apply(feedback);
        next
    }

    /// Checks every position against `length`.
    pub fn validate(&self, length: usize) -> Result<()> {
        for constraint in &self.placements {
            let position = constraint.position().get();
            if position > length {
                return Err(SolverError::InvalidPosition {
                    letter: constraint.letter(),
                    position,
                    length,
                });
            }
        }
        Ok(())
    }
}

/// Positions already attributed to each letter, as zero-based bit masks.
///
/// The ledger is `Copy`: every candidate check works on its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimLedger([u64; ALPHABET_SIZE]);

impl Default for ClaimLedger {
    fn default() -> Self {
        Self([0; ALPHABET_SIZE])
    }
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, letter: Letter, index: usize) {
        self.0[letter.index()] |= 1u64 << index;
    }

    pub fn is_claimed(&self, letter: Letter, index: usize) -> bool {
        self.0[letter.index()] & (1u64 << index) != 0
    }

    /// Every claimed position, whatever the letter.
    pub fn claimed_mask(&self) -> u64 {
        self.0.iter().fold(0, |acc, mask| acc | mask)
    }
}

/// Finds where a misplaced `letter` could sit in `word`.
///
/// Returns `None` when `word` has `letter` at `excluded` or when every
/// occurrence of `letter` is already claimed. Otherwise returns the zero-based
/// index of the last unclaimed occurrence.
pub fn resolve_position(
    word: &Word,
    ledger: &ClaimLedger,
    letter: Letter,
    excluded: Position,
) -> Option<usize> {
    let letters = word.letters();
    if letters.get(excluded.index()) == Some(&letter) {
        return None;
    }
    letters
        .iter()
        .enumerate()
        .filter(|&(i, &l)| l == letter && !ledger.is_claimed(letter, i))
        .map(|(i, _)| i)
        .last()
}
