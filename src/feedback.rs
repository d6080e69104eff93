//! Feedback calculation for guesses.
//!
//! This module turns a guess scored against a secret into the constraints the
//! game reveals: letters at the right place, letters present elsewhere, and
//! letters with no further occurrence.

use std::fmt;

use crate::constraint::Constraint;
use crate::word::{Letter, LetterSet, Position, Word};

/// What the game shows for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Correct letter in correct position (red square)
    Correct,
    /// Correct letter in wrong position (yellow circle)
    Present,
    /// No unclaimed occurrence of this letter (blue)
    Absent,
}

impl Mark {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Mark::Correct => '🟥',
            Mark::Present => '🟡',
            Mark::Absent => '🟦',
        }
    }
}

/// The outcome of scoring one guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    constraints: Vec<Constraint>,
    forbidden: LetterSet,
    length: usize,
}

impl Feedback {
    /// Known and misplaced constraints, in guess position order within each
    /// kind (known first).
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn known(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(|c| c.is_known())
    }

    pub fn misplaced(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(|c| !c.is_known())
    }

    pub fn forbidden(&self) -> LetterSet {
        self.forbidden
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Check if every position was guessed right
    pub fn is_win(&self) -> bool {
        self.known().count() == self.length
    }

    /// Per-position marks, as the game board shows them.
    pub fn marks(&self) -> Vec<Mark> {
        let mut marks = vec![Mark::Absent; self.length];
        for constraint in &self.constraints {
            marks[constraint.position().index()] = match constraint {
                Constraint::Known { .. } => Mark::Correct,
                Constraint::Misplaced { .. } => Mark::Present,
            };
        }
        marks
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.marks().into_iter().map(Mark::to_char).collect();
        write!(f, "{}", rendered)
    }
}

/// Score `guess` against `secret`.
///
/// Repeated letters are handled by consuming secret occurrences: an exact
/// match consumes its position, and each misplaced signal consumes the first
/// remaining occurrence in the secret. A letter is therefore never reported
/// misplaced more often than the secret still holds it.
pub fn derive_feedback(guess: &Word, secret: &Word) -> Feedback {
    debug_assert_eq!(guess.len(), secret.len());

    let guess_letters = guess.letters();
    let mut guess_left: Vec<Option<Letter>> = guess_letters.iter().copied().map(Some).collect();
    let mut secret_left: Vec<Option<Letter>> = secret.letters().iter().copied().map(Some).collect();
    let mut constraints = Vec::new();

    for (i, (g, s)) in guess_letters.iter().zip(secret.letters()).enumerate() {
        if g == s {
            constraints.push(Constraint::known(*g, Position::from_index(i)));
            guess_left[i] = None;
            secret_left[i] = None;
        }
    }

    for i in 0..guess_left.len() {
        let Some(letter) = guess_left[i] else {
            continue;
        };
        if let Some(j) = secret_left.iter().position(|&s| s == Some(letter)) {
            constraints.push(Constraint::misplaced(letter, Position::from_index(i)));
            guess_left[i] = None;
            secret_left[j] = None;
        }
    }

    Feedback {
        constraints,
        forbidden: guess_left.into_iter().flatten().collect(),
        length: guess.len(),
    }
}
