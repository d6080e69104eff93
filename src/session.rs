//! Session driver.
//!
//! A [`Session`] plays one puzzle to the end: each round filters the pool,
//! asks a [`Ranker`] for a guess, scores that guess against the secret and
//! folds the feedback into the running constraints.

use log::{debug, info};
use rayon::prelude::*;

use crate::constraint::Constraints;
use crate::error::{Result, SolverError};
use crate::feedback::{derive_feedback, Feedback};
use crate::filter::filter_candidates;
use crate::ranker::Ranker;
use crate::word::Word;

/// One guess and what the game answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Guessing,
    Solved,
}

/// A single game against a known secret.
///
/// The secret stays private to the session; rankers only ever see the pool
/// and the constraints.
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    constraints: Constraints,
    pool: Vec<Word>,
    attempts: Vec<Attempt>,
    state: SessionState,
}

impl Session {
    /// Starts a game with the secret's first letter revealed.
    pub fn new(secret: Word, dictionary: &[Word]) -> Self {
        let constraints = match secret.first() {
            Some(letter) => Constraints::first_letter(letter),
            None => Constraints::new(),
        };
        Self {
            secret,
            constraints,
            pool: dictionary.to_vec(),
            attempts: Vec::new(),
            state: SessionState::Guessing,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn round(&self) -> usize {
        self.attempts.len()
    }

    /// Plays one round. Does nothing once the secret has been found.
    pub fn play_round<R: Ranker + ?Sized>(&mut self, ranker: &R) -> Result<SessionState> {
        if self.state == SessionState::Solved {
            return Ok(self.state);
        }

        self.pool = filter_candidates(&self.pool, self.secret.len(), &self.constraints)?;
        let guess = ranker
            .choose(&self.pool, &self.constraints)
            .cloned()
            .ok_or_else(|| SolverError::Unsolvable {
                secret: self.secret.clone(),
                round: self.round() + 1,
            })?;

        let feedback = derive_feedback(&guess, &self.secret);
        debug!(
            "round {}: guessed {} out of {} candidates -> {}",
            self.round() + 1,
            guess,
            self.pool.len(),
            feedback
        );
        self.constraints.apply(&feedback);

        if guess == self.secret {
            self.state = SessionState::Solved;
        }
        self.attempts.push(Attempt { guess, feedback });
        Ok(self.state)
    }

    /// Plays until solved and returns every attempt, the secret last.
    pub fn solve<R: Ranker + ?Sized>(mut self, ranker: &R) -> Result<Vec<Attempt>> {
        while self.play_round(ranker)? == SessionState::Guessing {}
        Ok(self.attempts)
    }
}

/// Plays `secret` against `pool` and returns the attempts made.
pub fn run_session<R: Ranker + ?Sized>(secret: &Word, pool: &[Word], ranker: &R) -> Result<Vec<Attempt>> {
    Session::new(secret.clone(), pool).solve(ranker)
}

/// Attempt count for each secret, in input order.
pub fn run_batch<R: Ranker + ?Sized>(secrets: &[Word], pool: &[Word], ranker: &R) -> Result<Vec<usize>> {
    let counts = secrets
        .par_iter()
        .map(|secret| run_session(secret, pool, ranker).map(|attempts| attempts.len()))
        .collect::<Result<Vec<usize>>>()?;

    if !counts.is_empty() {
        let total: usize = counts.iter().sum();
        info!(
            "solved {} secrets, {:.3} attempts on average",
            counts.len(),
            total as f64 / counts.len() as f64
        );
    }
    Ok(counts)
}

/// `(attempt count, number of secrets)` pairs, fewest attempts first.
pub fn guess_distribution<R: Ranker + ?Sized>(
    secrets: &[Word],
    pool: &[Word],
    ranker: &R,
) -> Result<Vec<(usize, usize)>> {
    let counts = run_batch(secrets, pool, ranker)?;

    let max_attempts = counts.iter().copied().max().unwrap_or(0);
    let mut distribution = vec![0usize; max_attempts + 1];
    for count in counts {
        distribution[count] += 1;
    }

    Ok(distribution
        .into_iter()
        .enumerate()
        .filter(|(_, count)| *count > 0)
        .collect())
}
