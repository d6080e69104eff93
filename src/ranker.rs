//! Candidate ranking strategies.
//!
//! Two strategies pick the next guess out of the candidate pool:
//!
//! - [`FrequencyRanker`] scores words on a handful of frequent letters,
//!   penalising repeats. It looks at each word in isolation.
//! - [`ExhaustiveRanker`] plays every candidate against every other one as a
//!   hypothetical secret and keeps the guess that leaves the fewest
//!   candidates in total. This is quadratic in the pool size, so the outer
//!   loop runs in parallel.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::constraint::Constraints;
use crate::feedback::derive_feedback;
use crate::filter::count_matching;
use crate::word::{Letter, Word};

/// Picks one word out of a candidate pool.
pub trait Ranker: Send + Sync {
    /// Returns `None` only when `pool` is empty. `constraints` is the state
    /// `pool` was filtered with.
    fn choose<'p>(&self, pool: &'p [Word], constraints: &Constraints) -> Option<&'p Word>;
}

impl<R: Ranker + ?Sized> Ranker for &R {
    fn choose<'p>(&self, pool: &'p [Word], constraints: &Constraints) -> Option<&'p Word> {
        (**self).choose(pool, constraints)
    }
}

impl<R: Ranker + ?Sized> Ranker for Box<R> {
    fn choose<'p>(&self, pool: &'p [Word], constraints: &Constraints) -> Option<&'p Word> {
        (**self).choose(pool, constraints)
    }
}

/// Which ranker to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Frequency,
    Exhaustive,
}

impl Strategy {
    pub fn ranker(self) -> Box<dyn Ranker> {
        match self {
            Strategy::Frequency => Box::new(FrequencyRanker::default()),
            Strategy::Exhaustive => Box::new(ExhaustiveRanker),
        }
    }
}

/// Prefers words holding the priority letters, each repeat worth `decay`
/// times the previous occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRanker {
    letters: Vec<Letter>,
    decay: f64,
}

impl Default for FrequencyRanker {
    fn default() -> Self {
        let letters = ['T', 'R', 'E'].into_iter().filter_map(Letter::from_char).collect();
        Self { letters, decay: 0.66 }
    }
}

impl FrequencyRanker {
    pub fn new(letters: Vec<Letter>, decay: f64) -> Self {
        Self { letters, decay }
    }

    /// Mean per-letter score over the priority letters.
    pub fn score(&self, word: &Word) -> f64 {
        if self.letters.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .letters
            .iter()
            .map(|&letter| match word.count(letter) {
                0 => 0.0,
                n => self.decay.powi(n as i32 - 1),
            })
            .sum();
        total / self.letters.len() as f64
    }

    /// The pool sorted by descending score; equal scores keep pool order.
    pub fn ranked<'p>(&self, pool: &'p [Word]) -> Vec<(&'p Word, f64)> {
        let mut scored: Vec<(&Word, f64)> = pool.iter().map(|w| (w, self.score(w))).collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored
    }
}

impl Ranker for FrequencyRanker {
    fn choose<'p>(&self, pool: &'p [Word], _constraints: &Constraints) -> Option<&'p Word> {
        self.ranked(pool).first().map(|&(word, _)| word)
    }
}

/// Minimises the total number of candidates left over every possible
/// secret in the pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveRanker;

impl ExhaustiveRanker {
    /// Sum, over every other candidate taken as the secret, of the pool size
    /// left after guessing `guess`.
    pub fn simulated_cost(&self, guess: &Word, pool: &[Word], constraints: &Constraints) -> usize {
        pool.iter()
            .filter(|secret| *secret != guess)
            .map(|secret| {
                let feedback = derive_feedback(guess, secret);
                count_matching(pool, &constraints.layered(&feedback))
            })
            .sum()
    }
}

impl Ranker for ExhaustiveRanker {
    fn choose<'p>(&self, pool: &'p [Word], constraints: &Constraints) -> Option<&'p Word> {
        pool.par_iter()
            .enumerate()
            .map(|(i, guess)| (self.simulated_cost(guess, pool, constraints), i))
            .min()
            .map(|(_, i)| &pool[i])
    }
}

/// Best guess of `pool` under the default frequency heuristic.
pub fn rank_by_frequency(pool: &[Word]) -> Option<&Word> {
    FrequencyRanker::default().choose(pool, &Constraints::new())
}

/// Best guess of `pool` under exhaustive simulation, with no prior
/// constraints.
pub fn rank_by_exhaustive_simulation(pool: &[Word]) -> Option<&Word> {
    ExhaustiveRanker.choose(pool, &Constraints::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn score_decays_with_repeats() {
        let ranker = FrequencyRanker::default();
        assert_eq!(ranker.score(&word("SABOTER")), 1.0);
        assert_eq!(ranker.score(&word("ABANDONS")), 0.0);
        let expected = (1.0 + 1.0 + 0.66) / 3.0;
        assert!((ranker.score(&word("ACHETEUR")) - expected).abs() < 1e-12);
    }

    #[test]
    fn ranked_is_stable_on_ties() {
        let pool = vec![word("SCISSURE"), word("SCRUPULE"), word("SABOTEUR")];
        let ranked = FrequencyRanker::default().ranked(&pool);
        let order: Vec<String> = ranked.iter().map(|(w, _)| w.to_string()).collect();
        assert_eq!(order, vec!["SABOTEUR", "SCISSURE", "SCRUPULE"]);
    }

    #[test]
    fn custom_priority_letters() {
        let letters = vec![Letter::from_char('Z').unwrap()];
        let ranker = FrequencyRanker::new(letters, 0.5);
        let pool = vec![word("ZANZIBAR"), word("ZAKOUSKI"), word("ABORTIVE")];
        assert_eq!(ranker.score(&pool[0]), 0.5);
        assert_eq!(ranker.choose(&pool, &Constraints::new()), Some(&pool[1]));
    }
}
