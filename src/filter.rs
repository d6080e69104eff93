//! Candidate filtering.
//!
//! Known constraints are checked first and seed a shared [`ClaimLedger`].
//! Each surviving word then resolves the misplaced constraints against its
//! own copy of that ledger, and finally must not show a forbidden letter at
//! any position the ledger left unclaimed.

use log::trace;

use crate::constraint::{resolve_position, ClaimLedger, Constraints};
use crate::error::{EmptyReason, Result, SolverError};
use crate::word::Word;

/// Filters `pool` down to the words of `length` consistent with
/// `constraints`.
///
/// Fails when no word has `length`, when no word of that length carries the
/// known letters, or when a constraint points outside the word. An empty
/// result after misplaced and forbidden checks is not an error.
pub fn filter_candidates(pool: &[Word], length: usize, constraints: &Constraints) -> Result<Vec<Word>> {
    let sized: Vec<&Word> = pool.iter().filter(|w| w.len() == length).collect();
    if sized.is_empty() {
        return Err(SolverError::EmptyResult {
            length,
            reason: EmptyReason::NoWordOfLength,
        });
    }
    constraints.validate(length)?;

    let known: Vec<&Word> = sized.into_iter().filter(|w| matches_known(w, constraints)).collect();
    if known.is_empty() {
        return Err(SolverError::EmptyResult {
            length,
            reason: EmptyReason::NoKnownMatch,
        });
    }

    let ledger = known_ledger(constraints);
    let filtered: Vec<Word> = known
        .into_iter()
        .filter(|w| matches_remaining(w, ledger, constraints))
        .cloned()
        .collect();

    trace!(
        "filtered {} words of length {} down to {} with {} constraints, forbidden {:?}",
        pool.len(),
        length,
        filtered.len(),
        constraints.placements().len(),
        constraints.forbidden()
    );
    Ok(filtered)
}

/// Counts the words of `pool` consistent with `constraints`.
///
/// Unlike [`filter_candidates`] this never fails: every position in
/// `constraints` must already be valid for the words of `pool`, and an empty
/// match simply counts as zero.
pub fn count_matching(pool: &[Word], constraints: &Constraints) -> usize {
    let ledger = known_ledger(constraints);
    pool.iter()
        .filter(|w| matches_known(w, constraints) && matches_remaining(w, ledger, constraints))
        .count()
}

/// Returns whether `word` satisfies every constraint in `constraints`.
pub fn is_consistent(word: &Word, constraints: &Constraints) -> bool {
    matches_known(word, constraints) && matches_remaining(word, known_ledger(constraints), constraints)
}

fn known_ledger(constraints: &Constraints) -> ClaimLedger {
    let mut ledger = ClaimLedger::new();
    for (letter, position) in constraints.known() {
        ledger.claim(letter, position.index());
    }
    ledger
}

fn matches_known(word: &Word, constraints: &Constraints) -> bool {
    constraints
        .known()
        .all(|(letter, position)| word.letter_at(position) == Some(letter))
}

// `ledger` is taken by value: the claims made here stay with this word.
fn matches_remaining(word: &Word, mut ledger: ClaimLedger, constraints: &Constraints) -> bool {
    for (letter, position) in constraints.misplaced() {
        match resolve_position(word, &ledger, letter, position) {
            Some(index) => ledger.claim(letter, index),
            None => return false,
        }
    }

    let forbidden = constraints.forbidden();
    if forbidden.is_empty() {
        return true;
    }
    let claimed = ledger.claimed_mask();
    !word
        .letters()
        .iter()
        .enumerate()
        .any(|(i, &letter)| claimed & (1u64 << i) == 0 && forbidden.contains(letter))
}
