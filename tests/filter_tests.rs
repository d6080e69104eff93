mod common;

use common::{dictionary, letter, pos, to_strings, word};
use sutom_solver::{
    derive_feedback, filter_candidates, is_consistent, Constraint, Constraints, EmptyReason, LetterSet,
    SolverError,
};

fn za() -> Constraints {
    Constraints::new()
        .with(Constraint::known(letter('Z'), pos(1)))
        .with(Constraint::known(letter('A'), pos(2)))
}

#[test]
fn test_ten_letter_words_starting_with_z() {
    let constraints = Constraints::first_letter(letter('Z'));
    let pool = filter_candidates(&dictionary(), 10, &constraints).unwrap();
    assert_eq!(
        to_strings(&pool),
        vec![
            "ZEZAIEMENT",
            "ZIDOVUDINE",
            "ZIGOUILLER",
            "ZIGZAGUANT",
            "ZIMBABWEEN",
            "ZOANTHAIRE",
            "ZOOLOGISTE",
            "ZOOTECHNIE",
            "ZOZOTEMENT",
            "ZURICHOISE",
            "ZYGOMORPHE",
            "ZYGOMYCETE",
            "ZYGOPETALE",
        ]
    );
}

#[test]
fn test_known_letters() {
    let pool = filter_candidates(&dictionary(), 8, &za()).unwrap();
    assert_eq!(
        to_strings(&pool),
        vec!["ZAIBATSU", "ZAIROISE", "ZAKOUSKI", "ZANZIBAR", "ZAPPETTE", "ZAPPEUSE", "ZARZUELA"]
    );
}

#[test]
fn test_misplaced_letter() {
    let constraints = za().with(Constraint::misplaced(letter('I'), pos(3)));
    let pool = filter_candidates(&dictionary(), 8, &constraints).unwrap();
    assert_eq!(to_strings(&pool), vec!["ZAKOUSKI", "ZANZIBAR"]);
}

#[test]
fn test_misplaced_and_forbidden_letter() {
    let constraints = za()
        .with(Constraint::misplaced(letter('I'), pos(5)))
        .with_forbidden(LetterSet::from_letters("I"));
    let pool = filter_candidates(&dictionary(), 8, &constraints).unwrap();
    // ZANZIBAR has its I at position 5, ZAIROISE has a second I.
    assert_eq!(to_strings(&pool), vec!["ZAIBATSU", "ZAKOUSKI"]);
}

#[test]
fn test_known_letter_is_not_forbidden_at_its_own_position() {
    // Z is known at 1 and forbidden elsewhere: ZANZIBAR and ZARZUELA repeat it.
    let constraints = za().with_forbidden(LetterSet::from_letters("Z"));
    let pool = filter_candidates(&dictionary(), 8, &constraints).unwrap();
    assert_eq!(
        to_strings(&pool),
        vec!["ZAIBATSU", "ZAIROISE", "ZAKOUSKI", "ZAPPETTE", "ZAPPEUSE"]
    );
}

#[test]
fn test_repeated_misplaced_letter_needs_two_occurrences() {
    let constraints = za()
        .with(Constraint::misplaced(letter('P'), pos(5)))
        .with(Constraint::misplaced(letter('P'), pos(6)));
    let pool = filter_candidates(&dictionary(), 8, &constraints).unwrap();
    assert_eq!(to_strings(&pool), vec!["ZAPPETTE", "ZAPPEUSE"]);

    let constraints = constraints.with(Constraint::misplaced(letter('P'), pos(7)));
    let pool = filter_candidates(&dictionary(), 8, &constraints).unwrap();
    assert!(pool.is_empty());
}

#[test]
fn test_no_word_of_length() {
    let result = filter_candidates(&dictionary(), 9, &Constraints::new());
    assert_eq!(
        result,
        Err(SolverError::EmptyResult {
            length: 9,
            reason: EmptyReason::NoWordOfLength,
        })
    );
}

#[test]
fn test_no_word_with_known_letters() {
    let constraints = Constraints::first_letter(letter('Q'));
    let result = filter_candidates(&dictionary(), 8, &constraints);
    assert_eq!(
        result,
        Err(SolverError::EmptyResult {
            length: 8,
            reason: EmptyReason::NoKnownMatch,
        })
    );
}

#[test]
fn test_position_out_of_range() {
    let constraints = za().with(Constraint::misplaced(letter('I'), pos(9)));
    let result = filter_candidates(&dictionary(), 8, &constraints);
    assert_eq!(
        result,
        Err(SolverError::InvalidPosition {
            letter: letter('I'),
            position: 9,
            length: 8,
        })
    );
}

#[test]
fn test_filtering_is_idempotent() {
    let constraints = za()
        .with(Constraint::misplaced(letter('I'), pos(5)))
        .with_forbidden(LetterSet::from_letters("I"));
    let once = filter_candidates(&dictionary(), 8, &constraints).unwrap();
    let twice = filter_candidates(&once, 8, &constraints).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_extra_constraints_only_narrow() {
    let steps = [
        za(),
        za().with(Constraint::misplaced(letter('I'), pos(5))),
        za()
            .with(Constraint::misplaced(letter('I'), pos(5)))
            .with_forbidden(LetterSet::from_letters("I")),
        za()
            .with(Constraint::misplaced(letter('I'), pos(5)))
            .with_forbidden(LetterSet::from_letters("IT")),
    ];
    let pools: Vec<Vec<_>> = steps
        .iter()
        .map(|c| filter_candidates(&dictionary(), 8, c).unwrap())
        .collect();
    for pair in pools.windows(2) {
        assert!(pair[1].iter().all(|w| pair[0].contains(w)));
    }
    assert_eq!(to_strings(&pools[3]), vec!["ZAKOUSKI"]);
}

#[test]
fn test_secret_survives_its_own_feedback() {
    let dictionary = dictionary();
    for guess in &dictionary {
        for secret in dictionary.iter().filter(|s| s.len() == guess.len()) {
            let feedback = derive_feedback(guess, secret);
            let constraints = Constraints::new().layered(&feedback);
            let pool = filter_candidates(&dictionary, secret.len(), &constraints).unwrap();
            assert!(pool.contains(secret), "{} lost after guessing {}", secret, guess);
            assert!(is_consistent(secret, &constraints));
            if guess != secret {
                assert!(!pool.contains(guess), "{} kept after scoring against {}", guess, secret);
            }
        }
    }
}

#[test]
fn test_is_consistent_matches_filter() {
    let constraints = za()
        .with(Constraint::misplaced(letter('I'), pos(5)))
        .with_forbidden(LetterSet::from_letters("I"));
    assert!(is_consistent(&word("ZAKOUSKI"), &constraints));
    assert!(!is_consistent(&word("ZANZIBAR"), &constraints));
    assert!(!is_consistent(&word("ZAIROISE"), &constraints));
}
