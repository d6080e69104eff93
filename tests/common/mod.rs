#![allow(dead_code)]

use sutom_solver::{load_dictionary_from_str, Letter, Position, Word};

/// A slice of the French dictionary, in dictionary order.
pub const DICTIONARY: &str = "\
ABANDONS
ABORTIVE
ACHETEUR
ECHOUER
ECLATER
ECOEURE
ECRIANT
SABOTER
SABOTEUR
SALUTER
SCISSURE
SCRIPTE
SCRUPULE
SOUPIRE
SURDITE
ZAIBATSU
ZAIROISE
ZAKOUSKI
ZANZIBAR
ZAPPETTE
ZAPPEUSE
ZARZUELA
ZEPPELIN
ZEZAIEMENT
ZIDOVUDINE
ZIGOUILLER
ZIGZAGUANT
ZIMBABWEEN
ZOANTHAIRE
ZOOLOGISTE
ZOOTECHNIE
ZOZOTEMENT
ZURICHOISE
ZYGOMORPHE
ZYGOMYCETE
ZYGOPETALE
";

pub fn dictionary() -> Vec<Word> {
    load_dictionary_from_str(DICTIONARY)
}

pub fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

pub fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| word(s)).collect()
}

pub fn letter(c: char) -> Letter {
    Letter::from_char(c).unwrap()
}

pub fn pos(n: usize) -> Position {
    Position::new(n).unwrap()
}

pub fn to_strings(pool: &[Word]) -> Vec<String> {
    pool.iter().map(Word::to_string).collect()
}
