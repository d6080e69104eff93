//! Alphabet and word model.
//!
//! Words are stored as uppercase ASCII letters. Every word handed to the
//! solver goes through [`Word::parse`], which trims and uppercases the input
//! and rejects anything outside `A..=Z`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SolverError};

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Longest supported word. Claimed positions are tracked as `u64` masks.
pub const MAX_WORD_LENGTH: usize = 64;

/// A single uppercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Accepts ASCII letters of either case.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Index of the letter within the alphabet (`A` = 0).
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    pub fn to_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A set of letters packed into a bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, letter: Letter) {
        self.0 |= 1u32 << letter.index();
    }

    pub fn contains(self, letter: Letter) -> bool {
        self.0 & (1u32 << letter.index()) != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE as u8)
            .filter(move |&i| self.0 & (1u32 << i) != 0)
            .map(|i| Letter(b'A' + i))
    }

    /// Builds a set from the letters of `s`, ignoring anything else.
    pub fn from_letters(s: &str) -> Self {
        s.chars().filter_map(Letter::from_char).collect()
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Letter::to_char)).finish()
    }
}

/// A 1-based position inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    /// Returns `None` for 0, which is never a valid position.
    pub fn new(value: usize) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Zero-based index of the position.
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable, uppercase word.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Box<[Letter]>);

impl Word {
    /// Normalises `s` (trim, uppercase) into a word.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_WORD_LENGTH {
            return Err(SolverError::InvalidWord(s.to_string()));
        }
        trimmed
            .chars()
            .map(Letter::from_char)
            .collect::<Option<Box<[Letter]>>>()
            .map(Self)
            .ok_or_else(|| SolverError::InvalidWord(s.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn letter_at(&self, position: Position) -> Option<Letter> {
        self.0.get(position.index()).copied()
    }

    pub fn first(&self) -> Option<Letter> {
        self.0.first().copied()
    }

    /// Number of occurrences of `letter`.
    pub fn count(&self, letter: Letter) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0.iter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other.bytes()).all(|(l, b)| l.0 == b)
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
