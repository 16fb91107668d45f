//! Puzzles and generation results

use super::letters::LetterCounts;
use super::word::Word;
use std::fmt;

/// A scrambled letter sequence presented to the player
///
/// A puzzle is a plain value: it does not borrow from the engine that produced it
/// and can be verified any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    letters: Vec<char>,
}

impl Puzzle {
    /// Build a puzzle from arbitrary text (e.g. a puzzle typed by a user)
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            letters: text.chars().collect(),
        }
    }

    /// Build a puzzle from an owned letter sequence
    #[must_use]
    pub const fn from_letters(letters: Vec<char>) -> Self {
        Self { letters }
    }

    /// The letters in puzzle order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter multiset of the puzzle
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        self.letters.iter().copied().collect()
    }

    /// Whether the puzzle uses exactly the letters of `word`
    #[must_use]
    pub fn is_permutation_of(&self, word: &Word) -> bool {
        self.len() == word.len() && self.letter_counts() == word.letter_counts()
    }

    /// Puzzle letters joined into a string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Outcome of a single `generate` call
///
/// Carries the selected word alongside the puzzle, so callers never need to ask the
/// engine what it picked last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub word: Word,
    pub puzzle: Puzzle,
    /// False when the puzzle was corrupted into one with no solution
    pub solvable: bool,
    /// Corruption attempts spent (0 for solvable puzzles)
    pub attempts: usize,
}
