//! Answer verification

use super::error::EngineError;
use crate::core::{LetterCounts, Puzzle, Word, WordSet};

/// Checks answers against puzzles
pub struct Validator<'a> {
    words: &'a WordSet,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub const fn new(words: &'a WordSet) -> Self {
        Self { words }
    }

    /// Check whether `answer` solves `puzzle`
    ///
    /// An answer is correct when it is a dictionary word and uses exactly the
    /// puzzle's letters. It does NOT have to be the word the puzzle was generated
    /// from: for a puzzle built from "cat", the answers "act" and "tac" are accepted
    /// too. Every dictionary anagram of the puzzle is a valid solution.
    ///
    /// The check is pure; the same arguments always give the same result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `answer` is empty.
    pub fn verify(&self, puzzle: &Puzzle, answer: &str) -> Result<bool, EngineError> {
        if answer.is_empty() {
            return Err(EngineError::invalid("answer is empty"));
        }

        Ok(self.words.contains(answer) && LetterCounts::of(answer) == puzzle.letter_counts())
    }

    /// Every dictionary word accepted as an answer to `puzzle`, alphabetically
    ///
    /// Empty exactly when the puzzle is unsolvable.
    #[must_use]
    pub fn solutions(&self, puzzle: &Puzzle) -> &'a [Word] {
        self.words.anagrams_of(&puzzle.letter_counts())
    }

    /// Whether at least one dictionary word solves `puzzle`
    #[must_use]
    pub fn is_solvable(&self, puzzle: &Puzzle) -> bool {
        self.words.has_anagram(&puzzle.letter_counts())
    }
}
