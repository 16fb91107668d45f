//! Letter scrambling and corruption
//!
//! `permute` shuffles a word into a solvable puzzle. `corrupt` swaps some of a
//! puzzle's letters for random ones until no dictionary word can be spelled from
//! the result.

use super::config::EngineConfig;
use super::error::EngineError;
use crate::core::{Puzzle, Word, WordSet};
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

/// Produces puzzles from words
pub struct Scrambler<'a> {
    words: &'a WordSet,
    config: EngineConfig,
}

impl<'a> Scrambler<'a> {
    #[must_use]
    pub const fn new(words: &'a WordSet, config: EngineConfig) -> Self {
        Self { words, config }
    }

    /// Shuffle the letters of `word`; every ordering is equally likely
    pub fn permute<R: Rng + ?Sized>(&self, word: &Word, rng: &mut R) -> Puzzle {
        let mut letters: Vec<char> = word.text().chars().collect();
        letters.shuffle(rng);
        Puzzle::from_letters(letters)
    }

    /// Turn `puzzle` into one that no dictionary word solves
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the puzzle is empty
    /// - `CorruptionExhausted` if every attempt still spelled a dictionary anagram
    pub fn corrupt<R: Rng + ?Sized>(
        &self,
        puzzle: &Puzzle,
        rng: &mut R,
    ) -> Result<Puzzle, EngineError> {
        self.corrupt_counted(puzzle, rng).map(|(corrupted, _)| corrupted)
    }

    /// Like `corrupt`, also returning how many attempts it took
    ///
    /// Each attempt replaces `max(1, len / divisor)` letters of the *original*
    /// puzzle, never a previous failed attempt.
    ///
    /// # Errors
    ///
    /// Same as [`Scrambler::corrupt`].
    pub fn corrupt_counted<R: Rng + ?Sized>(
        &self,
        puzzle: &Puzzle,
        rng: &mut R,
    ) -> Result<(Puzzle, usize), EngineError> {
        if puzzle.is_empty() {
            return Err(EngineError::invalid("cannot corrupt an empty puzzle"));
        }

        let replacements = self.config.replacements_for(puzzle.len());
        let max_attempts = self.config.max_corruption_attempts;

        for attempt in 1..=max_attempts {
            let candidate = replace_letters(puzzle, replacements, rng);

            // Equal letter counts imply equal length, so this only matches
            // same-length words
            if !self.words.has_anagram(&candidate.letter_counts()) {
                debug!("corrupted '{puzzle}' into '{candidate}' after {attempt} attempt(s)");
                return Ok((candidate, attempt));
            }

            trace!("attempt {attempt}: '{candidate}' still spells a dictionary word");
        }

        debug!("giving up on '{puzzle}' after {max_attempts} attempts");
        Err(EngineError::CorruptionExhausted {
            puzzle: puzzle.text(),
            attempts: max_attempts,
        })
    }
}

/// Copy of `puzzle` with `count` randomly chosen positions overwritten
///
/// Positions are drawn independently, so one position may be hit twice.
fn replace_letters<R: Rng + ?Sized>(puzzle: &Puzzle, count: usize, rng: &mut R) -> Puzzle {
    let mut letters = puzzle.letters().to_vec();
    for position in replacement_positions(letters.len(), count, rng) {
        letters[position] = random_letter(rng);
    }
    Puzzle::from_letters(letters)
}

/// `count` positions drawn uniformly from `0..length`
fn replacement_positions<R: Rng + ?Sized>(length: usize, count: usize, rng: &mut R) -> Vec<usize> {
    (0..count).map(|_| rng.random_range(0..length)).collect()
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.random_range(b'a'..=b'z'))
}
