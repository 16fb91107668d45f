//! Word selection by length

use super::error::EngineError;
use crate::core::{Word, WordSet};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Picks dictionary words of a requested length
///
/// Holds nothing but a borrow of the dictionary, so every call is independent.
pub struct WordSelector<'a> {
    words: &'a WordSet,
}

impl<'a> WordSelector<'a> {
    #[must_use]
    pub const fn new(words: &'a WordSet) -> Self {
        Self { words }
    }

    /// Choose a word of exactly `length` letters, uniformly at random
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `length` is zero
    /// - `NoWordOfLength` if the dictionary has no word of that length
    pub fn select<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<&'a Word, EngineError> {
        if length == 0 {
            return Err(EngineError::invalid("difficulty must be at least 1"));
        }

        self.words
            .words_of_length(length)
            .choose(rng)
            .ok_or(EngineError::NoWordOfLength(length))
    }
}
