//! Core domain types for anagram puzzles
//!
//! Pure values with no I/O and no randomness: words, letter counts, puzzles and
//! the dictionary they are drawn from.

mod letters;
mod puzzle;
mod word;
mod word_set;

pub use letters::LetterCounts;
pub use puzzle::{GenerationResult, Puzzle};
pub use word::{Word, WordError};
pub use word_set::WordSet;
