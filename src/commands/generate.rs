//! Puzzle generation command
//!
//! Generates a batch of puzzles at one difficulty.

use crate::anagram::{AnagramEngine, EngineError};
use crate::core::GenerationResult;
use rand::Rng;

/// Configuration for a generation run
pub struct GenerateConfig {
    pub difficulty: usize,
    pub unsolvable: bool,
    pub count: usize,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(difficulty: usize) -> Self {
        Self {
            difficulty,
            unsolvable: false,
            count: 1,
        }
    }
}

/// Generate `config.count` puzzles
///
/// # Errors
///
/// Stops at the first engine error (unknown difficulty, exhausted corruption).
pub fn generate_puzzles<R: Rng + ?Sized>(
    engine: &AnagramEngine,
    config: &GenerateConfig,
    rng: &mut R,
) -> Result<Vec<GenerationResult>, EngineError> {
    (0..config.count)
        .map(|_| engine.generate_with(config.difficulty, config.unsolvable, rng))
        .collect()
}
