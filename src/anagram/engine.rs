//! Main anagram engine interface

use super::config::EngineConfig;
use super::error::EngineError;
use super::scrambler::Scrambler;
use super::selector::WordSelector;
use super::validator::Validator;
use crate::core::{GenerationResult, Puzzle, Word, WordSet};
use log::debug;
use rand::Rng;

/// Anagram puzzle generator and checker
///
/// Owns an immutable dictionary and nothing else. Every operation takes `&self`,
/// so one engine can serve any number of threads at once.
#[derive(Debug, Clone)]
pub struct AnagramEngine {
    words: WordSet,
    config: EngineConfig,
}

impl AnagramEngine {
    /// Create an engine over `words` with the default configuration
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::anagram::AnagramEngine;
    ///
    /// let engine = AnagramEngine::new(["cat", "act", "tac", "dog"]);
    /// assert_eq!(engine.verify("tca", "act"), Ok(true));
    /// assert_eq!(engine.verify("tca", "dog"), Ok(false));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, EngineConfig::default())
    }

    /// Create an engine over `words` with a custom configuration
    pub fn with_config<I, S>(words: I, config: EngineConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: WordSet::new(words),
            config,
        }
    }

    /// The dictionary
    #[must_use]
    pub const fn words(&self) -> &WordSet {
        &self.words
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Difficulties (word lengths) this dictionary can generate
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.words.lengths()
    }

    #[must_use]
    pub const fn selector(&self) -> WordSelector<'_> {
        WordSelector::new(&self.words)
    }

    #[must_use]
    pub const fn scrambler(&self) -> Scrambler<'_> {
        Scrambler::new(&self.words, self.config)
    }

    #[must_use]
    pub const fn validator(&self) -> Validator<'_> {
        Validator::new(&self.words)
    }

    /// Pick a random word with `length` letters
    ///
    /// # Errors
    ///
    /// See [`WordSelector::select`].
    pub fn select(&self, length: usize) -> Result<Word, EngineError> {
        self.select_with(length, &mut rand::rng())
    }

    /// [`AnagramEngine::select`] with a caller-supplied random generator
    ///
    /// # Errors
    ///
    /// See [`WordSelector::select`].
    pub fn select_with<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<Word, EngineError> {
        self.selector().select(length, rng).cloned()
    }

    /// Shuffle a word into a solvable puzzle
    #[must_use]
    pub fn permute(&self, word: &Word) -> Puzzle {
        self.permute_with(word, &mut rand::rng())
    }

    #[must_use]
    pub fn permute_with<R: Rng + ?Sized>(&self, word: &Word, rng: &mut R) -> Puzzle {
        self.scrambler().permute(word, rng)
    }

    /// Corrupt a puzzle so no dictionary word solves it
    ///
    /// # Errors
    ///
    /// See [`Scrambler::corrupt`].
    pub fn corrupt(&self, puzzle: &Puzzle) -> Result<Puzzle, EngineError> {
        self.corrupt_with(puzzle, &mut rand::rng())
    }

    /// # Errors
    ///
    /// See [`Scrambler::corrupt`].
    pub fn corrupt_with<R: Rng + ?Sized>(
        &self,
        puzzle: &Puzzle,
        rng: &mut R,
    ) -> Result<Puzzle, EngineError> {
        self.scrambler().corrupt(puzzle, rng)
    }

    /// Generate a puzzle from a word of `difficulty` letters
    ///
    /// With `unsolvable` set, the shuffled word is corrupted so that no dictionary
    /// word can be spelled from it.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `difficulty` is zero
    /// - `NoWordOfLength` if no word has that many letters
    /// - `CorruptionExhausted` if an unsolvable puzzle could not be produced
    pub fn generate(
        &self,
        difficulty: usize,
        unsolvable: bool,
    ) -> Result<GenerationResult, EngineError> {
        self.generate_with(difficulty, unsolvable, &mut rand::rng())
    }

    /// [`AnagramEngine::generate`] with a caller-supplied random generator
    ///
    /// # Errors
    ///
    /// See [`AnagramEngine::generate`].
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        difficulty: usize,
        unsolvable: bool,
        rng: &mut R,
    ) -> Result<GenerationResult, EngineError> {
        let word = self.selector().select(difficulty, rng)?;
        let scrambler = self.scrambler();
        let shuffled = scrambler.permute(word, rng);

        let (puzzle, attempts) = if unsolvable {
            scrambler.corrupt_counted(&shuffled, rng)?
        } else {
            (shuffled, 0)
        };

        debug!(
            "generated '{puzzle}' from '{word}' (solvable: {}, attempts: {attempts})",
            !unsolvable
        );

        Ok(GenerationResult {
            word: word.clone(),
            puzzle,
            solvable: !unsolvable,
            attempts,
        })
    }

    /// Check whether `answer` solves the puzzle spelled by `puzzle`
    ///
    /// Any dictionary word using exactly the puzzle's letters is correct, not only
    /// the word the puzzle came from.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `answer` is empty.
    pub fn verify(&self, puzzle: &str, answer: &str) -> Result<bool, EngineError> {
        self.verify_puzzle(&Puzzle::new(puzzle), answer)
    }

    /// # Errors
    ///
    /// Returns `InvalidInput` if `answer` is empty.
    pub fn verify_puzzle(&self, puzzle: &Puzzle, answer: &str) -> Result<bool, EngineError> {
        self.validator().verify(puzzle, answer)
    }

    /// All accepted answers for `puzzle`
    #[must_use]
    pub fn solutions(&self, puzzle: &Puzzle) -> &[Word] {
        self.validator().solutions(puzzle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_engine() -> AnagramEngine {
        AnagramEngine::new(["cat", "act", "tac", "dog", "frog", "golf", "listen", "silent"])
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnagramEngine>();
    }

    #[test]
    fn scenario_cat_act_tac_dog() {
        let engine = AnagramEngine::new(["cat", "act", "tac", "dog"]);

        let word = engine.select(3).unwrap();
        assert!(["cat", "act", "tac", "dog"].contains(&word.text()));

        assert_eq!(engine.verify("tca", "act"), Ok(true));
        assert_eq!(engine.verify("tca", "dog"), Ok(false));
        assert_eq!(engine.verify("tca", "xyz"), Ok(false));
    }

    #[test]
    fn generate_solvable() {
        let engine = setup_engine();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let result = engine.generate_with(4, false, &mut rng).unwrap();
            assert!(result.solvable);
            assert_eq!(result.attempts, 0);
            assert_eq!(result.word.len(), 4);
            assert!(result.puzzle.is_permutation_of(&result.word));
            assert_eq!(
                engine.verify_puzzle(&result.puzzle, result.word.text()),
                Ok(true)
            );
        }
    }

    #[test]
    fn generate_unsolvable() {
        let engine = setup_engine();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..50 {
            let result = engine.generate_with(6, true, &mut rng).unwrap();
            assert!(!result.solvable);
            assert!(result.attempts >= 1);
            assert_eq!(result.puzzle.len(), 6);
            assert!(engine.solutions(&result.puzzle).is_empty());
            for word in engine.words().words_of_length(6) {
                assert_eq!(
                    engine.verify_puzzle(&result.puzzle, word.text()),
                    Ok(false)
                );
            }
        }
    }

    #[test]
    fn generate_accepts_every_anagram() {
        let engine = setup_engine();
        let mut rng = StdRng::seed_from_u64(3);

        let result = engine.generate_with(6, false, &mut rng).unwrap();
        assert_eq!(engine.verify_puzzle(&result.puzzle, "listen"), Ok(true));
        assert_eq!(engine.verify_puzzle(&result.puzzle, "silent"), Ok(true));
    }

    #[test]
    fn generate_errors() {
        let engine = setup_engine();

        assert_eq!(
            engine.generate(5, false),
            Err(EngineError::NoWordOfLength(5))
        );
        assert_eq!(engine.generate(5, true), Err(EngineError::NoWordOfLength(5)));
        assert!(matches!(
            engine.generate(0, false),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn generate_exhaustion_reported() {
        let letters: Vec<String> = ('a'..='z').map(String::from).collect();
        let config = EngineConfig::default().with_max_corruption_attempts(10);
        let engine = AnagramEngine::with_config(&letters, config);

        assert!(matches!(
            engine.generate(1, true),
            Err(EngineError::CorruptionExhausted { attempts: 10, .. })
        ));
        // Solvable generation is unaffected
        assert!(engine.generate(1, false).is_ok());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let engine = setup_engine();

        let first = engine
            .generate_with(3, true, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let second = engine
            .generate_with(3, true, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn results_outlive_repeated_generation() {
        let engine = setup_engine();
        let first = engine.generate(3, false).unwrap();
        let _ = engine.generate(4, false).unwrap();
        let _ = engine.generate(6, true).unwrap();

        // Earlier puzzle still verifies against its own word
        assert_eq!(
            engine.verify_puzzle(&first.puzzle, first.word.text()),
            Ok(true)
        );
    }

    #[test]
    fn verify_empty_answer_is_invalid() {
        let engine = setup_engine();
        assert!(matches!(
            engine.verify("tca", ""),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn lengths_reflect_dictionary() {
        assert_eq!(setup_engine().lengths(), [3, 4, 6]);
    }

    #[test]
    fn concurrent_generation() {
        let engine = setup_engine();

        std::thread::scope(|scope| {
            for difficulty in [3, 4, 6] {
                let engine = &engine;
                scope.spawn(move || {
                    for _ in 0..20 {
                        let result = engine.generate(difficulty, true).unwrap();
                        assert!(engine.solutions(&result.puzzle).is_empty());
                    }
                });
            }
        });
    }
}
