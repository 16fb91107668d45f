//! Game session shared by the text and TUI game modes
//!
//! A round shows one puzzle. The player answers with a word, claims the puzzle
//! has no solution, or gives up. Wrong words do not end the round.

use crate::anagram::{AnagramEngine, EngineError};
use crate::core::{GenerationResult, Word};
use log::debug;
use rand::Rng;

/// Word length used when none is given
pub const DEFAULT_DIFFICULTY: usize = 5;

/// Probability that a round's puzzle is unsolvable when none is given
pub const DEFAULT_UNSOLVABLE_CHANCE: f64 = 0.25;

/// Result of a player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The answer is a dictionary word using exactly the puzzle's letters
    Solved,
    /// The answer is not in the dictionary
    NotAWord,
    /// The answer is a word, but not spelled from the puzzle's letters
    WrongLetters,
    /// The player said "no solution" and there is none
    ClaimedCorrectly,
    /// The player said "no solution" but the puzzle is solvable
    ClaimedWrongly,
    /// The player gave up
    GaveUp,
}

impl Verdict {
    /// Whether this verdict finishes the round
    #[must_use]
    pub const fn ends_round(self) -> bool {
        !matches!(self, Self::NotAWord | Self::WrongLetters)
    }

    /// Whether this verdict counts as a win
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Solved | Self::ClaimedCorrectly)
    }
}

/// Running score for a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds: usize,
    pub wins: usize,
    pub wrong_guesses: usize,
    pub streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record(&mut self, verdict: Verdict) {
        if !verdict.ends_round() {
            self.wrong_guesses += 1;
            return;
        }

        self.rounds += 1;
        if verdict.is_win() {
            self.wins += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }

    /// Percentage of finished rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64 * 100.0
        }
    }
}

/// State of one player's game
pub struct GameSession<'a> {
    engine: &'a AnagramEngine,
    difficulty: usize,
    unsolvable_chance: f64,
    current: Option<GenerationResult>,
    round_over: bool,
    stats: Statistics,
}

impl<'a> GameSession<'a> {
    /// Start a session; `unsolvable_chance` is clamped to `[0, 1]`
    #[must_use]
    pub fn new(engine: &'a AnagramEngine, difficulty: usize, unsolvable_chance: f64) -> Self {
        let unsolvable_chance = if unsolvable_chance.is_nan() {
            0.0
        } else {
            unsolvable_chance.clamp(0.0, 1.0)
        };

        Self {
            engine,
            difficulty,
            unsolvable_chance,
            current: None,
            round_over: true,
            stats: Statistics::default(),
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &'a AnagramEngine {
        self.engine
    }

    #[must_use]
    pub const fn difficulty(&self) -> usize {
        self.difficulty
    }

    #[must_use]
    pub const fn unsolvable_chance(&self) -> f64 {
        self.unsolvable_chance
    }

    #[must_use]
    pub const fn current(&self) -> Option<&GenerationResult> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Whether the current round has finished (or none has started)
    #[must_use]
    pub const fn round_over(&self) -> bool {
        self.round_over
    }

    /// Change the word length for following rounds
    ///
    /// # Errors
    ///
    /// Returns `NoWordOfLength` (or `InvalidInput` for zero) if the dictionary
    /// cannot generate that difficulty; the old difficulty is kept.
    pub fn set_difficulty(&mut self, difficulty: usize) -> Result<(), EngineError> {
        if difficulty == 0 {
            return Err(EngineError::invalid("difficulty must be at least 1"));
        }
        if self.engine.words().words_of_length(difficulty).is_empty() {
            return Err(EngineError::NoWordOfLength(difficulty));
        }
        self.difficulty = difficulty;
        Ok(())
    }

    /// Next difficulty available in the dictionary above (or below) the current one
    #[must_use]
    pub fn neighbour_difficulty(&self, harder: bool) -> Option<usize> {
        let lengths = self.engine.lengths();
        if harder {
            lengths.into_iter().find(|&len| len > self.difficulty)
        } else {
            lengths.into_iter().rev().find(|&len| len < self.difficulty)
        }
    }

    /// Generate the puzzle for a new round
    ///
    /// If the dictionary makes an unsolvable puzzle impossible at this difficulty,
    /// the round falls back to a solvable puzzle.
    ///
    /// # Errors
    ///
    /// Returns `NoWordOfLength` or `InvalidInput` from the engine.
    pub fn new_round<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&GenerationResult, EngineError> {
        let unsolvable = rng.random_bool(self.unsolvable_chance);

        let result = match self.engine.generate_with(self.difficulty, unsolvable, rng) {
            Err(EngineError::CorruptionExhausted { puzzle, attempts }) => {
                debug!("'{puzzle}' resisted {attempts} corruption attempts, using a solvable round");
                self.engine.generate_with(self.difficulty, false, rng)?
            }
            other => other?,
        };

        self.round_over = false;
        Ok(&*self.current.insert(result))
    }

    /// Submit a word as the answer to the current puzzle
    ///
    /// The answer is trimmed and lowercased first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if there is no open round or the answer is blank.
    pub fn submit(&mut self, answer: &str) -> Result<Verdict, EngineError> {
        let answer = answer.trim().to_lowercase();
        let current = self.open_round()?;

        let verdict = if self.engine.verify_puzzle(&current.puzzle, &answer)? {
            Verdict::Solved
        } else if self.engine.words().contains(&answer) {
            Verdict::WrongLetters
        } else {
            Verdict::NotAWord
        };

        Ok(self.finish(verdict))
    }

    /// Claim that the current puzzle has no solution
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if there is no open round.
    pub fn claim_unsolvable(&mut self) -> Result<Verdict, EngineError> {
        let current = self.open_round()?;

        let verdict = if self.engine.solutions(&current.puzzle).is_empty() {
            Verdict::ClaimedCorrectly
        } else {
            Verdict::ClaimedWrongly
        };

        Ok(self.finish(verdict))
    }

    /// Abandon the current round
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if there is no open round.
    pub fn give_up(&mut self) -> Result<Verdict, EngineError> {
        self.open_round()?;
        Ok(self.finish(Verdict::GaveUp))
    }

    /// Accepted answers for the current puzzle (empty if unsolvable or no round)
    #[must_use]
    pub fn solutions(&self) -> &'a [Word] {
        self.current
            .as_ref()
            .map_or(&[], |current| self.engine.solutions(&current.puzzle))
    }

    fn open_round(&self) -> Result<&GenerationResult, EngineError> {
        match &self.current {
            Some(current) if !self.round_over => Ok(current),
            _ => Err(EngineError::invalid("no round in progress")),
        }
    }

    fn finish(&mut self, verdict: Verdict) -> Verdict {
        self.stats.record(verdict);
        if verdict.ends_round() {
            self.round_over = true;
        }
        verdict
    }
}
