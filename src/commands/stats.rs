//! Corruption statistics command
//!
//! Generates many unsolvable puzzles in parallel against one shared engine and
//! reports how hard the dictionary makes corruption at each difficulty.

use crate::anagram::{AnagramEngine, EngineError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a statistics run
pub struct StatsConfig {
    /// Puzzles per difficulty
    pub count: usize,
    /// Difficulties to sample; empty means every length in the dictionary
    pub difficulties: Vec<usize>,
    /// Base seed for reproducible runs
    pub seed: Option<u64>,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl StatsConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            difficulties: Vec::new(),
            seed: None,
            progress: true,
        }
    }
}

/// Per-difficulty outcome
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyStats {
    pub difficulty: usize,
    pub dictionary_words: usize,
    pub generated: usize,
    pub exhausted: usize,
    pub average_attempts: f64,
    pub max_attempts: usize,
}

/// Result of a statistics run
pub struct StatsResult {
    pub total: usize,
    pub generated: usize,
    pub exhausted: usize,
    /// Requested difficulties with no dictionary words
    pub skipped: Vec<usize>,
    pub average_attempts: f64,
    pub max_attempts: usize,
    /// Attempts needed -> number of puzzles
    pub attempt_distribution: HashMap<usize, usize>,
    pub per_difficulty: Vec<DifficultyStats>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Run the statistics job
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
pub fn run_stats(engine: &AnagramEngine, config: &StatsConfig) -> StatsResult {
    let requested = if config.difficulties.is_empty() {
        engine.lengths()
    } else {
        config.difficulties.clone()
    };

    let (difficulties, skipped): (Vec<usize>, Vec<usize>) = requested
        .into_iter()
        .partition(|&len| !engine.words().words_of_length(len).is_empty());

    let jobs: Vec<(usize, u64)> = difficulties
        .iter()
        .flat_map(|&difficulty| (0..config.count as u64).map(move |i| (difficulty, i)))
        .collect();

    let pb = if config.progress {
        ProgressBar::new(jobs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("corrupting");

    let start = Instant::now();

    // (difficulty, Some(attempts) on success / None when exhausted)
    let outcomes: Vec<(usize, Option<usize>)> = jobs
        .par_iter()
        .map(|&(difficulty, index)| {
            let mut rng: Box<dyn RngCore> = match config.seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(
                    seed ^ (difficulty as u64).rotate_left(32) ^ index,
                )),
                None => Box::new(rand::rng()),
            };

            let outcome = match engine.generate_with(difficulty, true, &mut rng) {
                Ok(result) => Some(result.attempts),
                Err(EngineError::CorruptionExhausted { .. }) => None,
                // Difficulties were filtered to ones with words
                Err(err) => unreachable!("unexpected engine error: {err}"),
            };
            pb.inc(1);
            (difficulty, outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let per_difficulty = difficulties
        .iter()
        .map(|&difficulty| {
            let attempts: Vec<Option<usize>> = outcomes
                .iter()
                .filter(|(d, _)| *d == difficulty)
                .map(|&(_, outcome)| outcome)
                .collect();
            summarize(engine, difficulty, &attempts)
        })
        .collect();

    let successes: Vec<usize> = outcomes.iter().filter_map(|&(_, a)| a).collect();
    let mut attempt_distribution: HashMap<usize, usize> = HashMap::new();
    for &attempts in &successes {
        *attempt_distribution.entry(attempts).or_insert(0) += 1;
    }

    let total = outcomes.len();
    StatsResult {
        total,
        generated: successes.len(),
        exhausted: total - successes.len(),
        skipped,
        average_attempts: mean(&successes),
        max_attempts: successes.iter().copied().max().unwrap_or(0),
        attempt_distribution,
        per_difficulty,
        duration,
        puzzles_per_second: total as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn summarize(engine: &AnagramEngine, difficulty: usize, outcomes: &[Option<usize>]) -> DifficultyStats {
    let successes: Vec<usize> = outcomes.iter().filter_map(|&a| a).collect();

    DifficultyStats {
        difficulty,
        dictionary_words: engine.words().words_of_length(difficulty).len(),
        generated: successes.len(),
        exhausted: outcomes.len() - successes.len(),
        average_attempts: mean(&successes),
        max_attempts: successes.iter().copied().max().unwrap_or(0),
    }
}

fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<usize>() as f64 / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anagram::EngineConfig;

    fn quiet(count: usize) -> StatsConfig {
        let mut config = StatsConfig::new(count);
        config.progress = false;
        config.seed = Some(3);
        config
    }

    #[test]
    fn stats_cover_every_length_by_default() {
        let engine = AnagramEngine::new(["cat", "act", "dog", "frog", "golf"]);
        let result = run_stats(&engine, &quiet(20));

        assert_eq!(result.total, 40);
        assert_eq!(result.generated, 40);
        assert_eq!(result.exhausted, 0);
        assert!(result.skipped.is_empty());
        assert_eq!(result.per_difficulty.len(), 2);
        assert_eq!(result.per_difficulty[0].difficulty, 3);
        assert_eq!(result.per_difficulty[0].dictionary_words, 3);
        assert_eq!(result.per_difficulty[1].difficulty, 4);
        assert!(result.average_attempts >= 1.0);
        assert_eq!(result.attempt_distribution.values().sum::<usize>(), 40);
    }

    #[test]
    fn stats_skip_missing_difficulties() {
        let engine = AnagramEngine::new(["cat", "dog"]);
        let mut config = quiet(5);
        config.difficulties = vec![3, 7];

        let result = run_stats(&engine, &config);
        assert_eq!(result.skipped, [7]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn stats_count_exhaustion() {
        let letters: Vec<String> = ('a'..='z').map(String::from).collect();
        let config = EngineConfig::default().with_max_corruption_attempts(5);
        let engine = AnagramEngine::with_config(&letters, config);

        let result = run_stats(&engine, &quiet(8));
        assert_eq!(result.total, 8);
        assert_eq!(result.exhausted, 8);
        assert_eq!(result.generated, 0);
        assert_eq!(result.max_attempts, 0);
        assert!(result.attempt_distribution.is_empty());
        assert_eq!(result.per_difficulty[0].exhausted, 8);
    }

    #[test]
    fn seeded_stats_are_reproducible() {
        let engine = AnagramEngine::new(["cat", "act", "tac", "dog", "frog"]);
        let first = run_stats(&engine, &quiet(30));
        let second = run_stats(&engine, &quiet(30));

        assert_eq!(first.per_difficulty, second.per_difficulty);
        assert_eq!(first.attempt_distribution, second.attempt_distribution);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert!(mean(&[]).abs() < f64::EPSILON);
        assert!((mean(&[1, 2, 3]) - 2.0).abs() < f64::EPSILON);
    }
}
