//! Command implementations

pub mod check;
pub mod generate;
pub mod session;
pub mod simple;
pub mod stats;

pub use check::{CheckResult, check_answer};
pub use generate::{GenerateConfig, generate_puzzles};
pub use session::{GameSession, Statistics, Verdict};
pub use simple::run_simple;
pub use stats::{DifficultyStats, StatsConfig, StatsResult, run_stats};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random generator for a run: seeded when `seed` is given, otherwise thread-local
#[must_use]
pub fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rngs_agree() {
        let mut a = make_rng(Some(17));
        let mut b = make_rng(Some(17));
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
