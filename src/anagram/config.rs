//! Engine tuning knobs

/// Default bound on corruption attempts before giving up
pub const DEFAULT_MAX_CORRUPTION_ATTEMPTS: usize = 100;

/// Default letters-per-replacement ratio for corruption
pub const DEFAULT_REPLACEMENT_DIVISOR: usize = 5;

/// Configuration for an `AnagramEngine`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Corruption gives up with `CorruptionExhausted` after this many attempts
    pub max_corruption_attempts: usize,
    /// One letter is replaced per this many puzzle letters (at least one)
    pub replacement_divisor: usize,
}

impl EngineConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_corruption_attempts: DEFAULT_MAX_CORRUPTION_ATTEMPTS,
            replacement_divisor: DEFAULT_REPLACEMENT_DIVISOR,
        }
    }

    #[must_use]
    pub const fn with_max_corruption_attempts(mut self, attempts: usize) -> Self {
        self.max_corruption_attempts = attempts;
        self
    }

    #[must_use]
    pub const fn with_replacement_divisor(mut self, divisor: usize) -> Self {
        self.replacement_divisor = divisor;
        self
    }

    /// Number of letters to replace in a puzzle of `length` letters
    ///
    /// Always at least one, so short puzzles still change. A zero divisor is
    /// treated as one.
    #[must_use]
    pub fn replacements_for(&self, length: usize) -> usize {
        (length / self.replacement_divisor.max(1)).max(1)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_corruption_attempts, 100);
        assert_eq!(config.replacement_divisor, 5);
    }

    #[test]
    fn replacements_have_minimum_of_one() {
        let config = EngineConfig::default();
        assert_eq!(config.replacements_for(1), 1);
        assert_eq!(config.replacements_for(4), 1);
        assert_eq!(config.replacements_for(5), 1);
        assert_eq!(config.replacements_for(9), 1);
        assert_eq!(config.replacements_for(10), 2);
        assert_eq!(config.replacements_for(17), 3);
    }

    #[test]
    fn zero_divisor_treated_as_one() {
        let config = EngineConfig::default().with_replacement_divisor(0);
        assert_eq!(config.replacements_for(4), 4);
    }

    #[test]
    fn builders_override() {
        let config = EngineConfig::new()
            .with_max_corruption_attempts(3)
            .with_replacement_divisor(2);
        assert_eq!(config.max_corruption_attempts, 3);
        assert_eq!(config.replacements_for(6), 3);
    }
}
