//! Engine error type

use thiserror::Error;

/// Errors surfaced by puzzle generation and verification
///
/// All failures are reported synchronously. No engine state changes on an error
/// path, so the caller can retry immediately (e.g. with another difficulty).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The dictionary has no word with the requested number of letters
    #[error("no dictionary word has {0} letters")]
    NoWordOfLength(usize),

    /// Every corruption attempt still produced an anagram of a dictionary word
    #[error("could not make '{puzzle}' unsolvable after {attempts} attempts")]
    CorruptionExhausted { puzzle: String, attempts: usize },

    /// Zero difficulty, an empty puzzle, or an empty answer
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            EngineError::NoWordOfLength(7).to_string(),
            "no dictionary word has 7 letters"
        );
        assert_eq!(
            EngineError::CorruptionExhausted {
                puzzle: "a".to_string(),
                attempts: 100
            }
            .to_string(),
            "could not make 'a' unsolvable after 100 attempts"
        );
        assert_eq!(
            EngineError::invalid("answer is empty").to_string(),
            "invalid input: answer is empty"
        );
    }
}
