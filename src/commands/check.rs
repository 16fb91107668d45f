//! Answer checking command
//!
//! Verifies an answer and explains the verdict.

use crate::anagram::{AnagramEngine, EngineError};
use crate::core::{LetterCounts, Puzzle};

/// Result of checking an answer against a puzzle
pub struct CheckResult {
    pub puzzle: String,
    pub answer: String,
    pub in_dictionary: bool,
    pub letters_match: bool,
    pub correct: bool,
    /// Every accepted answer for the puzzle
    pub solutions: Vec<String>,
}

/// Check `answer` against `puzzle`
///
/// Both are trimmed and lowercased first.
///
/// # Errors
///
/// Returns `InvalidInput` if either is blank.
pub fn check_answer(
    engine: &AnagramEngine,
    puzzle: &str,
    answer: &str,
) -> Result<CheckResult, EngineError> {
    let puzzle = puzzle.trim().to_lowercase();
    let answer = answer.trim().to_lowercase();

    if puzzle.is_empty() {
        return Err(EngineError::invalid("puzzle is empty"));
    }

    let correct = engine.verify(&puzzle, &answer)?;
    let letters = Puzzle::new(&puzzle);

    Ok(CheckResult {
        in_dictionary: engine.words().contains(&answer),
        letters_match: LetterCounts::of(&answer) == letters.letter_counts(),
        correct,
        solutions: engine
            .solutions(&letters)
            .iter()
            .map(|w| w.text().to_string())
            .collect(),
        puzzle,
        answer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_engine() -> AnagramEngine {
        AnagramEngine::new(["cat", "act", "tac", "dog"])
    }

    #[test]
    fn correct_answer() {
        let result = check_answer(&setup_engine(), "tca", "act").unwrap();
        assert!(result.correct);
        assert!(result.in_dictionary);
        assert!(result.letters_match);
        assert_eq!(result.solutions, ["act", "cat", "tac"]);
    }

    #[test]
    fn dictionary_word_wrong_letters() {
        let result = check_answer(&setup_engine(), "tca", "dog").unwrap();
        assert!(!result.correct);
        assert!(result.in_dictionary);
        assert!(!result.letters_match);
    }

    #[test]
    fn right_letters_not_a_word() {
        let result = check_answer(&setup_engine(), "tca", "cta").unwrap();
        assert!(!result.correct);
        assert!(!result.in_dictionary);
        assert!(result.letters_match);
    }

    #[test]
    fn input_normalized() {
        let result = check_answer(&setup_engine(), " TCA ", "Act\n").unwrap();
        assert_eq!(result.puzzle, "tca");
        assert_eq!(result.answer, "act");
        assert!(result.correct);
    }

    #[test]
    fn unsolvable_puzzle_lists_no_solutions() {
        let result = check_answer(&setup_engine(), "tcz", "cat").unwrap();
        assert!(!result.correct);
        assert!(result.solutions.is_empty());
    }

    #[test]
    fn blank_inputs_rejected() {
        let engine = setup_engine();
        assert!(matches!(
            check_answer(&engine, "tca", "  "),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            check_answer(&engine, "", "cat"),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
