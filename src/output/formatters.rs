//! Formatting utilities for terminal output

use crate::core::{Puzzle, Word};

/// Format a puzzle as spaced capital letters (`"tca"` -> `"T C A"`)
#[must_use]
pub fn format_tiles(puzzle: &Puzzle) -> String {
    puzzle
        .letters()
        .iter()
        .map(|letter| letter.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma-separated capitalized word list, or a dash when empty
#[must_use]
pub fn join_words(words: &[Word]) -> String {
    if words.is_empty() {
        return "—".to_string();
    }
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_spaced_capitals() {
        assert_eq!(format_tiles(&Puzzle::new("tca")), "T C A");
        assert_eq!(format_tiles(&Puzzle::new("q")), "Q");
        assert_eq!(format_tiles(&Puzzle::new("")), "");
    }

    #[test]
    fn join_words_capitalizes() {
        let words = vec![Word::new("act").unwrap(), Word::new("cat").unwrap()];
        assert_eq!(join_words(&words), "ACT, CAT");
        assert_eq!(join_words(&[]), "—");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
