//! Word lists for puzzle generation
//!
//! The engine never touches the filesystem; word lists are loaded here and handed
//! to it as plain strings.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

/// Location of the system dictionary on most Unix systems
pub const SYSTEM_DICTIONARY: &str = "/usr/share/dict/words";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterCounts, WordSet};

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_sorted_and_unique() {
        assert!(WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_word_survives_word_set_construction() {
        let set = WordSet::new(WORDS);
        assert_eq!(set.len(), WORDS_COUNT);
    }

    #[test]
    fn covers_a_range_of_difficulties() {
        let set = WordSet::new(WORDS);
        for length in 3..=8 {
            assert!(
                !set.words_of_length(length).is_empty(),
                "no {length}-letter words embedded"
            );
        }
    }

    #[test]
    fn contains_anagram_families() {
        let set = WordSet::new(WORDS);
        assert!(set.anagrams_of(&LetterCounts::of("cat")).len() >= 3);
        assert!(set.anagrams_of(&LetterCounts::of("listen")).len() >= 3);
    }
}
