//! Letter frequency maps
//!
//! Two letter sequences are anagrams of each other exactly when their
//! `LetterCounts` are equal, regardless of letter order.

use std::collections::BTreeMap;

/// Mapping from letter to number of occurrences
///
/// Letters that never occur have an implicit count of zero. Only letters with a
/// positive count are stored, so equality and hashing compare multisets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterCounts {
    counts: BTreeMap<char, usize>,
}

impl LetterCounts {
    /// Count the letters of a string
    ///
    /// # Examples
    /// ```
    /// use anagram_engine::core::LetterCounts;
    ///
    /// assert_eq!(LetterCounts::of("listen"), LetterCounts::of("silent"));
    /// assert_ne!(LetterCounts::of("listen"), LetterCounts::of("lister"));
    /// ```
    #[must_use]
    pub fn of(text: &str) -> Self {
        text.chars().collect()
    }

    /// Occurrences of `letter` (zero when absent)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct letters
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over `(letter, count)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }

    fn add(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }
}

impl FromIterator<char> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_letters_count_zero() {
        let counts = LetterCounts::of("frog");
        assert_eq!(counts.count('q'), 0);
        assert_eq!(LetterCounts::default().count('a'), 0);
    }

    #[test]
    fn counts_duplicates() {
        let counts = LetterCounts::of("banana");
        assert_eq!(counts.count('a'), 3);
        assert_eq!(counts.count('n'), 2);
        assert_eq!(counts.count('b'), 1);
        assert_eq!(counts.distinct(), 3);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn order_independent_equality() {
        assert_eq!(LetterCounts::of("tca"), LetterCounts::of("act"));
        assert_eq!(LetterCounts::of("elbow"), LetterCounts::of("below"));
    }

    #[test]
    fn multiplicity_matters() {
        // Same letter set, different counts
        assert_ne!(LetterCounts::of("aab"), LetterCounts::of("abb"));
        assert_ne!(LetterCounts::of("ab"), LetterCounts::of("aab"));
    }

    #[test]
    fn equal_counts_hash_equal() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(LetterCounts::of("stone"));
        assert!(set.contains(&LetterCounts::of("notes")));
        assert!(!set.contains(&LetterCounts::of("stones")));
    }

    #[test]
    fn iter_is_alphabetical() {
        let pairs: Vec<(char, usize)> = LetterCounts::of("tact").iter().collect();
        assert_eq!(pairs, [('a', 1), ('c', 1), ('t', 2)]);
    }

    #[test]
    fn collects_from_chars() {
        let counts: LetterCounts = ['d', 'o', 'g'].into_iter().collect();
        assert_eq!(counts, LetterCounts::of("god"));
    }
}
