//! Immutable dictionary
//!
//! Built once from raw strings, then only read. Alongside plain membership the set
//! keeps two indexes: words grouped by length (for selection) and words grouped by
//! letter multiset (for anagram lookups).

use super::letters::LetterCounts;
use super::word::Word;
use log::info;
use rustc_hash::{FxHashMap, FxHashSet};

/// Deduplicated, read-only set of dictionary words
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    members: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<Word>>,
    by_letters: FxHashMap<LetterCounts, Vec<Word>>,
}

impl WordSet {
    /// Build a set from raw strings
    ///
    /// Each entry is trimmed and lowercased. Blank entries and entries that are not
    /// purely ASCII letters are skipped. Duplicates collapse.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members = FxHashSet::default();
        let mut skipped = 0_usize;

        for raw in words {
            let trimmed = raw.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => {
                    members.insert(word);
                }
                Err(_) => skipped += 1,
            }
        }

        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        let mut by_letters: FxHashMap<LetterCounts, Vec<Word>> = FxHashMap::default();
        for word in &members {
            by_length.entry(word.len()).or_default().push(word.clone());
            by_letters
                .entry(word.letter_counts())
                .or_default()
                .push(word.clone());
        }

        // Sorted buckets keep seeded selection reproducible across runs
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
        }
        for bucket in by_letters.values_mut() {
            bucket.sort_unstable();
        }

        info!(
            "dictionary built: {} words, {} lengths, {} letter groups ({} entries skipped)",
            members.len(),
            by_length.len(),
            by_letters.len(),
            skipped
        );

        Self {
            members: members.into_iter().map(|w| w.text().to_string()).collect(),
            by_length,
            by_letters,
        }
    }

    /// Whether `text` is exactly a dictionary word
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.members.contains(text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All words with exactly `length` letters, alphabetically
    ///
    /// Returns an empty slice if there are none.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Whether any word has exactly these letter counts
    #[inline]
    #[must_use]
    pub fn has_anagram(&self, counts: &LetterCounts) -> bool {
        self.by_letters.contains_key(counts)
    }

    /// Words with exactly these letter counts, alphabetically
    #[must_use]
    pub fn anagrams_of(&self, counts: &LetterCounts) -> &[Word] {
        self.by_letters.get(counts).map_or(&[], Vec::as_slice)
    }

    /// Word lengths present in the set, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
