//! Word list loading utilities
//!
//! Word list files are newline-delimited, one word per line. Surrounding
//! whitespace is trimmed and blank lines are skipped; everything else is passed
//! through untouched and left for `WordSet` to validate.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use anagram_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Split in-memory text into trimmed, non-blank lines
///
/// # Examples
/// ```
/// use anagram_engine::wordlists::loader::words_from_str;
///
/// let words = words_from_str("cat\n  act \n\ntac\n");
/// assert_eq!(words, ["cat", "act", "tac"]);
/// ```
#[must_use]
pub fn words_from_str(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_str_trims_lines() {
        let words = words_from_str("  frog\t\ngolf  \r\nflog\n");
        assert_eq!(words, ["frog", "golf", "flog"]);
    }

    #[test]
    fn words_from_str_skips_blank_lines() {
        let words = words_from_str("\n\ncat\n   \n\ndog\n\n");
        assert_eq!(words, ["cat", "dog"]);
    }

    #[test]
    fn words_from_str_empty() {
        assert!(words_from_str("").is_empty());
    }

    #[test]
    fn words_from_str_keeps_entries_for_validation_later() {
        // Proper nouns and possessives are filtered by WordSet, not here
        let words = words_from_str("Aaron's\nzebra\n");
        assert_eq!(words, ["Aaron's", "zebra"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "anagram_engine_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "listen").unwrap();
            writeln!(file, " silent ").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "enlist").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["listen", "silent", "enlist"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("/nonexistent/anagram/words.txt");
        assert!(result.is_err());
    }
}
