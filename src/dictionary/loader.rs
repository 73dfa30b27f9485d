//! Dictionary loading utilities
//!
//! Provides functions to read word lists from plain text and to load prebuilt
//! trie dictionaries from JSON files.

use crate::core::Trie;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize raw word list text into usable words
///
/// Words are trimmed and lowercased, one per line. Lines containing anything
/// but ASCII letters are dropped.
///
/// # Examples
/// ```
/// use letter_boxed::dictionary::loader::words_from_lines;
///
/// let words = words_from_lines("Cat\n  dog \n\nnope!\nbird");
/// assert_eq!(words, vec!["cat", "dog", "bird"]);
/// ```
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Load a word list from a text file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_boxed::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Load a prebuilt trie dictionary from a JSON file
///
/// The file must use the dictionary interchange format, a nested object of
/// `children` maps with `isEnd` flags, as written by the `build-dict` command.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or does not hold a valid
/// trie.
pub fn load_trie<P: AsRef<Path>>(path: P) -> io::Result<Trie> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_normalizes_case_and_whitespace() {
        let words = words_from_lines("Apple\n  BANANA  \ncherry");
        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn words_from_lines_drops_non_alphabetic_lines() {
        let words = words_from_lines("cat\ndon't\nits-a\nword2\n\ndog");
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn words_from_lines_empty_input() {
        assert!(words_from_lines("").is_empty());
        assert!(words_from_lines("\n\n  \n").is_empty());
    }

    #[test]
    fn loaded_words_build_a_queryable_trie() {
        let words = words_from_lines("cat\ncar\n");
        let trie = Trie::from_words(&words);
        assert!(trie.contains("cat"));
        assert!(trie.contains("car"));
        assert_eq!(trie.statistics().word_count, 2);
    }
}
