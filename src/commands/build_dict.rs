//! Dictionary build command
//!
//! Reads a word list, builds the trie, and writes it out in the JSON
//! interchange format for later `--trie` runs.

use crate::core::{Trie, TrieStatistics};
use crate::dictionary::loader::words_from_lines;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of building a dictionary file
pub struct BuildReport {
    pub source: String,
    pub words: usize,
    pub skipped: usize,
    pub stats: TrieStatistics,
    pub output: PathBuf,
}

/// Build a trie dictionary file from a word list
///
/// Reads from `input`, or from standard input when no path is given, and
/// writes the trie as JSON to `output`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn build_dictionary(input: Option<&Path>, output: &Path) -> Result<BuildReport, String> {
    let (source, content) = match input {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
            (path.display().to_string(), content)
        }
        None => {
            let content = io::read_to_string(io::stdin())
                .map_err(|e| format!("Cannot read standard input: {e}"))?;
            ("standard input".to_string(), content)
        }
    };

    let lines = content.lines().filter(|line| !line.trim().is_empty()).count();
    let words = words_from_lines(&content);
    let skipped = lines - words.len();

    // Progress bar
    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("building trie");

    let mut trie = Trie::new();
    for word in &words {
        trie.insert(word);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let json =
        serde_json::to_string(&trie).map_err(|e| format!("Cannot serialize dictionary: {e}"))?;
    fs::write(output, json).map_err(|e| format!("Cannot write {}: {e}", output.display()))?;

    Ok(BuildReport {
        source,
        words: words.len(),
        skipped,
        stats: trie.statistics(),
        output: output.to_path_buf(),
    })
}
