//! Board analysis command
//!
//! Reports how much of the dictionary survives pruning for a board, which
//! letters can start a word, and which letters no playable word touches.

use crate::core::{Adjacency, Puzzle, Trie, TrieStatistics};

/// How many playable words the analysis lists
const SAMPLE_SIZE: usize = 10;

/// Result of analyzing a board
pub struct AnalysisReport {
    pub puzzle: String,
    pub letter_count: usize,
    pub edge_count: usize,
    pub dictionary_stats: TrieStatistics,
    pub domain_stats: TrieStatistics,
    pub viable_starts: Vec<char>,
    pub dead_letters: Vec<char>,
    pub sample_words: Vec<String>,
}

/// Analyze a board against a dictionary
///
/// A dead letter is a board letter no playable word contains; any dead letter
/// makes the board unsolvable regardless of mode.
///
/// # Errors
///
/// Returns an error if the board letters are invalid or duplicated.
pub fn analyze_puzzle(dictionary: &Trie, edges: &[String]) -> Result<AnalysisReport, String> {
    let puzzle = Puzzle::new(edges).map_err(|e| format!("Invalid board: {e}"))?;

    let adjacency = Adjacency::from_puzzle(&puzzle);
    let domain = dictionary.prune(&adjacency);
    let covered = domain.letters();

    let board_letters = puzzle.edges().iter().flatten().copied();
    let viable_starts: Vec<char> = board_letters
        .clone()
        .filter(|&letter| domain.child(letter).is_some())
        .collect();
    let dead_letters: Vec<char> = board_letters
        .filter(|letter| !covered.contains(letter))
        .collect();

    let mut sample_words = domain.words();
    sample_words.truncate(SAMPLE_SIZE);

    Ok(AnalysisReport {
        puzzle: puzzle.to_string(),
        letter_count: puzzle.letter_count(),
        edge_count: puzzle.edge_count(),
        dictionary_stats: dictionary.statistics(),
        domain_stats: domain.statistics(),
        viable_starts,
        dead_letters,
        sample_words,
    })
}
