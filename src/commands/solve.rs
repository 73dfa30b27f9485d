//! Board solving command
//!
//! Runs the staged search against a board and reports the minimal solutions.

use crate::core::{Puzzle, Trie, TrieStatistics};
use crate::solver::{Solution, SolveMode, Solver};
use std::time::{Duration, Instant};

/// Result of solving a board
pub struct SolveReport {
    pub puzzle: String,
    pub mode: SolveMode,
    pub dictionary_stats: TrieStatistics,
    pub domain_stats: TrieStatistics,
    pub solutions: Vec<Solution>,
    pub duration: Duration,
}

/// Solve a board against a dictionary
///
/// Prunes the dictionary down to playable words, then searches for the
/// solutions with the fewest total letters. An empty solution list means the
/// board cannot be covered under the given mode.
///
/// # Errors
///
/// Returns an error if the board letters are invalid or duplicated.
pub fn solve_puzzle(
    dictionary: &Trie,
    edges: &[String],
    mode: SolveMode,
) -> Result<SolveReport, String> {
    let puzzle = Puzzle::new(edges).map_err(|e| format!("Invalid board: {e}"))?;

    let start = Instant::now();
    let solver = Solver::new(dictionary, &puzzle, mode);
    let solutions = solver.solve();
    let duration = start.elapsed();

    Ok(SolveReport {
        puzzle: puzzle.to_string(),
        mode,
        dictionary_stats: dictionary.statistics(),
        domain_stats: solver.domain().statistics(),
        solutions,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WORDS;

    fn edges(strs: &[&str]) -> Vec<String> {
        strs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn solve_reports_solutions_and_stats() {
        let dictionary = Trie::from_words(["acb", "bd", "cat"]);
        let report =
            solve_puzzle(&dictionary, &edges(&["ab", "cd"]), SolveMode::MinLetters).unwrap();

        assert_eq!(report.puzzle, "AB CD");
        assert_eq!(report.mode, SolveMode::MinLetters);
        assert_eq!(
            report.solutions,
            vec![vec!["acb".to_string(), "bd".to_string()]]
        );
        assert_eq!(report.dictionary_stats.word_count, 3);
        assert_eq!(report.domain_stats.word_count, 2);
    }

    #[test]
    fn solve_rejects_invalid_boards() {
        let dictionary = Trie::from_words(["acb"]);

        assert!(solve_puzzle(&dictionary, &edges(&["ab", "bc"]), SolveMode::MinLetters).is_err());
        assert!(solve_puzzle(&dictionary, &edges(&["a!"]), SolveMode::MinLetters).is_err());
    }

    #[test]
    fn solve_reports_unsolvable_board() {
        let dictionary = Trie::from_words(["ac"]);
        let report =
            solve_puzzle(&dictionary, &edges(&["ab", "cd"]), SolveMode::MinLetters).unwrap();

        assert!(report.solutions.is_empty());
    }

    #[test]
    fn embedded_dictionary_solves_the_demo_board() {
        let dictionary = Trie::from_words(WORDS);
        let report = solve_puzzle(
            &dictionary,
            &edges(&["adr", "meo", "bxu", "its"]),
            SolveMode::MinLetters,
        )
        .unwrap();

        assert_eq!(report.puzzle, "ADR MEO BXU ITS");
        assert_eq!(report.solutions, vec![vec!["ambidextrous".to_string()]]);
    }
}
