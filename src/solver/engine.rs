//! Staged breadth-first search over the pruned dictionary
//!
//! The search walks all word chains at once, one letter per round. Chains
//! advance by spelling a further letter of the open word or, at a word end, by
//! starting a new word from the last letter. Steps that consume a fresh board
//! letter stay in the fast lane; steps that reuse a letter are deferred until
//! the fast lane empties. The first round that completes the board therefore
//! holds exactly the solutions with the fewest total letters, and they are all
//! returned together.

use rayon::prelude::*;

use super::branch::Branch;
use super::frontier::Frontier;
use super::mode::SolveMode;
use crate::core::{Adjacency, Puzzle, Trie};

/// A finished chain of words covering the whole board
pub type Solution = Vec<String>;

/// Letter Boxed search engine
///
/// Prunes the dictionary against the board once at construction, then drives
/// the staged search. Rounds are expanded in parallel; branches are immutable
/// snapshots, so the result order is deterministic for a given dictionary.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    domain: Trie,
    mode: SolveMode,
}

impl<'a> Solver<'a> {
    /// Create a solver, pruning `dictionary` down to words playable on the board
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{Puzzle, Trie};
    /// use letter_boxed::solver::{SolveMode, Solver};
    ///
    /// let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
    /// let dictionary = Trie::from_words(["acb", "bd"]);
    /// let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
    ///
    /// let solutions = solver.solve();
    /// assert_eq!(solutions, vec![vec!["acb".to_string(), "bd".to_string()]]);
    /// ```
    #[must_use]
    pub fn new(dictionary: &Trie, puzzle: &'a Puzzle, mode: SolveMode) -> Self {
        let adjacency = Adjacency::from_puzzle(puzzle);
        let domain = dictionary.prune(&adjacency);
        Self {
            puzzle,
            domain,
            mode,
        }
    }

    /// The dictionary pruned down to playable words
    #[inline]
    #[must_use]
    pub const fn domain(&self) -> &Trie {
        &self.domain
    }

    /// Find all minimal solutions for the board
    ///
    /// Returns every solution from the first successful round, in a stable
    /// order derived from edge and seeding order. Returns an empty vector when
    /// the board cannot be covered: no playable words, a board letter missing
    /// from every playable word, or a two-word cap that no chain satisfies.
    #[must_use]
    pub fn solve(&self) -> Vec<Solution> {
        let target = self.puzzle.letter_count();
        if target == 0 {
            return Vec::new();
        }

        // A board letter absent from every playable word can never be covered.
        let available = self.domain.letters();
        if !self.puzzle.letters().is_subset(&available) {
            return Vec::new();
        }

        let mut frontier = Frontier::seeded(self.bootstrap());
        loop {
            let solutions = self.harvest(frontier.current(), target);
            if !solutions.is_empty() {
                return solutions;
            }

            let (novel, deferred) = self.expand_all(frontier.current());
            frontier.absorb(novel, deferred);
            if !frontier.advance() {
                return Vec::new();
            }
        }
    }

    /// Seed one branch per board letter that starts a playable word
    fn bootstrap(&self) -> Vec<Branch<'_>> {
        let mut seeds = Vec::new();
        for (edge, letters) in self.puzzle.edges().iter().enumerate() {
            for &letter in letters {
                if let Some(node) = self.domain.child(letter) {
                    seeds.push(Branch::start(letter, edge, node));
                }
            }
        }
        seeds
    }

    /// Collect the branches that cover the board at a word end
    fn harvest(&self, branches: &[Branch<'_>], target: usize) -> Vec<Solution> {
        branches
            .iter()
            .filter(|branch| branch.used_count() == target && branch.node().is_end())
            .map(Branch::path)
            .collect()
    }

    /// Expand a whole round, keeping novel and deferred successors apart
    fn expand_all<'t>(&'t self, branches: &[Branch<'t>]) -> (Vec<Branch<'t>>, Vec<Branch<'t>>) {
        branches
            .par_iter()
            .map(|branch| self.expand(branch))
            .reduce(
                || (Vec::new(), Vec::new()),
                |(mut novel, mut deferred), (n, d)| {
                    novel.extend(n);
                    deferred.extend(d);
                    (novel, deferred)
                },
            )
    }

    /// All legal successors of one branch
    fn expand<'t>(&'t self, branch: &Branch<'t>) -> (Vec<Branch<'t>>, Vec<Branch<'t>>) {
        let mut novel = Vec::new();
        let mut deferred = Vec::new();

        // Spell the open word onward with letters from the other edges.
        for (edge, letters) in self.puzzle.edges().iter().enumerate() {
            if edge == branch.edge() {
                continue;
            }
            for &letter in letters {
                if let Some(node) = branch.node().child(letter) {
                    let successor = branch.extended(letter, edge, node);
                    if branch.uses(letter) {
                        deferred.push(successor);
                    } else {
                        novel.push(successor);
                    }
                }
            }
        }

        // At a word end, chain a new word from the last letter. The connector
        // letter is spelled twice, so restarts always defer.
        if branch.node().is_end()
            && self.mode.allows_restart(branch.word_count())
            && let Some(node) = self.domain.child(branch.last_letter())
        {
            deferred.push(branch.restarted(node));
        }

        (novel, deferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(words: &[&str]) -> Solution {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn solves_with_a_two_word_chain() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        let dictionary = Trie::from_words(["acb", "bd"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert_eq!(solver.solve(), vec![chain(&["acb", "bd"])]);

        let capped = Solver::new(&dictionary, &puzzle, SolveMode::TwoWords);
        assert_eq!(capped.solve(), vec![chain(&["acb", "bd"])]);
    }

    #[test]
    fn rotating_board_yields_every_minimal_chain() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        let dictionary = Trie::from_words(["ac", "cb", "bd", "da"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert_eq!(
            solver.solve(),
            vec![
                chain(&["ac", "cb", "bd"]),
                chain(&["bd", "da", "ac"]),
                chain(&["cb", "bd", "da"]),
                chain(&["da", "ac", "cb"]),
            ]
        );
    }

    #[test]
    fn two_words_mode_rejects_longer_chains() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        let dictionary = Trie::from_words(["ac", "cb", "bd", "da"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::TwoWords);
        assert!(solver.solve().is_empty());
    }

    #[test]
    fn one_word_cover_wins_outright() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        let dictionary = Trie::from_words(["acbd", "ac", "cb", "bd", "da"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert_eq!(solver.solve(), vec![chain(&["acbd"])]);

        let capped = Solver::new(&dictionary, &puzzle, SolveMode::TwoWords);
        assert_eq!(capped.solve(), vec![chain(&["acbd"])]);
    }

    #[test]
    fn uncoverable_letter_means_no_solutions() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        let dictionary = Trie::from_words(["ac"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert!(solver.solve().is_empty());
    }

    #[test]
    fn two_words_search_can_exhaust() {
        // Every board letter appears in some playable word, but no chain of
        // two words covers them all.
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        let dictionary = Trie::from_words(["ac", "ca", "bd"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::TwoWords);
        assert!(solver.solve().is_empty());
    }

    #[test]
    fn single_letter_board_solved_by_single_letter_word() {
        let puzzle = Puzzle::new(["a"]).unwrap();
        let dictionary = Trie::from_words(["a"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert_eq!(solver.solve(), vec![chain(&["a"])]);
    }

    #[test]
    fn empty_board_has_no_solutions() {
        let puzzle = Puzzle::new(std::iter::empty::<&str>()).unwrap();
        let dictionary = Trie::from_words(["ac"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert!(solver.solve().is_empty());
    }

    #[test]
    fn empty_edge_board_has_no_solutions() {
        // An empty edge leaves every reachable set empty, so only single
        // letter words survive pruning and the board cannot be covered.
        let puzzle = Puzzle::new(["ab", ""]).unwrap();
        let dictionary = Trie::from_words(["ab", "a"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert!(solver.solve().is_empty());
    }

    #[test]
    fn empty_dictionary_has_no_solutions() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        let dictionary = Trie::new();

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert!(solver.solve().is_empty());
    }

    #[test]
    fn domain_holds_only_playable_words() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        let dictionary = Trie::from_words(["acb", "ab", "cat"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert!(solver.domain().contains("acb"));
        assert!(!solver.domain().contains("ab"));
        assert!(!solver.domain().contains("cat"));
    }

    #[test]
    fn solve_is_deterministic() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        let dictionary = Trie::from_words(["ac", "cb", "bd", "da"]);

        let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
        assert_eq!(solver.solve(), solver.solve());
    }
}
