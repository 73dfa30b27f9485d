//! Edge adjacency for move legality
//!
//! Maps every board letter to the letters reachable from it, which is the union
//! of all letters sitting on a different edge. A word is playable exactly when
//! each consecutive letter pair stays on the reachability map.

use rustc_hash::{FxHashMap, FxHashSet};

use super::Puzzle;

/// Reachability between board letters
///
/// Built once per puzzle and consulted for every transition while pruning the
/// dictionary trie, so lookups stay allocation free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    reachable: FxHashMap<char, FxHashSet<char>>,
}

impl Adjacency {
    /// Build the reachability map for a board
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{Adjacency, Puzzle};
    ///
    /// let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
    /// let adjacency = Adjacency::from_puzzle(&puzzle);
    ///
    /// assert!(adjacency.accepts('a', None));
    /// assert!(adjacency.accepts('c', Some('a')));
    /// assert!(!adjacency.accepts('b', Some('a'))); // Same edge
    /// assert!(!adjacency.accepts('z', None)); // Not on the board
    /// ```
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let mut reachable: FxHashMap<char, FxHashSet<char>> = FxHashMap::default();

        for (index, edge) in puzzle.edges().iter().enumerate() {
            let others: FxHashSet<char> = puzzle
                .edges()
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .flat_map(|(_, letters)| letters.iter().copied())
                .collect();

            for &letter in edge {
                reachable.insert(letter, others.clone());
            }
        }

        Self { reachable }
    }

    /// Whether `letter` may legally extend a word ending in `previous`
    ///
    /// With no previous letter, any board letter is legal. Otherwise `letter`
    /// must be reachable from `previous`, which also rejects a previous letter
    /// that is not on the board at all.
    #[must_use]
    pub fn accepts(&self, letter: char, previous: Option<char>) -> bool {
        if !self.reachable.contains_key(&letter) {
            return false;
        }
        previous.is_none_or(|prev| {
            self.reachable
                .get(&prev)
                .is_some_and(|letters| letters.contains(&letter))
        })
    }
}
