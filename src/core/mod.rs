//! Core domain types for Letter Boxed
//!
//! This module contains the fundamental domain types: the board, the letter
//! reachability map derived from it, and the dictionary trie. All types here
//! are pure, testable, and independent of the search engine.

mod adjacency;
mod puzzle;
mod trie;

pub use adjacency::Adjacency;
pub use puzzle::{Puzzle, PuzzleError};
pub use trie::{Trie, TrieStatistics};
