//! Letter Boxed Solver
//!
//! A solver for Letter Boxed style puzzles, where words hop between the edges
//! of a letter box and chained words share a connecting letter. The solver
//! prunes a dictionary trie down to playable words, then runs a staged
//! breadth-first search for the solutions that cover the board in the fewest
//! total letters.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::core::{Puzzle, Trie};
//! use letter_boxed::solver::{SolveMode, Solver};
//!
//! // Two edges, four letters, two playable words
//! let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
//! let dictionary = Trie::from_words(["acb", "bd"]);
//!
//! let solver = Solver::new(&dictionary, &puzzle, SolveMode::MinLetters);
//! let solutions = solver.solve();
//!
//! assert_eq!(solutions, vec![vec!["acb".to_string(), "bd".to_string()]]);
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod solver;

// Word lists and trie files
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
