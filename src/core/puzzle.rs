//! Letter Boxed board representation
//!
//! A board is a sequence of edges, each edge holding letters. Consecutive letters
//! of a played word must come from different edges, and a solution must cover
//! every letter on the board.

use rustc_hash::FxHashSet;
use std::fmt;

/// A Letter Boxed puzzle board
///
/// Stores the edges in entry order plus the flattened letter set used for
/// coverage checks. Letters are normalized to ASCII lowercase and must be
/// unique across the whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    edges: Vec<Vec<char>>,
    letters: FxHashSet<char>,
}

/// Error type for invalid boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    InvalidLetter(char),
    DuplicateLetter(char),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(letter) => {
                write!(f, "Board letters must be ASCII alphabetic, got {letter:?}")
            }
            Self::DuplicateLetter(letter) => {
                write!(f, "Letter '{letter}' appears on the board more than once")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Create a board from one string of letters per edge
    ///
    /// Letters are lowercased before validation, so `"ADR"` and `"adr"` describe
    /// the same edge.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - Any letter is not ASCII alphabetic
    /// - Any letter appears more than once, on any edge
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new(["adr", "meo", "bxu", "its"]).unwrap();
    /// assert_eq!(puzzle.letter_count(), 12);
    ///
    /// assert!(Puzzle::new(["ab", "bc"]).is_err());
    /// assert!(Puzzle::new(["a1"]).is_err());
    /// ```
    pub fn new<I, S>(edges: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        let mut letters = FxHashSet::default();

        for edge in edges {
            let mut side = Vec::new();
            for letter in edge.as_ref().chars() {
                let letter = letter.to_ascii_lowercase();
                if !letter.is_ascii_lowercase() {
                    return Err(PuzzleError::InvalidLetter(letter));
                }
                if !letters.insert(letter) {
                    return Err(PuzzleError::DuplicateLetter(letter));
                }
                side.push(letter);
            }
            parsed.push(side);
        }

        Ok(Self {
            edges: parsed,
            letters,
        })
    }

    /// Get the edges in entry order
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Vec<char>] {
        &self.edges
    }

    /// Get the set of all letters on the board
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// Number of distinct letters on the board
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// Number of edges on the board
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if a letter is on the board
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, edge) in self.edges.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            for letter in edge {
                write!(f, "{}", letter.to_ascii_uppercase())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_creation_valid() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        assert_eq!(puzzle.edge_count(), 2);
        assert_eq!(puzzle.letter_count(), 4);
        assert_eq!(puzzle.edges()[0], vec!['a', 'b']);
        assert_eq!(puzzle.edges()[1], vec!['c', 'd']);
    }

    #[test]
    fn puzzle_creation_uppercase_normalized() {
        let puzzle = Puzzle::new(["AB", "cD"]).unwrap();
        assert_eq!(puzzle.edges()[0], vec!['a', 'b']);
        assert_eq!(puzzle.edges()[1], vec!['c', 'd']);
        assert!(puzzle.contains('a'));
        assert!(puzzle.contains('d'));
    }

    #[test]
    fn puzzle_creation_duplicate_across_edges() {
        assert!(matches!(
            Puzzle::new(["ab", "bc"]),
            Err(PuzzleError::DuplicateLetter('b'))
        ));
    }

    #[test]
    fn puzzle_creation_duplicate_within_edge() {
        assert!(matches!(
            Puzzle::new(["aa", "cd"]),
            Err(PuzzleError::DuplicateLetter('a'))
        ));
    }

    #[test]
    fn puzzle_creation_invalid_letter() {
        assert!(matches!(
            Puzzle::new(["a1", "cd"]),
            Err(PuzzleError::InvalidLetter('1'))
        ));
        assert!(matches!(
            Puzzle::new(["a b"]),
            Err(PuzzleError::InvalidLetter(' '))
        ));
    }

    #[test]
    fn puzzle_creation_empty_edge() {
        let puzzle = Puzzle::new(["ab", ""]).unwrap();
        assert_eq!(puzzle.edge_count(), 2);
        assert_eq!(puzzle.letter_count(), 2);
    }

    #[test]
    fn puzzle_single_edge() {
        let puzzle = Puzzle::new(["abc"]).unwrap();
        assert_eq!(puzzle.edge_count(), 1);
        assert_eq!(puzzle.letter_count(), 3);
    }

    #[test]
    fn puzzle_contains() {
        let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
        assert!(puzzle.contains('a'));
        assert!(puzzle.contains('d'));
        assert!(!puzzle.contains('z'));
    }

    #[test]
    fn puzzle_display() {
        let puzzle = Puzzle::new(["adr", "meo", "bxu", "its"]).unwrap();
        assert_eq!(format!("{puzzle}"), "ADR MEO BXU ITS");
    }
}
