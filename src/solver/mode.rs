//! Search modes
//!
//! The engine always hunts for the fewest total letters; modes only differ in
//! whether a branch may open a third word.

use std::fmt;

/// Which solutions the search engine hunts for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveMode {
    /// Fewest total letters, with any number of chained words
    #[default]
    MinLetters,
    /// Fewest total letters among solutions of at most two words
    TwoWords,
}

impl SolveMode {
    /// Parse a mode from its command line name
    ///
    /// Unknown names fall back to `MinLetters`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "two-words" | "two" => Self::TwoWords,
            _ => Self::MinLetters,
        }
    }

    /// Whether a branch already holding `word_count` words may start another
    #[must_use]
    pub const fn allows_restart(self, word_count: usize) -> bool {
        match self {
            Self::MinLetters => true,
            Self::TwoWords => word_count < 2,
        }
    }
}

impl fmt::Display for SolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLetters => write!(f, "min-letters"),
            Self::TwoWords => write!(f, "two-words"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_recognizes_two_words() {
        assert_eq!(SolveMode::from_name("two-words"), SolveMode::TwoWords);
        assert_eq!(SolveMode::from_name("two"), SolveMode::TwoWords);
        assert_eq!(SolveMode::from_name("TWO-WORDS"), SolveMode::TwoWords);
    }

    #[test]
    fn from_name_defaults_to_min_letters() {
        assert_eq!(SolveMode::from_name("min-letters"), SolveMode::MinLetters);
        assert_eq!(SolveMode::from_name("anything"), SolveMode::MinLetters);
        assert_eq!(SolveMode::from_name(""), SolveMode::MinLetters);
    }

    #[test]
    fn min_letters_always_allows_restart() {
        assert!(SolveMode::MinLetters.allows_restart(1));
        assert!(SolveMode::MinLetters.allows_restart(5));
    }

    #[test]
    fn two_words_caps_the_chain() {
        assert!(SolveMode::TwoWords.allows_restart(1));
        assert!(!SolveMode::TwoWords.allows_restart(2));
        assert!(!SolveMode::TwoWords.allows_restart(3));
    }

    #[test]
    fn display_names_match_cli() {
        assert_eq!(SolveMode::MinLetters.to_string(), "min-letters");
        assert_eq!(SolveMode::TwoWords.to_string(), "two-words");
    }
}
