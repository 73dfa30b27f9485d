//! Prefix tree over dictionary words
//!
//! Each node owns its children outright, so a trie is always tree shaped and
//! can be pruned into a fresh trie without touching the original. The serde
//! field names match the JSON dictionary interchange format (`children`,
//! `isEnd`).

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::Adjacency;

/// A prefix tree node
///
/// The root represents the empty prefix and is never a word end. Every path
/// from the root to a node flagged `is_end` spells one dictionary word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trie {
    children: FxHashMap<char, Trie>,
    is_end: bool,
}

/// Summary counts for a trie
///
/// `max_depth` counts nodes along the deepest path, so an empty trie has depth
/// one (the root) and a trie holding "cat" has depth four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieStatistics {
    pub word_count: usize,
    pub node_count: usize,
    pub max_depth: usize,
}

impl Trie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from an iterator of words
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Trie;
    ///
    /// let trie = Trie::from_words(["cat", "car"]);
    /// assert!(trie.contains("cat"));
    /// assert!(trie.contains("car"));
    /// assert!(!trie.contains("ca"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word, creating intermediate nodes as needed
    ///
    /// Inserting the empty string is a no-op, so the root never becomes a
    /// word end.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = self;
        for letter in word.chars() {
            node = node.children.entry(letter).or_default();
        }
        node.is_end = true;
    }

    /// Check whether the trie contains `word` as a complete word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut node = self;
        for letter in word.chars() {
            match node.children.get(&letter) {
                Some(child) => node = child,
                None => return false,
            }
        }
        !word.is_empty() && node.is_end
    }

    /// Get the child node for a letter, if present
    #[inline]
    #[must_use]
    pub fn child(&self, letter: char) -> Option<&Trie> {
        self.children.get(&letter)
    }

    /// Whether this node completes a word
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.is_end
    }

    /// Whether the trie holds no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && !self.is_end
    }

    /// Prune the trie down to words playable on a board
    ///
    /// Returns a fresh trie containing exactly the words whose consecutive
    /// letter pairs all pass the adjacency check. Interior nodes left with no
    /// word end below them are dropped along the way. The original trie is
    /// untouched, and pruning an already pruned trie returns an equal trie.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{Adjacency, Puzzle, Trie};
    ///
    /// let puzzle = Puzzle::new(["ab", "cd"]).unwrap();
    /// let adjacency = Adjacency::from_puzzle(&puzzle);
    /// let trie = Trie::from_words(["acb", "ab", "cad"]);
    ///
    /// let pruned = trie.prune(&adjacency);
    /// assert!(pruned.contains("acb"));
    /// assert!(pruned.contains("cad"));
    /// assert!(!pruned.contains("ab")); // 'a' and 'b' share an edge
    /// ```
    #[must_use]
    pub fn prune(&self, adjacency: &Adjacency) -> Trie {
        self.prune_from(adjacency, None)
    }

    fn prune_from(&self, adjacency: &Adjacency, previous: Option<char>) -> Trie {
        let mut pruned = Trie {
            children: FxHashMap::default(),
            is_end: self.is_end,
        };

        for (&letter, child) in &self.children {
            if !adjacency.accepts(letter, previous) {
                continue;
            }
            let kept = child.prune_from(adjacency, Some(letter));
            if kept.is_end || !kept.children.is_empty() {
                pruned.children.insert(letter, kept);
            }
        }

        pruned
    }

    /// Compute word, node, and depth counts in one walk
    #[must_use]
    pub fn statistics(&self) -> TrieStatistics {
        let mut stats = TrieStatistics {
            word_count: 0,
            node_count: 0,
            max_depth: 0,
        };
        self.collect_statistics(1, &mut stats);
        stats
    }

    fn collect_statistics(&self, depth: usize, stats: &mut TrieStatistics) {
        stats.node_count += 1;
        stats.max_depth = stats.max_depth.max(depth);
        if self.is_end {
            stats.word_count += 1;
        }
        for child in self.children.values() {
            child.collect_statistics(depth + 1, stats);
        }
    }

    /// Collect the distinct letters appearing anywhere in the trie
    #[must_use]
    pub fn letters(&self) -> FxHashSet<char> {
        let mut letters = FxHashSet::default();
        self.collect_letters(&mut letters);
        letters
    }

    fn collect_letters(&self, letters: &mut FxHashSet<char>) {
        for (&letter, child) in &self.children {
            letters.insert(letter);
            child.collect_letters(letters);
        }
    }

    /// List every word in the trie, sorted
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut prefix = String::new();
        self.collect_words(&mut prefix, &mut words);
        words.sort_unstable();
        words
    }

    fn collect_words(&self, prefix: &mut String, words: &mut Vec<String>) {
        if self.is_end {
            words.push(prefix.clone());
        }
        for (&letter, child) in &self.children {
            prefix.push(letter);
            child.collect_words(prefix, words);
            prefix.pop();
        }
    }
}
