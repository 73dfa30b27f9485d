//! A single search branch
//!
//! A branch is one partial chain of words: the words already finished, the
//! word being spelled, and the trie node reached so far. Branches are
//! immutable snapshots, so expanding a frontier in parallel never mutates
//! shared state.

use rustc_hash::FxHashSet;

use crate::core::Trie;

/// One partial solution under construction
#[derive(Debug, Clone)]
pub(crate) struct Branch<'t> {
    /// Finished words, in play order
    closed: Vec<String>,
    /// The word currently being spelled, never empty
    open: String,
    /// Board letters consumed so far
    used: FxHashSet<char>,
    /// Edge holding the most recent letter
    edge: usize,
    /// Trie node matching the open word
    node: &'t Trie,
}

impl<'t> Branch<'t> {
    /// Start a branch from a single board letter
    pub(crate) fn start(letter: char, edge: usize, node: &'t Trie) -> Self {
        let mut used = FxHashSet::default();
        used.insert(letter);
        Self {
            closed: Vec::new(),
            open: letter.to_string(),
            used,
            edge,
            node,
        }
    }

    /// Snapshot with the open word extended by one letter
    pub(crate) fn extended(&self, letter: char, edge: usize, node: &'t Trie) -> Self {
        let mut next = self.clone();
        next.open.push(letter);
        next.used.insert(letter);
        next.edge = edge;
        next.node = node;
        next
    }

    /// Snapshot with the open word finished and a new word begun
    ///
    /// The new word starts from the final letter of the finished one, so the
    /// used letters and the current edge carry over unchanged.
    pub(crate) fn restarted(&self, node: &'t Trie) -> Self {
        let mut closed = self.closed.clone();
        closed.push(self.open.clone());
        Self {
            closed,
            open: self.last_letter().to_string(),
            used: self.used.clone(),
            edge: self.edge,
            node,
        }
    }

    /// Final letter of the open word
    ///
    /// # Panics
    /// Will not panic - branches are built from a seed letter and the open
    /// word never shrinks.
    pub(crate) fn last_letter(&self) -> char {
        self.open
            .chars()
            .next_back()
            .expect("open word is never empty")
    }

    /// The full chain, finished words followed by the open word
    pub(crate) fn path(&self) -> Vec<String> {
        let mut path = self.closed.clone();
        path.push(self.open.clone());
        path
    }

    /// Whether this branch has already consumed `letter`
    #[inline]
    pub(crate) fn uses(&self, letter: char) -> bool {
        self.used.contains(&letter)
    }

    /// Number of distinct board letters consumed
    #[inline]
    pub(crate) fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Edge holding the most recent letter
    #[inline]
    pub(crate) const fn edge(&self) -> usize {
        self.edge
    }

    /// Trie node matching the open word
    #[inline]
    pub(crate) const fn node(&self) -> &'t Trie {
        self.node
    }

    /// Words in the chain, counting the open one
    #[inline]
    pub(crate) fn word_count(&self) -> usize {
        self.closed.len() + 1
    }
}
