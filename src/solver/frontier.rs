//! Tiered search frontier
//!
//! Branches advance in rounds. Expansions that consume a fresh board letter
//! queue in the `next` tier, while letter reuse and word restarts are deferred.
//! The deferred tier is only promoted once every novel-letter branch has been
//! exhausted, so the first round that yields solutions yields minimal ones.

use super::branch::Branch;

/// Three-tier queue driving the staged breadth-first search
#[derive(Debug)]
pub(crate) struct Frontier<'t> {
    current: Vec<Branch<'t>>,
    next: Vec<Branch<'t>>,
    deferred: Vec<Branch<'t>>,
}

impl<'t> Frontier<'t> {
    /// Create a frontier with `branches` as the first round
    pub(crate) fn seeded(branches: Vec<Branch<'t>>) -> Self {
        Self {
            current: branches,
            next: Vec::new(),
            deferred: Vec::new(),
        }
    }

    /// The branches of the round in progress
    pub(crate) fn current(&self) -> &[Branch<'t>] {
        &self.current
    }

    /// Queue one round's expansion results
    pub(crate) fn absorb(&mut self, novel: Vec<Branch<'t>>, deferred: Vec<Branch<'t>>) {
        self.next.extend(novel);
        self.deferred.extend(deferred);
    }

    /// Promote the next round into `current`
    ///
    /// Novel-letter branches drain first. The deferred tier advances only when
    /// none remain, accumulating across rounds in the meantime. Returns false
    /// once both tiers are empty, which means the search space is exhausted.
    pub(crate) fn advance(&mut self) -> bool {
        if !self.next.is_empty() {
            self.current = std::mem::take(&mut self.next);
            return true;
        }
        if !self.deferred.is_empty() {
            self.current = std::mem::take(&mut self.deferred);
            return true;
        }
        self.current.clear();
        false
    }
}
