//! Ordered frontier of unsettled vertices for Prim's algorithm.
//!
//! Entries are `(cost, vertex)` pairs kept in a `BTreeSet`, so extraction
//! order depends only on the keys and never on insertion history.
//! Decrease-key is a remove followed by a reinsert.

use std::collections::BTreeSet;

use super::Cost;

#[derive(Debug, Default)]
pub(super) struct Frontier<'g> {
    entries: BTreeSet<(Cost<'g>, usize)>,
}

impl<'g> Frontier<'g> {
    pub(super) fn insert(&mut self, vertex: usize, cost: Cost<'g>) {
        self.entries.insert((cost, vertex));
    }

    /// Removes the cheapest vertex, lower id first on equal cost.
    pub(super) fn pop_min(&mut self) -> Option<(usize, Cost<'g>)> {
        self.entries.pop_first().map(|(cost, vertex)| (vertex, cost))
    }

    /// Moves `vertex` from `previous` to `next`. Returns `false` when the
    /// vertex was not queued under `previous`.
    pub(super) fn reprioritise(&mut self, vertex: usize, previous: Cost<'g>, next: Cost<'g>) -> bool {
        if !self.entries.remove(&(previous, vertex)) {
            return false;
        }
        self.entries.insert((next, vertex));
        true
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}
