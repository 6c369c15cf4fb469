//! Explored set: states whose children have already been generated.

use std::collections::HashSet;
use std::hash::Hash;

/// Set of expanded states, keyed by full state-value equality.
///
/// Only grows. Two structurally identical configurations are one entry no
/// matter which path reached them.
#[derive(Debug, Clone)]
pub struct ExploredSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> ExploredSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Insert `state`. Returns `false` (and changes nothing) if it was
    /// already present.
    pub fn add(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
