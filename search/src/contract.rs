//! World contract consumed by the search core.

use std::fmt::Debug;
use std::hash::Hash;

/// A deterministic, fully observable, turn-based world.
///
/// # Contract
///
/// - `legal_actions` is deterministic: same state, same actions, same order.
///   Terminal states may return an empty list.
/// - `successor` is only called with actions returned by `legal_actions`
///   for the same state.
/// - `State` equality and hashing cover the full world configuration
///   (positions of every entity plus remaining objectives), independent of
///   the path that produced it.
pub trait StateGraphView {
    /// Full world configuration.
    type State: Clone + Eq + Hash;
    /// One agent move.
    type Action: Clone + Eq + Debug;

    /// Legal agent actions from `state`, in enumeration order.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` to `state`.
    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` is a win for the agent.
    fn is_win(&self, state: &Self::State) -> bool;

    /// Whether `state` is a loss for the agent.
    fn is_lose(&self, state: &Self::State) -> bool;
}
