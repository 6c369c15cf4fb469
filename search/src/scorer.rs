//! Position evaluation and path scoring.

use crate::node::{NodeId, NodePool};

/// Score of a candidate known to lose. [`path_score`] never returns it, so
/// any searched branch outranks a lost one.
pub const LOST_SCORE: i64 = i64::MIN;

/// Pure position evaluator: higher is better.
///
/// Implementations must be side-effect free; the engine may call them any
/// number of times per turn.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> i64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> i64,
{
    fn evaluate(&self, state: &S) -> i64 {
        self(state)
    }
}

/// Sum of evaluations along the parent chain from `node_id` up to, but
/// excluding, the branch root.
///
/// This is a path integral over every intermediate state, not the value of
/// the best leaf: a branch that passes through many well-scored states
/// outranks one that merely ends on a single good state. The root alone
/// scores 0, as does an id missing from the pool. Sums saturate, and the
/// low end stops one above [`LOST_SCORE`].
#[must_use]
pub fn path_score<S, A, E>(nodes: &NodePool<S, A>, node_id: NodeId, evaluator: &E) -> i64
where
    E: Evaluator<S> + ?Sized,
{
    nodes
        .ancestry(node_id)
        .take_while(|n| !n.is_root())
        .fold(0i64, |acc, n| acc.saturating_add(evaluator.evaluate(&n.state)))
        .max(LOST_SCORE + 1)
}
