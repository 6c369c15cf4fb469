//! Search nodes and the per-branch node pool.

/// Identifier of a node within one branch's [`NodePool`]. Assigned in
/// creation order starting at 0 (the root).
pub type NodeId = u64;

/// A node in one branch's search tree.
///
/// Ordering for the priority frontier uses [`FrontierKey`]:
/// `f_cost = cost_so_far + eval_term`, ties broken by push order.
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S, A> {
    /// Position in the pool; also the creation order.
    pub node_id: NodeId,
    /// Parent node (`None` for the branch root).
    pub parent_id: Option<NodeId>,
    /// The action that produced this node from its parent (`None` for root).
    pub action: Option<A>,
    /// Full world configuration at this node.
    pub state: S,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Path cost from the branch root (+1 per step).
    pub cost_so_far: i64,
    /// Strategy-specific ordering term (0 unless best-first).
    pub eval_term: i64,
}

impl<S, A> SearchNodeV1<S, A> {
    /// `cost_so_far + eval_term` (the priority frontier key).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.cost_so_far.saturating_add(self.eval_term)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.action.is_none()
    }
}

/// The priority frontier key: `(f_cost, push order)`, lower first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f_cost: i64,
    /// Position in the frontier's push sequence.
    pub push_seq: u64,
    pub node_id: NodeId,
}

impl FrontierKey {
    #[must_use]
    pub fn new<S, A>(node: &SearchNodeV1<S, A>, push_seq: u64) -> Self {
        Self {
            f_cost: node.f_cost(),
            push_seq,
            node_id: node.node_id,
        }
    }
}

/// Arena owning every node of one branch.
///
/// Parent links are ids into the same pool and always point at an earlier
/// node, so every parent chain ends at the root.
#[derive(Debug, Clone)]
pub struct NodePool<S, A> {
    nodes: Vec<SearchNodeV1<S, A>>,
}

impl<S, A> NodePool<S, A> {
    /// Create a pool holding only the root node (id 0).
    #[must_use]
    pub fn with_root(state: S) -> Self {
        Self {
            nodes: vec![SearchNodeV1 {
                node_id: 0,
                parent_id: None,
                action: None,
                state,
                depth: 0,
                cost_so_far: 0,
                eval_term: 0,
            }],
        }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &SearchNodeV1<S, A> {
        &self.nodes[0]
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNodeV1<S, A>> {
        usize::try_from(id).ok().and_then(|i| self.nodes.get(i))
    }

    /// Add a child of `parent` and return its id.
    ///
    /// Returns `None` if `parent` is not in the pool.
    pub fn add_child(&mut self, parent: NodeId, action: A, state: S, eval_term: i64) -> Option<NodeId> {
        let (depth, cost_so_far) = {
            let p = self.get(parent)?;
            (p.depth + 1, p.cost_so_far.saturating_add(1))
        };
        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(SearchNodeV1 {
            node_id,
            parent_id: Some(parent),
            action: Some(action),
            state,
            depth,
            cost_so_far,
            eval_term,
        });
        Some(node_id)
    }

    /// Iterate from `id` up to and including the root.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &SearchNodeV1<S, A>> {
        std::iter::successors(self.get(id), move |n| n.parent_id.and_then(|p| self.get(p)))
    }

    /// Actions from the root down to `id`.
    #[must_use]
    pub fn path_actions(&self, id: NodeId) -> Vec<&A> {
        let mut actions: Vec<&A> = self.ancestry(id).filter_map(|n| n.action.as_ref()).collect();
        actions.reverse();
        actions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a pool is created with its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
