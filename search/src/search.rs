//! Branch search: bounded expansion from one candidate successor.
//!
//! One engine serves all strategies; the [`Frontier`] variant chosen from the
//! policy decides the pop order.
//!
//! # Budget
//!
//! The expansion counter counts generated successors whose state was not yet
//! explored. It is checked before each such successor: once it has reached
//! `max_expansions`, the current expansion stops and the branch concludes at
//! the node being expanded. A full expansion that lands exactly on the cap
//! concludes the branch as well. The counter therefore never exceeds the cap.

use log::{debug, trace};

use crate::contract::StateGraphView;
use crate::error::SearchError;
use crate::explored::ExploredSet;
use crate::frontier::Frontier;
use crate::node::{NodeId, NodePool};
use crate::policy::{LosePolicyV1, SearchPolicyV1, StrategyV1};
use crate::report::{ExpandEventV1, TerminationReasonV1};
use crate::scorer::Evaluator;

/// Result of one branch search.
///
/// Owns the branch's node pool so the caller can score or reconstruct the
/// concluding path; everything else the branch used has been dropped.
#[derive(Debug)]
pub struct BranchResult<S, A> {
    /// Why the branch stopped; names the concluding node.
    pub termination: TerminationReasonV1,
    /// The action that produced a winning successor (short-circuit only).
    pub winning_action: Option<A>,
    /// Every node created, indexed by `node_id`.
    pub nodes: NodePool<S, A>,
    /// Expansion events in expansion order.
    pub events: Vec<ExpandEventV1>,
    /// Final value of the expansion counter.
    pub expansions: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl<S, A> BranchResult<S, A> {
    /// Returns `true` if the branch found a winning successor.
    #[must_use]
    pub fn is_short_circuit(&self) -> bool {
        self.winning_action.is_some()
    }

    /// The node the branch concluded on.
    #[must_use]
    pub fn concluding_node(&self) -> NodeId {
        self.termination.node_id()
    }
}

/// Run one branch search rooted at `root_state`.
///
/// Branch-level conditions never fail: frontier exhaustion, budget
/// exhaustion and lose pruning all return `Ok` with a concluding node.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails pre-flight
/// validation. No search step is taken in that case.
#[allow(clippy::too_many_lines)]
pub fn run_branch<W, E>(
    root_state: W::State,
    world: &W,
    evaluator: &E,
    policy: &SearchPolicyV1,
) -> Result<BranchResult<W::State, W::Action>, SearchError>
where
    W: StateGraphView + ?Sized,
    E: Evaluator<W::State> + ?Sized,
{
    policy.validate()?;

    let mut frontier = Frontier::for_strategy(policy.strategy);
    let mut explored: ExploredSet<W::State> = ExploredSet::new();
    let mut nodes: NodePool<W::State, W::Action> = NodePool::with_root(root_state);
    let mut events: Vec<ExpandEventV1> = Vec::new();
    let mut expansions: u64 = 0;
    let mut last_popped: NodeId = 0;

    frontier.push(nodes.root());

    let termination = 'search: loop {
        if frontier.is_empty() {
            break TerminationReasonV1::FrontierExhausted {
                node_id: last_popped,
            };
        }
        let current_id = frontier.pop()?;
        last_popped = current_id;

        let Some(current) = nodes.get(current_id) else {
            // Ids only come from the pool; treat a stray id as exhausted.
            break TerminationReasonV1::FrontierExhausted {
                node_id: last_popped,
            };
        };
        let state = current.state.clone();
        let (depth, f_cost) = (current.depth, current.f_cost());

        if !explored.add(state.clone()) {
            trace!("node {current_id}: state already explored, discarded");
            continue;
        }

        if world.is_win(&state) {
            break TerminationReasonV1::WinFound {
                node_id: current_id,
            };
        }
        if policy.lose_policy == LosePolicyV1::PruneBranch && world.is_lose(&state) {
            break TerminationReasonV1::LoseEncountered {
                node_id: current_id,
            };
        }

        let mut event = ExpandEventV1 {
            expansion_order: events.len() as u64,
            node_id: current_id,
            depth,
            f_cost,
            children: Vec::new(),
            duplicates_suppressed: 0,
            lose_states_skipped: 0,
            budget_cut: false,
        };

        for action in world.legal_actions(&state) {
            if policy.budget_reached(expansions) {
                event.budget_cut = true;
                break;
            }
            let child_state = world.successor(&state, &action);
            if explored.contains(&child_state) {
                event.duplicates_suppressed += 1;
                continue;
            }
            expansions += 1;

            if world.is_win(&child_state) {
                let child_id = nodes.add_child(current_id, action.clone(), child_state, 0);
                events.push(event);
                debug!(
                    "branch short-circuit: winning successor at depth {} after {expansions} expansions",
                    depth + 1
                );
                return Ok(BranchResult {
                    termination: TerminationReasonV1::WinningSuccessor {
                        node_id: child_id.unwrap_or(current_id),
                    },
                    winning_action: Some(action),
                    nodes,
                    events,
                    expansions,
                    frontier_high_water: frontier.high_water() as u64,
                });
            }

            if world.is_lose(&child_state) {
                match policy.lose_policy {
                    LosePolicyV1::Expand => {}
                    LosePolicyV1::SkipState => {
                        event.lose_states_skipped += 1;
                        continue;
                    }
                    LosePolicyV1::PruneBranch => {
                        events.push(event);
                        break 'search TerminationReasonV1::LoseEncountered {
                            node_id: current_id,
                        };
                    }
                }
            }

            let eval_term = match policy.strategy {
                StrategyV1::BestFirst => evaluator.evaluate(&child_state).saturating_neg(),
                StrategyV1::BreadthFirst | StrategyV1::DepthFirst => 0,
            };
            if let Some(child_id) = nodes.add_child(current_id, action, child_state, eval_term) {
                if let Some(child) = nodes.get(child_id) {
                    frontier.push(child);
                }
                event.children.push(child_id);
            }
        }

        trace!(
            "expanded node {current_id} (depth {depth}): {} children, {} duplicates, counter {expansions}",
            event.children.len(),
            event.duplicates_suppressed
        );
        events.push(event);

        if policy.budget_reached(expansions) {
            break TerminationReasonV1::BudgetExhausted {
                node_id: current_id,
            };
        }
    };

    debug!(
        "branch concluded: {termination:?} after {expansions} expansions, {} nodes",
        nodes.len()
    );

    Ok(BranchResult {
        termination,
        winning_action: None,
        nodes,
        events,
        expansions,
        frontier_high_water: frontier.high_water() as u64,
    })
}
