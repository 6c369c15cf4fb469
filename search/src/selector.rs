//! Per-turn entry point: pick one action for the current state.

use log::{debug, warn};

use crate::contract::StateGraphView;
use crate::error::SearchError;
use crate::policy::{LosePolicyV1, SearchPolicyV1};
use crate::report::{
    CandidateOutcomeV1, CandidateRecordV1, DecisionReasonV1, DecisionReportV1, TerminationReasonV1,
};
use crate::scorer::{path_score, Evaluator, LOST_SCORE};
use crate::search::run_branch;

/// The chosen action with its audit record.
#[derive(Debug, Clone)]
pub struct DecisionV1<A> {
    pub action: A,
    pub reason: DecisionReasonV1,
    pub report: DecisionReportV1,
}

/// Choose one action for `state`.
///
/// 1. A first action whose successor wins is returned at once, before any
///    branch is searched.
/// 2. Otherwise every candidate's successor is searched in legal-action
///    order. A branch that finds a winning successor returns its candidate
///    immediately.
/// 3. Otherwise the candidate with the highest path score wins; ties go to
///    the first candidate encountered.
///
/// # Errors
///
/// Returns [`SearchError::EmptyLegalActions`] if `state` has no legal
/// action, and [`SearchError::InvalidPolicy`] if the policy is invalid.
pub fn choose_action<W, E>(
    world: &W,
    state: &W::State,
    evaluator: &E,
    policy: &SearchPolicyV1,
) -> Result<DecisionV1<W::Action>, SearchError>
where
    W: StateGraphView + ?Sized,
    E: Evaluator<W::State> + ?Sized,
{
    policy.validate()?;

    let actions = world.legal_actions(state);
    if actions.is_empty() {
        return Err(SearchError::EmptyLegalActions);
    }

    let successors: Vec<(W::Action, W::State)> = actions
        .into_iter()
        .map(|a| {
            let next = world.successor(state, &a);
            (a, next)
        })
        .collect();

    let mut candidates: Vec<CandidateRecordV1> = successors
        .iter()
        .enumerate()
        .map(|(i, (a, _))| CandidateRecordV1 {
            index: i as u64,
            action: format!("{a:?}"),
            outcome: CandidateOutcomeV1::NotSearched,
        })
        .collect();

    if let Some(i) = successors.iter().position(|(_, s)| world.is_win(s)) {
        candidates[i].outcome = CandidateOutcomeV1::ImmediateWin;
        debug!("immediate win: {}", candidates[i].action);
        return Ok(decide(&successors, candidates, i, DecisionReasonV1::ImmediateWin, policy));
    }

    let mut best: Option<(usize, i64)> = None;
    for (i, (_, next)) in successors.iter().enumerate() {
        let score = if policy.lose_policy != LosePolicyV1::Expand && world.is_lose(next) {
            candidates[i].outcome = CandidateOutcomeV1::LosingMove { score: LOST_SCORE };
            LOST_SCORE
        } else {
            let branch = run_branch(next.clone(), world, evaluator, policy)?;
            if branch.is_short_circuit() {
                let depth = branch
                    .nodes
                    .get(branch.concluding_node())
                    .map_or(0, |n| n.depth);
                candidates[i].outcome = CandidateOutcomeV1::WinningSuccessor {
                    expansions: branch.expansions,
                    depth,
                };
                debug!(
                    "branch {} short-circuits on a win at depth {depth}",
                    candidates[i].action
                );
                return Ok(decide(
                    &successors,
                    candidates,
                    i,
                    DecisionReasonV1::BranchShortCircuit,
                    policy,
                ));
            }
            let score = match branch.termination {
                TerminationReasonV1::LoseEncountered { .. } => LOST_SCORE,
                other => path_score(&branch.nodes, other.node_id(), evaluator),
            };
            candidates[i].outcome = CandidateOutcomeV1::Searched {
                termination: branch.termination,
                expansions: branch.expansions,
                frontier_high_water: branch.frontier_high_water,
                score,
            };
            score
        };
        debug!("candidate {} scored {score}", candidates[i].action);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((i, score));
        }
    }

    let (chosen, score) = best.ok_or(SearchError::EmptyLegalActions)?;
    if score == LOST_SCORE {
        warn!("every candidate loses; choosing the first");
    }
    Ok(decide(&successors, candidates, chosen, DecisionReasonV1::BestScore, policy))
}

fn decide<A: Clone, S>(
    successors: &[(A, S)],
    candidates: Vec<CandidateRecordV1>,
    chosen: usize,
    reason: DecisionReasonV1,
    policy: &SearchPolicyV1,
) -> DecisionV1<A> {
    DecisionV1 {
        action: successors[chosen].0.clone(),
        reason,
        report: DecisionReportV1 {
            policy: policy.clone(),
            candidates,
            chosen_index: chosen as u64,
            reason,
        },
    }
}
