//! Agents: turn-by-turn action choosers over any [`StateGraphView`].
//!
//! All agents see the same contract. Only [`SearchAgent`] produces a
//! decision report; the baselines exist to compare against it.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use forage_search::contract::StateGraphView;
use forage_search::error::SearchError;
use forage_search::policy::SearchPolicyV1;
use forage_search::report::DecisionReportV1;
use forage_search::scorer::Evaluator;
use forage_search::selector::choose_action;

/// One decision per turn.
pub trait AgentV1<W: StateGraphView + ?Sized> {
    /// Short identifier used in summaries (e.g. `"bfs"`).
    fn name(&self) -> &str;

    /// Choose an action for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyLegalActions`] when `state` has no legal
    /// action, or any error from the underlying search.
    fn choose(&mut self, world: &W, state: &W::State) -> Result<W::Action, SearchError>;

    /// Report behind the most recent choice, if the agent keeps one.
    fn last_report(&self) -> Option<&DecisionReportV1> {
        None
    }
}

/// Bounded per-turn search.
#[derive(Debug, Clone)]
pub struct SearchAgent<E> {
    policy: SearchPolicyV1,
    evaluator: E,
    last_report: Option<DecisionReportV1>,
}

impl<E> SearchAgent<E> {
    #[must_use]
    pub fn new(policy: SearchPolicyV1, evaluator: E) -> Self {
        Self {
            policy,
            evaluator,
            last_report: None,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicyV1 {
        &self.policy
    }
}

impl<W, E> AgentV1<W> for SearchAgent<E>
where
    W: StateGraphView + ?Sized,
    E: Evaluator<W::State>,
{
    fn name(&self) -> &str {
        self.policy.strategy.as_str()
    }

    fn choose(&mut self, world: &W, state: &W::State) -> Result<W::Action, SearchError> {
        let decision = choose_action(world, state, &self.evaluator, &self.policy)?;
        debug!(
            "{} chose candidate {} ({:?})",
            self.policy.strategy.as_str(),
            decision.report.chosen_index,
            decision.reason
        );
        self.last_report = Some(decision.report);
        Ok(decision.action)
    }

    fn last_report(&self) -> Option<&DecisionReportV1> {
        self.last_report.as_ref()
    }
}

/// One-ply lookahead: the successor with the best evaluation, random among
/// ties.
#[derive(Debug, Clone)]
pub struct GreedyAgent<E> {
    evaluator: E,
    rng: StdRng,
}

impl<E> GreedyAgent<E> {
    #[must_use]
    pub fn new(evaluator: E, seed: u64) -> Self {
        Self {
            evaluator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<W, E> AgentV1<W> for GreedyAgent<E>
where
    W: StateGraphView + ?Sized,
    E: Evaluator<W::State>,
{
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose(&mut self, world: &W, state: &W::State) -> Result<W::Action, SearchError> {
        let scored: Vec<(W::Action, i64)> = world
            .legal_actions(state)
            .into_iter()
            .map(|a| {
                let value = self.evaluator.evaluate(&world.successor(state, &a));
                (a, value)
            })
            .collect();
        let best = scored
            .iter()
            .map(|(_, v)| *v)
            .max()
            .ok_or(SearchError::EmptyLegalActions)?;
        let ties: Vec<&W::Action> = scored
            .iter()
            .filter(|(_, v)| *v == best)
            .map(|(a, _)| a)
            .collect();
        ties.choose(&mut self.rng)
            .map(|a| (*a).clone())
            .ok_or(SearchError::EmptyLegalActions)
    }
}

/// Uniformly random legal action.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<W> AgentV1<W> for RandomAgent
where
    W: StateGraphView + ?Sized,
{
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, world: &W, state: &W::State) -> Result<W::Action, SearchError> {
        world
            .legal_actions(state)
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SearchError::EmptyLegalActions)
    }
}
