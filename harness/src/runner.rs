//! Episode runner: drive one agent through a world until the game ends.
//!
//! # Loop
//!
//! ```text
//! state = initial
//! while !win && !lose && turns < max_turns:
//!     action = agent.choose(world, state)   → decision report digest
//!     state  = world.successor(state, action)
//! ```

use log::{debug, info};

use forage_kernel::proof::canon::CanonError;
use forage_search::contract::StateGraphView;
use forage_search::error::SearchError;
use forage_search::scorer::Evaluator;

use crate::agents::AgentV1;

/// Error during an episode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error("agent failed on turn {turn}: {source}")]
    Agent {
        turn: u32,
        #[source]
        source: SearchError,
    },
    #[error("decision report on turn {turn} could not be hashed: {source}")]
    Report {
        turn: u32,
        #[source]
        source: CanonError,
    },
}

/// How an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeOutcomeV1 {
    Won,
    Lost,
    TurnLimit,
}

impl EpisodeOutcomeV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EpisodeOutcomeV1::Won => "won",
            EpisodeOutcomeV1::Lost => "lost",
            EpisodeOutcomeV1::TurnLimit => "turn_limit",
        }
    }
}

/// Result of [`run_episode`].
#[derive(Debug, Clone)]
pub struct EpisodeV1<S, A> {
    pub turns: u32,
    pub outcome: EpisodeOutcomeV1,
    /// World evaluation of `final_state`.
    pub final_score: i64,
    pub final_state: S,
    pub actions: Vec<A>,
    /// One `sha256:` digest per turn for agents that keep decision reports.
    pub decision_digests: Vec<String>,
}

impl<S, A> EpisodeV1<S, A> {
    /// JSON summary with actions rendered by `label`.
    pub fn to_json_value(&self, label: impl Fn(&A) -> String) -> serde_json::Value {
        serde_json::json!({
            "turns": self.turns,
            "outcome": self.outcome.as_str(),
            "final_score": self.final_score,
            "actions": self.actions.iter().map(label).collect::<Vec<_>>(),
            "decision_digests": self.decision_digests,
        })
    }
}

/// Play `agent` from `initial` until win, lose or `max_turns` moves.
///
/// A state that is already terminal ends the episode after zero turns.
///
/// # Errors
///
/// Returns [`RunError::Agent`] if the agent cannot choose, and
/// [`RunError::Report`] if a decision report cannot be digested.
pub fn run_episode<W, G>(
    world: &W,
    agent: &mut G,
    initial: W::State,
    max_turns: u32,
) -> Result<EpisodeV1<W::State, W::Action>, RunError>
where
    W: StateGraphView + Evaluator<W::State>,
    G: AgentV1<W> + ?Sized,
{
    let mut state = initial;
    let mut actions = Vec::new();
    let mut decision_digests = Vec::new();
    let mut turns = 0u32;

    let outcome = loop {
        if world.is_win(&state) {
            break EpisodeOutcomeV1::Won;
        }
        if world.is_lose(&state) {
            break EpisodeOutcomeV1::Lost;
        }
        if turns >= max_turns {
            break EpisodeOutcomeV1::TurnLimit;
        }

        let action = agent
            .choose(world, &state)
            .map_err(|source| RunError::Agent { turn: turns, source })?;
        if let Some(report) = agent.last_report() {
            let digest = report
                .digest()
                .map_err(|source| RunError::Report { turn: turns, source })?;
            decision_digests.push(digest.to_string());
        }
        debug!("turn {turns}: {} plays {action:?}", agent.name());

        state = world.successor(&state, &action);
        actions.push(action);
        turns += 1;
    };

    let final_score = world.evaluate(&state);
    info!(
        "episode over: {} after {turns} turns, score {final_score}",
        outcome.as_str()
    );
    Ok(EpisodeV1 {
        turns,
        outcome,
        final_score,
        final_state: state,
        actions,
        decision_digests,
    })
}
