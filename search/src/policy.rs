//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Counted successors allowed per branch unless configured otherwise.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 50;

/// Frontier discipline for a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyV1 {
    /// FIFO frontier.
    BreadthFirst,
    /// LIFO frontier.
    DepthFirst,
    /// Priority frontier keyed by `cost_so_far + eval_term`.
    BestFirst,
}

impl StrategyV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyV1::BreadthFirst => "breadth_first",
            StrategyV1::DepthFirst => "depth_first",
            StrategyV1::BestFirst => "best_first",
        }
    }
}

/// How lose states are treated during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LosePolicyV1 {
    /// Lose states are ordinary states; they end up as dead ends.
    #[default]
    Expand,
    /// Lose successors are counted but never pushed. A losing first move
    /// scores `i64::MIN` without search.
    SkipState,
    /// The first lose state met concludes the branch, which then scores
    /// `i64::MIN`. A losing first move scores `i64::MIN` without search.
    PruneBranch,
}

impl LosePolicyV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LosePolicyV1::Expand => "expand",
            LosePolicyV1::SkipState => "skip_state",
            LosePolicyV1::PruneBranch => "prune_branch",
        }
    }
}

/// Per-turn search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicyV1 {
    /// Frontier discipline.
    pub strategy: StrategyV1,
    /// Hard cap on counted successors per branch. `None` disables the cap;
    /// termination then relies on explored-set dedup over a finite graph.
    pub max_expansions: Option<u64>,
    /// Lose-state handling.
    pub lose_policy: LosePolicyV1,
}

impl SearchPolicyV1 {
    #[must_use]
    pub fn with_strategy(strategy: StrategyV1) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Validate before any search step runs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be positive (use null to disable the cap)".into(),
            });
        }
        Ok(())
    }

    /// Whether `expansions` counted successors have used up the budget.
    #[must_use]
    pub fn budget_reached(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|cap| expansions >= cap)
    }

    /// Policy echo for decision reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "lose_policy": self.lose_policy.as_str(),
            "max_expansions": self.max_expansions,
            "strategy": self.strategy.as_str(),
        })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            strategy: StrategyV1::BreadthFirst,
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
            lose_policy: LosePolicyV1::Expand,
        }
    }
}
