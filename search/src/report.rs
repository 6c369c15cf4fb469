//! Per-branch expansion events and the per-turn decision report.
//!
//! The decision report is the auditable record of one `choose_action` call.
//! It serializes to canonical JSON (sorted keys, integer numbers only) and
//! carries a content digest, so identical inputs give byte-identical
//! reports.

use forage_kernel::proof::canon::{canonical_json_bytes, CanonError};
use forage_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::node::NodeId;
use crate::policy::SearchPolicyV1;

/// Why a branch stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A popped node was a win.
    WinFound { node_id: NodeId },
    /// A generated successor was a win (short-circuit).
    WinningSuccessor { node_id: NodeId },
    /// The expansion budget was used up while expanding `node_id`.
    BudgetExhausted { node_id: NodeId },
    /// Nothing left to pop; `node_id` is the last node popped.
    FrontierExhausted { node_id: NodeId },
    /// A lose state was met under `LosePolicyV1::PruneBranch`.
    LoseEncountered { node_id: NodeId },
}

impl TerminationReasonV1 {
    /// The node the branch concluded on.
    #[must_use]
    pub fn node_id(self) -> NodeId {
        match self {
            Self::WinFound { node_id }
            | Self::WinningSuccessor { node_id }
            | Self::BudgetExhausted { node_id }
            | Self::FrontierExhausted { node_id }
            | Self::LoseEncountered { node_id } => node_id,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::WinFound { .. } => "win_found",
            Self::WinningSuccessor { .. } => "winning_successor",
            Self::BudgetExhausted { .. } => "budget_exhausted",
            Self::FrontierExhausted { .. } => "frontier_exhausted",
            Self::LoseEncountered { .. } => "lose_encountered",
        }
    }

    #[must_use]
    pub fn to_json_value(self) -> serde_json::Value {
        serde_json::json!({"node_id": self.node_id(), "type": self.as_str()})
    }
}

/// One node expansion within a branch, in expansion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEventV1 {
    /// Total order of expansions within the branch.
    pub expansion_order: u64,
    /// The node whose children were generated.
    pub node_id: NodeId,
    pub depth: u32,
    pub f_cost: i64,
    /// Children pushed onto the frontier, in push order.
    pub children: Vec<NodeId>,
    /// Successors skipped because their state was already explored.
    pub duplicates_suppressed: u64,
    /// Lose successors skipped under `LosePolicyV1::SkipState`.
    pub lose_states_skipped: u64,
    /// True if the budget stopped this expansion before all successors.
    pub budget_cut: bool,
}

/// What happened to one candidate first action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcomeV1 {
    /// The one-step successor wins; chosen without any search.
    ImmediateWin,
    /// The one-step successor loses and the lose policy prunes it.
    LosingMove { score: i64 },
    /// The branch search found a winning successor.
    WinningSuccessor { expansions: u64, depth: u32 },
    /// The branch search concluded and was scored.
    Searched {
        termination: TerminationReasonV1,
        expansions: u64,
        frontier_high_water: u64,
        score: i64,
    },
    /// Never searched because the decision was made earlier.
    NotSearched,
}

impl CandidateOutcomeV1 {
    fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::ImmediateWin => serde_json::json!({"type": "immediate_win"}),
            Self::LosingMove { score } => {
                serde_json::json!({"score": score, "type": "losing_move"})
            }
            Self::WinningSuccessor { expansions, depth } => serde_json::json!({
                "depth": depth,
                "expansions": expansions,
                "type": "winning_successor",
            }),
            Self::Searched {
                termination,
                expansions,
                frontier_high_water,
                score,
            } => serde_json::json!({
                "expansions": expansions,
                "frontier_high_water": frontier_high_water,
                "score": score,
                "termination": termination.to_json_value(),
                "type": "searched",
            }),
            Self::NotSearched => serde_json::json!({"type": "not_searched"}),
        }
    }
}

/// A candidate first action with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecordV1 {
    /// Position in legal-action order.
    pub index: u64,
    /// Debug rendering of the action.
    pub action: String,
    pub outcome: CandidateOutcomeV1,
}

/// Why the chosen action was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionReasonV1 {
    /// Its one-step successor wins.
    ImmediateWin,
    /// Its branch found a winning successor.
    BranchShortCircuit,
    /// Its branch had the highest path score (first one on ties).
    BestScore,
}

impl DecisionReasonV1 {
    fn as_str(self) -> &'static str {
        match self {
            Self::ImmediateWin => "immediate_win",
            Self::BranchShortCircuit => "branch_short_circuit",
            Self::BestScore => "best_score",
        }
    }
}

/// The record of one per-turn decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionReportV1 {
    pub policy: SearchPolicyV1,
    /// One record per legal first action, in legal-action order.
    pub candidates: Vec<CandidateRecordV1>,
    pub chosen_index: u64,
    pub reason: DecisionReasonV1,
}

impl DecisionReportV1 {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let candidates: Vec<serde_json::Value> = self
            .candidates
            .iter()
            .map(|c| {
                serde_json::json!({
                    "action": c.action,
                    "index": c.index,
                    "outcome": c.outcome.to_json_value(),
                })
            })
            .collect();
        serde_json::json!({
            "candidates": candidates,
            "chosen_index": self.chosen_index,
            "policy": self.policy.to_json_value(),
            "reason": self.reason.as_str(),
        })
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails (only possible for
    /// non-integer numbers, which the report never contains).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from serialization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::DecisionReport, &bytes))
    }
}
