//! Typed search errors.
//!
//! Branch-level conditions (frontier exhaustion, budget exhaustion, lose
//! pruning) are not errors: they are expressed by
//! [`crate::report::TerminationReasonV1`] and always yield a concluding node.
//! Only [`SearchError::EmptyLegalActions`] and pre-flight policy failures
//! reach the caller of [`crate::selector::choose_action`].

/// Typed failure for search operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// `Frontier::pop` was called on an empty frontier.
    #[error("pop from an empty frontier")]
    EmptyFrontier,
    /// The agent has no legal action in the current state.
    #[error("no legal actions available for the current state")]
    EmptyLegalActions,
    /// The search policy failed pre-flight validation.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
