//! Forage Search: bounded per-turn graph search for a single agent.
//!
//! This crate is the decision core. It depends only on `forage_kernel`
//! (for report hashing); worlds and evaluators are supplied by the caller.
//!
//! # Crate dependency graph
//!
//! ```text
//! forage_kernel  ←  forage_search  ←  forage_harness
//! (maze, proof)     (engine, selector)  (worlds, agents, runner)
//! ```
//!
//! # Per-turn flow
//!
//! [`selector::choose_action`] → per candidate [`search::run_branch`] →
//! [`scorer::path_score`] → ranking. Nothing survives the call.
//!
//! # Key types
//!
//! - [`contract::StateGraphView`] -- world contract (actions, successors, win/lose)
//! - [`scorer::Evaluator`] -- pure position evaluator
//! - [`frontier::Frontier`] -- FIFO / LIFO / priority disciplines
//! - [`explored::ExploredSet`] -- value-equality dedup of expanded states
//! - [`policy::SearchPolicyV1`] -- strategy, budget and lose policy
//! - [`report::DecisionReportV1`] -- auditable record of one decision

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod scorer;
pub mod search;
pub mod selector;
