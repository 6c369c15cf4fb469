//! Forage harness: worlds, agents and the episode loop around the search
//! crate.
//!
//! The harness owns orchestration only. Search semantics live in
//! `forage-search`; game rules live in `forage-kernel`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agents;
pub mod config;
pub mod runner;
pub mod worlds;
