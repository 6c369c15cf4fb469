//! Forage Kernel: the deterministic world model and proof utilities.
//!
//! # API Surface
//!
//! - [`maze::layout::Layout::parse`] -- parse a maze into walls and an initial state
//! - [`maze::rules::apply_move`] -- advance a `MazeState` by one turn
//! - [`proof::hash::canonical_hash`] -- domain-separated content hashing
//!
//! # Module Dependency Direction
//!
//! `proof` ← `maze`
//!
//! `maze` uses `proof` for layout digests. `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod maze;
pub mod proof;
