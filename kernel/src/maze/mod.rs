//! The maze world: layout, state and movement rules.
//!
//! `layout` ← `state` ← `rules`; `rules` is the only module that mutates a
//! `MazeState`.

pub mod layout;
pub mod rules;
pub mod state;
