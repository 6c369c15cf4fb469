//! `MazeState`: one configuration of the maze world.
//!
//! # Equality semantics
//!
//! Equality and hashing cover the identity of the configuration only:
//! agent position, ghost positions and remaining food. The running score is
//! carried alongside but excluded, so two configurations reached along
//! different paths (with different scores) are the same key for search
//! dedup.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// A grid cell, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: u16,
    pub col: u16,
}

impl Pos {
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Manhattan distance.
    #[must_use]
    pub fn distance(self, other: Pos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

/// Game status derived from a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Won,
    Lost,
}

/// One maze configuration plus its score.
#[derive(Debug, Clone)]
pub struct MazeState {
    agent: Pos,
    ghosts: Vec<Pos>,
    food: BTreeSet<Pos>,
    score: i64,
}

impl MazeState {
    #[must_use]
    pub fn new(agent: Pos, ghosts: Vec<Pos>, food: BTreeSet<Pos>, score: i64) -> Self {
        Self {
            agent,
            ghosts,
            food,
            score,
        }
    }

    #[must_use]
    pub fn agent(&self) -> Pos {
        self.agent
    }

    #[must_use]
    pub fn ghosts(&self) -> &[Pos] {
        &self.ghosts
    }

    #[must_use]
    pub fn has_food(&self, pos: Pos) -> bool {
        self.food.contains(&pos)
    }

    #[must_use]
    pub fn food_remaining(&self) -> usize {
        self.food.len()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// A ghost on the agent's cell loses; otherwise clearing all food wins.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.ghosts.contains(&self.agent) {
            Status::Lost
        } else if self.food.is_empty() {
            Status::Won
        } else {
            Status::Running
        }
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status() == Status::Won
    }

    #[must_use]
    pub fn is_lose(&self) -> bool {
        self.status() == Status::Lost
    }

    pub(crate) fn set_agent(&mut self, pos: Pos) {
        self.agent = pos;
    }

    pub(crate) fn ghosts_mut(&mut self) -> &mut [Pos] {
        &mut self.ghosts
    }

    pub(crate) fn eat(&mut self, pos: Pos) -> bool {
        self.food.remove(&pos)
    }

    pub(crate) fn add_score(&mut self, delta: i64) {
        self.score = self.score.saturating_add(delta);
    }
}

impl PartialEq for MazeState {
    fn eq(&self, other: &Self) -> bool {
        self.agent == other.agent && self.ghosts == other.ghosts && self.food == other.food
    }
}

impl Eq for MazeState {}

impl Hash for MazeState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.agent.hash(state);
        self.ghosts.hash(state);
        self.food.hash(state);
    }
}
