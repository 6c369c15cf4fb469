//! Movement rules: the only way a `MazeState` changes.
//!
//! One turn is an agent move followed, unless the game ended, by one step of
//! every ghost. Ghosts are deterministic: each steps to the non-wall
//! neighbor closest to the agent, ties broken by [`Direction::ALL`] order.

use crate::maze::layout::Layout;
use crate::maze::state::{MazeState, Pos, Status};

/// Points lost on every agent move.
pub const TIME_PENALTY: i64 = 1;
/// Points for eating one food pellet.
pub const FOOD_REWARD: i64 = 10;
/// Bonus for clearing the last pellet.
pub const WIN_REWARD: i64 = 500;
/// Points lost when a ghost catches the agent.
pub const LOSE_PENALTY: i64 = 500;

/// An agent or ghost move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Enumeration order for legal moves and ghost tie-breaking.
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Stop,
    ];

    /// The cell reached from `from`, or `None` when it leaves the `u16` grid.
    #[must_use]
    pub fn step(self, from: Pos) -> Option<Pos> {
        let (row, col) = (from.row, from.col);
        match self {
            Direction::North => row.checked_sub(1).map(|r| Pos::new(r, col)),
            Direction::South => row.checked_add(1).map(|r| Pos::new(r, col)),
            Direction::East => col.checked_add(1).map(|c| Pos::new(row, c)),
            Direction::West => col.checked_sub(1).map(|c| Pos::new(row, c)),
            Direction::Stop => Some(from),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Stop => "stop",
        }
    }
}

/// Typed failure for [`apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("{direction:?} from {from:?} runs into a wall")]
    Blocked { from: Pos, direction: Direction },
}

/// Legal agent moves in [`Direction::ALL`] order. Empty for terminal states.
#[must_use]
pub fn legal_moves(layout: &Layout, state: &MazeState) -> Vec<Direction> {
    if state.status() != Status::Running {
        return Vec::new();
    }
    Direction::ALL
        .into_iter()
        .filter(|d| open_step(layout, state.agent(), *d).is_some())
        .collect()
}

/// Apply one agent move and the ghost response.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] for terminal states and
/// [`MoveError::Blocked`] when the move runs into a wall.
pub fn apply_move(
    layout: &Layout,
    state: &MazeState,
    direction: Direction,
) -> Result<MazeState, MoveError> {
    if state.status() != Status::Running {
        return Err(MoveError::GameOver);
    }
    let from = state.agent();
    let to = open_step(layout, from, direction).ok_or(MoveError::Blocked { from, direction })?;

    let mut next = state.clone();
    next.set_agent(to);
    next.add_score(-TIME_PENALTY);
    if next.eat(to) {
        next.add_score(FOOD_REWARD);
    }
    if settle(&mut next) {
        return Ok(next);
    }

    let target = next.agent();
    for ghost in next.ghosts_mut() {
        *ghost = chase(layout, *ghost, target);
    }
    settle(&mut next);
    Ok(next)
}

/// Apply terminal rewards. Returns `true` when the game is over.
fn settle(state: &mut MazeState) -> bool {
    match state.status() {
        Status::Running => false,
        Status::Won => {
            state.add_score(WIN_REWARD);
            true
        }
        Status::Lost => {
            state.add_score(-LOSE_PENALTY);
            true
        }
    }
}

fn open_step(layout: &Layout, from: Pos, direction: Direction) -> Option<Pos> {
    direction.step(from).filter(|p| !layout.is_wall(*p))
}

fn chase(layout: &Layout, ghost: Pos, target: Pos) -> Pos {
    Direction::ALL
        .into_iter()
        .filter(|d| *d != Direction::Stop)
        .filter_map(|d| open_step(layout, ghost, d))
        .min_by_key(|p| p.distance(target))
        .unwrap_or(ghost)
}
