//! `MazeWorld`: the kernel maze exposed through the search contract.
//!
//! The agent is the only decision maker; ghost moves are folded into
//! `successor` by the kernel rules, so the world stays single-agent and
//! deterministic.

use log::warn;

use forage_kernel::maze::layout::{Layout, LayoutError};
use forage_kernel::maze::rules::{apply_move, legal_moves, Direction};
use forage_kernel::maze::state::MazeState;
use forage_search::contract::StateGraphView;
use forage_search::scorer::Evaluator;

/// Single corridor, no ghosts.
pub const CORRIDOR: &str = "\
%%%%%%%
%P....%
%%%%%%%";

/// Loop with four pellets, no ghosts.
pub const TINY: &str = "\
%%%%%%%
%P  ..%
% %%% %
%.   .%
%%%%%%%";

/// Two corridors and one chasing ghost.
pub const SMALL: &str = "\
%%%%%%%%%%
%P . . . %
% %%%% % %
% .  . %G%
%%%%%%%%%%";

/// Open room with two ghosts.
pub const OPEN: &str = "\
%%%%%%%%%%%%
%P   .   . %
%  .   G   %
% .  %%  . %
%   .   G .%
%%%%%%%%%%%%";

/// Built-in layout text by name.
#[must_use]
pub fn builtin_layout(name: &str) -> Option<&'static str> {
    match name {
        "corridor" => Some(CORRIDOR),
        "tiny" => Some(TINY),
        "small" => Some(SMALL),
        "open" => Some(OPEN),
        _ => None,
    }
}

/// A maze world.
#[derive(Debug, Clone)]
pub struct MazeWorld {
    layout: Layout,
}

impl MazeWorld {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Parse layout text into a world.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the text is not a valid layout.
    pub fn from_text(text: &str) -> Result<Self, LayoutError> {
        Layout::parse(text).map(Self::new)
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn initial_state(&self) -> MazeState {
        self.layout.initial_state()
    }
}

impl StateGraphView for MazeWorld {
    type State = MazeState;
    type Action = Direction;

    fn legal_actions(&self, state: &MazeState) -> Vec<Direction> {
        legal_moves(&self.layout, state)
    }

    fn successor(&self, state: &MazeState, action: &Direction) -> MazeState {
        match apply_move(&self.layout, state, *action) {
            Ok(next) => next,
            Err(e) => {
                warn!("successor of an illegal move ({e}); state unchanged");
                state.clone()
            }
        }
    }

    fn is_win(&self, state: &MazeState) -> bool {
        state.is_win()
    }

    fn is_lose(&self, state: &MazeState) -> bool {
        state.is_lose()
    }
}

/// Evaluator: the running game score.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameScore;

impl Evaluator<MazeState> for GameScore {
    fn evaluate(&self, state: &MazeState) -> i64 {
        state.score()
    }
}

/// The world scores its own states with [`GameScore`].
impl Evaluator<MazeState> for MazeWorld {
    fn evaluate(&self, state: &MazeState) -> i64 {
        GameScore.evaluate(state)
    }
}
