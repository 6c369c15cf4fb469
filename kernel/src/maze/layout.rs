//! Maze layouts: static walls plus the initial placement of entities.
//!
//! # Glyphs
//!
//! - `%` wall
//! - `.` food
//! - `P` agent (exactly one)
//! - `G` ghost (any number)
//! - ` ` floor
//!
//! Rows must all have the same width. Cells outside the grid behave as walls.

use std::collections::BTreeSet;

use crate::maze::state::{MazeState, Pos};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Typed failure for layout parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown glyph {glyph:?} at row {row}, col {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
    #[error("layout has no agent")]
    MissingAgent,
    #[error("second agent at row {row}, col {col}")]
    DuplicateAgent { row: usize, col: usize },
    #[error("layout of {rows}x{cols} exceeds the supported size")]
    TooLarge { rows: usize, cols: usize },
}

/// A parsed maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    agent: Pos,
    ghosts: Vec<Pos>,
    food: BTreeSet<Pos>,
    normalized: String,
}

impl Layout {
    /// Parse layout text. Trailing empty lines are ignored; a trailing row
    /// of floor spaces is part of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] for empty, ragged, oversized or ill-formed input.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut rows: Vec<&str> = text.lines().collect();
        while rows.last().is_some_and(|l| l.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        if width > usize::from(u16::MAX) || height > usize::from(u16::MAX) {
            return Err(LayoutError::TooLarge {
                rows: height,
                cols: width,
            });
        }

        let mut walls = Vec::with_capacity(width * height);
        let mut agent = None;
        let mut ghosts = Vec::new();
        let mut food = BTreeSet::new();

        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let pos = Pos::new(row as u16, col as u16);
                walls.push(glyph == '%');
                match glyph {
                    '%' | ' ' => {}
                    '.' => {
                        food.insert(pos);
                    }
                    'G' => ghosts.push(pos),
                    'P' => {
                        if agent.replace(pos).is_some() {
                            return Err(LayoutError::DuplicateAgent { row, col });
                        }
                    }
                    _ => return Err(LayoutError::UnknownGlyph { row, col, glyph }),
                }
            }
        }

        let agent = agent.ok_or(LayoutError::MissingAgent)?;
        Ok(Self {
            width,
            height,
            walls,
            agent,
            ghosts,
            food,
            normalized: rows.join("\n"),
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `pos` is a wall. Out-of-bounds cells count as walls.
    #[must_use]
    pub fn is_wall(&self, pos: Pos) -> bool {
        let (row, col) = (usize::from(pos.row), usize::from(pos.col));
        if row >= self.height || col >= self.width {
            return true;
        }
        self.walls[row * self.width + col]
    }

    /// The state at turn zero (score 0).
    #[must_use]
    pub fn initial_state(&self) -> MazeState {
        MazeState::new(self.agent, self.ghosts.clone(), self.food.clone(), 0)
    }

    /// Content digest of the normalized layout text.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(HashDomain::Layout, self.normalized.as_bytes())
    }
}
