//! Board coordinates and orthogonal directions.
//!
//! ## Position
//!
//! A `(row, col)` cell coordinate. Row 0 is the top edge, column 0 the left edge.
//! Coordinates are signed so that translating off the board produces a value
//! the board can reject, rather than wrapping.
//!
//! ## Direction
//!
//! The four orthogonal directions. Each has a unit delta, an opposite, and a
//! perpendicular pair used by the diagonal side-step rule.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// Ordering is by row, then column, which is the order legal moves are reported in.
///
/// ```
/// use quoridor_engine::core::{Direction, Position};
///
/// let p = Position::new(4, 4);
/// assert_eq!(p.step(Direction::North), Position::new(3, 4));
/// assert_eq!(p.translate(2, -1), Position::new(6, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return the position offset by `(dr, dc)`.
    #[must_use]
    pub const fn translate(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Return the neighbouring position in `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        self.translate(dr, dc)
    }

    /// Check whether this position lies on a `size x size` board.
    #[must_use]
    pub const fn in_bounds(self, size: i32) -> bool {
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order move generation visits them.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit `(dr, dc)` delta.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The two directions at right angles to this one.
    ///
    /// Vertical directions yield `[West, East]`, horizontal ones `[North, South]`.
    #[must_use]
    pub const fn perpendiculars(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::West, Direction::East],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }
}
