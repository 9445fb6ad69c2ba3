//! Wall placements.
//!
//! A wall is two cell-edges long. It is identified by its **anchor**, the
//! intersection at the top-left of the span, plus an orientation:
//!
//! - `Horizontal` at `(r, c)` separates rows `r` and `r + 1` across columns
//!   `c` and `c + 1`.
//! - `Vertical` at `(r, c)` separates columns `c` and `c + 1` across rows
//!   `r` and `r + 1`.
//!
//! Anchors live on the `(size - 1) x (size - 1)` intersection grid. The `limit`
//! taken by the constructors and transforms is that wall range.

use serde::{Deserialize, Serialize};

use super::error::WallError;
use super::position::Position;

/// Wall orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A candidate or committed wall: anchor plus orientation.
///
/// ```
/// use quoridor_engine::core::{Orientation, WallPlacement};
///
/// let wall = WallPlacement::new(3, 4, Orientation::Horizontal, 8).unwrap();
/// assert_eq!(wall.rotate(8).orientation(), Orientation::Vertical);
///
/// // Anchors outside the wall grid are rejected.
/// assert!(WallPlacement::new(8, 0, Orientation::Horizontal, 8).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WallPlacement {
    row: i32,
    col: i32,
    orientation: Orientation,
}

impl WallPlacement {
    /// Create a placement, checking the anchor lies in `[0, limit)` on both axes.
    pub fn new(row: i32, col: i32, orientation: Orientation, limit: i32) -> Result<Self, WallError> {
        if !(0..limit).contains(&row) || !(0..limit).contains(&col) {
            return Err(WallError::AnchorOutOfRange { row, col, limit });
        }
        Ok(Self { row, col, orientation })
    }

    /// Build a placement from the two cells at either end of its span.
    ///
    /// The endpoints must be exactly two apart along one axis: same row gives a
    /// horizontal wall, same column a vertical one. The anchor is the smaller
    /// row/column. Returns `None` for any other shape or an out-of-range anchor.
    #[must_use]
    pub fn from_endpoints(start: Position, end: Position, limit: i32) -> Option<Self> {
        let row_diff = (start.row - end.row).abs();
        let col_diff = (start.col - end.col).abs();
        let row = start.row.min(end.row);
        let col = start.col.min(end.col);

        let orientation = match (row_diff, col_diff) {
            (0, 2) => Orientation::Horizontal,
            (2, 0) => Orientation::Vertical,
            _ => return None,
        };
        Self::new(row, col, orientation, limit).ok()
    }

    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    #[must_use]
    pub const fn col(&self) -> i32 {
        self.col
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor as a position on the intersection grid.
    #[must_use]
    pub const fn anchor(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Move the anchor by `(dr, dc)` for previewing.
    ///
    /// An axis whose new value would leave `[0, limit)` keeps its old value; the
    /// other axis still moves. This is not a clamp to the edge.
    #[must_use]
    pub fn shift(&self, dr: i32, dc: i32, limit: i32) -> Self {
        let mut row = self.row + dr;
        let mut col = self.col + dc;
        if !(0..limit).contains(&row) {
            row = self.row;
        }
        if !(0..limit).contains(&col) {
            col = self.col;
        }
        Self { row, col, ..*self }
    }

    /// Flip the orientation, clamping the anchor to at most `limit - 1` per axis.
    #[must_use]
    pub fn rotate(&self, limit: i32) -> Self {
        Self {
            row: self.row.min(limit - 1),
            col: self.col.min(limit - 1),
            orientation: self.orientation.flipped(),
        }
    }
}

impl std::fmt::Display for WallPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "{}({}, {})", tag, self.row, self.col)
    }
}
