//! Turn actions.
//!
//! A turn is exactly one of: move the pawn, or place a wall. The acting seat is
//! not part of the action; the caller (or `Game`) supplies it.

use serde::{Deserialize, Serialize};

use crate::core::{Position, WallPlacement};

/// One turn's action.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{Orientation, Position, WallPlacement};
/// use quoridor_engine::rules::Action;
///
/// let step = Action::Move(Position::new(1, 4));
/// let wall = Action::Wall(WallPlacement::new(3, 3, Orientation::Vertical, 8).unwrap());
///
/// assert_eq!(step.to_string(), "move to (1, 4)");
/// assert_eq!(wall.to_string(), "wall V(3, 3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the pawn to this cell.
    Move(Position),
    /// Place this wall.
    Wall(WallPlacement),
}

impl Action {
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }

    #[must_use]
    pub const fn is_wall(&self) -> bool {
        matches!(self, Action::Wall(_))
    }
}

impl From<Position> for Action {
    fn from(target: Position) -> Self {
        Action::Move(target)
    }
}

impl From<WallPlacement> for Action {
    fn from(placement: WallPlacement) -> Self {
        Action::Wall(placement)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(target) => write!(f, "move to {target}"),
            Action::Wall(placement) => write!(f, "wall {placement}"),
        }
    }
}
