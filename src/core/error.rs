//! Error types.
//!
//! Two kinds of failure exist:
//!
//! - **Construction errors** (`ConfigError`, `WallError`): a board or placement
//!   that cannot exist. These fail fast.
//! - **Illegal actions** (`IllegalAction`): a well-formed action the rules reject
//!   in the current position. These are ordinary outcomes; the board is left
//!   exactly as it was.

use thiserror::Error;

use super::player::PlayerId;
use super::position::Position;
use super::wall::WallPlacement;

/// Invalid board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is outside {min}..={max}")]
    InvalidSize { size: i32, min: i32, max: i32 },

    #[error("expected 2 or 4 players, got {count}")]
    PlayerCount { count: usize },

    #[error("{seat} starts off the board at {start}")]
    StartOutOfBounds { seat: PlayerId, start: Position },

    #[error("{seat} shares its start cell {start} with an earlier seat")]
    DuplicateStart { seat: PlayerId, start: Position },

    #[error("{seat} has a goal line outside the board")]
    GoalOutOfRange { seat: PlayerId },
}

/// Invalid wall placement construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WallError {
    #[error("wall anchor ({row}, {col}) must be within [0, {limit})")]
    AnchorOutOfRange { row: i32, col: i32, limit: i32 },
}

/// Why the rules rejected an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("{0} is not seated at this board")]
    UnknownPlayer(PlayerId),

    #[error("{target} is not a legal destination")]
    IllegalMove { target: Position },

    #[error("no walls remaining")]
    NoWallsRemaining,

    #[error("{0} is outside the wall grid")]
    WallOutOfRange(WallPlacement),

    #[error("{0} overlaps or crosses an existing wall")]
    WallConflict(WallPlacement),

    #[error("wall would cut {player} off from its goal")]
    PathBlocked { player: PlayerId },

    #[error("the game is already over")]
    GameOver,
}
