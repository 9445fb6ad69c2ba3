//! # quoridor-engine
//!
//! Rules engine for Quoridor on an N x N board, for 2 or 4 players.
//!
//! ## Design Principles
//!
//! 1. **Seat-Indexed**: Players are seats (`PlayerId`) in turn order. Every
//!    per-player value lives in a `PlayerMap` sized by the configuration, so the
//!    same code serves 2- and 4-player boards.
//!
//! 2. **Always Connected**: A wall is only committed if every seat can still
//!    reach its goal. Placement is a commit, search, rollback transaction inside
//!    one `&mut self` call.
//!
//! 3. **Errors Are Values**: Rejected actions return `IllegalAction` and leave
//!    the board exactly as it was. Bad configurations return `ConfigError`.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, walls, seats, configuration, errors
//! - `board`: `BoardState`, move generation, wall placement, path search
//! - `rules`: `Action`, the `RulesEngine` trait, and `Game` turn keeping
//!
//! ## Example
//!
//! ```
//! use quoridor_engine::core::DEFAULT_SIZE;
//! use quoridor_engine::{Action, BoardConfig, Game, Orientation, PlayerId, Position, WallPlacement};
//!
//! let mut game = Game::new(BoardConfig::two_player(DEFAULT_SIZE).unwrap()).unwrap();
//!
//! game.play(&Action::Move(Position::new(1, 4))).unwrap();
//! let wall = WallPlacement::new(1, 3, Orientation::Horizontal, 8).unwrap();
//! game.play(&Action::Wall(wall)).unwrap();
//!
//! assert_eq!(game.board().walls_remaining(PlayerId::new(1)), 9);
//! assert_eq!(game.active_player(), PlayerId::new(0));
//! ```

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, ConfigError, Direction, Goal, IllegalAction, Orientation, PlayerId, PlayerMap, Position,
    SeatConfig, WallError, WallPlacement,
};

pub use crate::board::{BoardState, MoveList};

pub use crate::rules::{Action, ActionRecord, Game, RulesEngine};
