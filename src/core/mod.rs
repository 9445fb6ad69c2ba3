//! Core value types: positions, directions, walls, seats, configuration, errors.
//!
//! Nothing in this module owns board state. These are the plain values that flow
//! into and out of `BoardState`.

pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod wall;

pub use config::{
    BoardConfig, Goal, SeatConfig, DEFAULT_SIZE, FOUR_PLAYER_WALLS, MAX_SIZE, MIN_SIZE,
    TWO_PLAYER_WALLS,
};
pub use error::{ConfigError, IllegalAction, WallError};
pub use player::{PlayerId, PlayerMap};
pub use position::{Direction, Position};
pub use wall::{Orientation, WallPlacement};
