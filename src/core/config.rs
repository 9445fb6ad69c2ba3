//! Board configuration.
//!
//! A board is described by its side length and an ordered list of seats. Each
//! seat carries:
//! - a display name
//! - a start cell
//! - a `Goal` (a row or a column to reach)
//! - a wall budget
//!
//! The 2- and 4-player variants are just two presets of this one shape:
//!
//! ```
//! use quoridor_engine::core::{BoardConfig, Goal, Position};
//!
//! let two = BoardConfig::two_player(9).unwrap();
//! assert_eq!(two.seats[0].start, Position::new(0, 4));
//! assert_eq!(two.seats[0].goal, Goal::Row(8));
//!
//! let four = BoardConfig::four_player(9).unwrap();
//! assert_eq!(four.seats[2].goal, Goal::Col(8));
//! assert_eq!(four.seats[2].walls, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;
use super::position::Position;

/// Standard board side length.
pub const DEFAULT_SIZE: i32 = 9;

/// Smallest board that still has a wall grid.
pub const MIN_SIZE: i32 = 2;

/// Largest supported board.
pub const MAX_SIZE: i32 = 64;

/// Walls per seat in the 2-player variant.
pub const TWO_PLAYER_WALLS: u32 = 10;

/// Walls per seat in the 4-player variant.
pub const FOUR_PLAYER_WALLS: u32 = 5;

/// Win condition for a seat: reach a given row, or a given column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    Row(i32),
    Col(i32),
}

impl Goal {
    /// Check whether `pos` lies on this goal line.
    #[must_use]
    pub const fn is_reached(self, pos: Position) -> bool {
        match self {
            Goal::Row(row) => pos.row == row,
            Goal::Col(col) => pos.col == col,
        }
    }

    /// The row or column index of the goal line.
    #[must_use]
    pub const fn line(self) -> i32 {
        match self {
            Goal::Row(line) | Goal::Col(line) => line,
        }
    }
}

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name. Not used for identity.
    pub name: String,

    /// Where the pawn stands after `reset`.
    pub start: Position,

    /// Line the pawn must reach to win.
    pub goal: Goal,

    /// Walls available at the start of the game.
    pub walls: u32,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, start: Position, goal: Goal, walls: u32) -> Self {
        Self {
            name: name.into(),
            start,
            goal,
            walls,
        }
    }
}

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Side length of the square board.
    pub size: i32,

    /// Seats in turn order.
    pub seats: Vec<SeatConfig>,
}

impl BoardConfig {
    /// Start an empty configuration; add seats with `with_seat`.
    pub fn new(size: i32) -> Self {
        Self {
            size,
            seats: Vec::new(),
        }
    }

    /// Add a seat.
    #[must_use]
    pub fn with_seat(mut self, seat: SeatConfig) -> Self {
        self.seats.push(seat);
        self
    }

    /// Standard 2-player layout: seats start mid-top and mid-bottom and race to the
    /// opposite row with 10 walls each.
    pub fn two_player(size: i32) -> Result<Self, ConfigError> {
        Self::for_players(size, &["Player 1", "Player 2"])
    }

    /// Standard 4-player layout in seat order top, bottom, left, right. Side seats
    /// race to the opposite column. 5 walls each.
    pub fn four_player(size: i32) -> Result<Self, ConfigError> {
        Self::for_players(size, &["Player 1", "Player 2", "Player 3", "Player 4"])
    }

    /// Standard layout for the given names. The number of names picks the
    /// variant; anything other than 2 or 4 is an error.
    pub fn for_players<S: AsRef<str>>(size: i32, names: &[S]) -> Result<Self, ConfigError> {
        let mid = size / 2;
        let last = size - 1;

        let mut config = Self::new(size);
        match names {
            [top, bottom] => {
                config = config
                    .with_seat(SeatConfig::new(top.as_ref(), Position::new(0, mid), Goal::Row(last), TWO_PLAYER_WALLS))
                    .with_seat(SeatConfig::new(bottom.as_ref(), Position::new(last, mid), Goal::Row(0), TWO_PLAYER_WALLS));
            }
            [top, bottom, left, right] => {
                config = config
                    .with_seat(SeatConfig::new(top.as_ref(), Position::new(0, mid), Goal::Row(last), FOUR_PLAYER_WALLS))
                    .with_seat(SeatConfig::new(bottom.as_ref(), Position::new(last, mid), Goal::Row(0), FOUR_PLAYER_WALLS))
                    .with_seat(SeatConfig::new(left.as_ref(), Position::new(mid, 0), Goal::Col(last), FOUR_PLAYER_WALLS))
                    .with_seat(SeatConfig::new(right.as_ref(), Position::new(mid, last), Goal::Col(0), FOUR_PLAYER_WALLS));
            }
            _ => return Err(ConfigError::PlayerCount { count: names.len() }),
        }

        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Intersection grid side: `size - 1`.
    #[must_use]
    pub const fn wall_range(&self) -> i32 {
        self.size - 1
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::InvalidSize {
                size: self.size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }

        let count = self.seats.len();
        if count != 2 && count != 4 {
            return Err(ConfigError::PlayerCount { count });
        }

        for (i, seat_config) in self.seats.iter().enumerate() {
            let seat = PlayerId::new(i as u8);
            if !seat_config.start.in_bounds(self.size) {
                return Err(ConfigError::StartOutOfBounds {
                    seat,
                    start: seat_config.start,
                });
            }
            if self.seats[..i].iter().any(|s| s.start == seat_config.start) {
                return Err(ConfigError::DuplicateStart {
                    seat,
                    start: seat_config.start,
                });
            }
            if !(0..self.size).contains(&seat_config.goal.line()) {
                return Err(ConfigError::GoalOutOfRange { seat });
            }
        }

        Ok(())
    }
}
