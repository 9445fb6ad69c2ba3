//! Board state: the single mutable aggregate of a game.
//!
//! ## Contents
//!
//! - Pawn position and walls remaining, per seat
//! - Wall ownership on the intersection grid, one grid per orientation
//! - Blocked-edge flags per cell and direction, derived from walls and the border
//!
//! Queries take `&self`. Only `reset`, `apply_move` and `apply_wall` take
//! `&mut self`. A failed mutation leaves the state equal (`==`) to what it was.

use std::fmt;

use tracing::{debug, instrument, trace};

use super::grid::{EdgeFlags, Grid};
use crate::core::{
    BoardConfig, ConfigError, Direction, Goal, IllegalAction, Orientation, PlayerId, PlayerMap, Position,
    WallPlacement,
};

/// Full state of one Quoridor board.
///
/// ## Example
///
/// ```
/// use quoridor_engine::board::BoardState;
/// use quoridor_engine::core::{BoardConfig, PlayerId, Position};
///
/// let mut board = BoardState::new(BoardConfig::two_player(9).unwrap()).unwrap();
/// let first = PlayerId::new(0);
///
/// assert_eq!(board.pawn_position(first), Position::new(0, 4));
/// assert!(board.apply_move(first, Position::new(1, 4)));
/// assert_eq!(board.check_winner(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub(super) config: BoardConfig,
    pub(super) pawns: PlayerMap<Position>,
    pub(super) walls_remaining: PlayerMap<u32>,
    /// Horizontal wall owners by anchor.
    pub(super) horizontal: Grid<Option<PlayerId>>,
    /// Vertical wall owners by anchor.
    pub(super) vertical: Grid<Option<PlayerId>>,
    pub(super) edges: EdgeFlags,
}

impl BoardState {
    /// Build a board in its starting position.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let player_count = config.player_count();
        let size = config.size;
        let wall_range = config.wall_range();

        let mut board = Self {
            pawns: PlayerMap::new(player_count, |p| config.seats[p.index()].start),
            walls_remaining: PlayerMap::new(player_count, |p| config.seats[p.index()].walls),
            horizontal: Grid::new(wall_range, None),
            vertical: Grid::new(wall_range, None),
            edges: EdgeFlags::new(size),
            config,
        };
        board.reset();
        Ok(board)
    }

    /// Return to the starting position: no walls, full wall budgets, pawns on
    /// their start cells, outer border blocked.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.horizontal.fill(None);
        self.vertical.fill(None);
        self.edges.reset();
        for (i, seat) in self.config.seats.iter().enumerate() {
            let player = PlayerId::new(i as u8);
            self.pawns[player] = seat.start;
            self.walls_remaining[player] = seat.walls;
        }
        trace!(size = self.size(), players = self.player_count(), "board reset");
    }

    // === Layout ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.config.size
    }

    /// Side length of the wall-anchor grid (`size - 1`).
    #[must_use]
    pub fn wall_range(&self) -> i32 {
        self.config.wall_range()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.pawns.player_count()
    }

    /// Seats in turn order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        self.pawns.player_ids()
    }

    /// Check whether `player` is seated at this board.
    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.pawns.contains(player)
    }

    /// # Panics
    ///
    /// If `player` is not seated at this board.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.config.seats[player.index()].name
    }

    /// # Panics
    ///
    /// If `player` is not seated at this board.
    #[must_use]
    pub fn goal(&self, player: PlayerId) -> Goal {
        self.config.seats[player.index()].goal
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.in_bounds(self.size())
    }

    // === Pawns ===

    /// # Panics
    ///
    /// If `player` is not seated at this board.
    #[must_use]
    pub fn pawn_position(&self, player: PlayerId) -> Position {
        self.pawns[player]
    }

    /// # Panics
    ///
    /// If `player` is not seated at this board.
    #[must_use]
    pub fn walls_remaining(&self, player: PlayerId) -> u32 {
        self.walls_remaining[player]
    }

    /// The seat whose pawn stands on `pos`, if any.
    #[must_use]
    pub fn pawn_at(&self, pos: Position) -> Option<PlayerId> {
        self.pawns.iter().find(|&(_, &p)| p == pos).map(|(id, _)| id)
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.pawn_at(pos).is_some()
    }

    // === Edges and walls ===

    /// Check whether the `dir` edge of `pos` is blocked by a wall or the border.
    ///
    /// Off-board positions report every edge as blocked.
    #[must_use]
    pub fn is_blocked(&self, pos: Position, dir: Direction) -> bool {
        !self.in_bounds(pos) || self.edges.is_blocked(pos, dir)
    }

    /// Check whether a pawn at `pos` can step across its `dir` edge onto the board.
    ///
    /// The edge must be open from both sides.
    #[must_use]
    pub(super) fn can_cross(&self, pos: Position, dir: Direction) -> bool {
        let next = pos.step(dir);
        self.in_bounds(pos)
            && self.in_bounds(next)
            && !self.edges.is_blocked(pos, dir)
            && !self.edges.is_blocked(next, dir.opposite())
    }

    /// Owner of the horizontal wall anchored at `(row, col)`.
    #[must_use]
    pub fn horizontal_wall_at(&self, row: i32, col: i32) -> Option<PlayerId> {
        if !self.horizontal.contains(row, col) {
            return None;
        }
        *self.horizontal.get(row, col)
    }

    /// Owner of the vertical wall anchored at `(row, col)`.
    #[must_use]
    pub fn vertical_wall_at(&self, row: i32, col: i32) -> Option<PlayerId> {
        if !self.vertical.contains(row, col) {
            return None;
        }
        *self.vertical.get(row, col)
    }

    /// Owner of the wall covering the edge below cell `(row, col)`.
    ///
    /// That segment belongs either to the horizontal wall anchored at `(row, col)`
    /// or to the one anchored at `(row, col - 1)`.
    #[must_use]
    pub fn horizontal_segment_owner(&self, row: i32, col: i32) -> Option<PlayerId> {
        self.horizontal_wall_at(row, col)
            .or_else(|| self.horizontal_wall_at(row, col - 1))
    }

    /// Owner of the wall covering the edge right of cell `(row, col)`.
    ///
    /// That segment belongs either to the vertical wall anchored at `(row, col)`
    /// or to the one anchored at `(row - 1, col)`.
    #[must_use]
    pub fn vertical_segment_owner(&self, row: i32, col: i32) -> Option<PlayerId> {
        self.vertical_wall_at(row, col)
            .or_else(|| self.vertical_wall_at(row - 1, col))
    }

    /// All committed walls with their owners, in anchor order.
    #[must_use]
    pub fn walls(&self) -> Vec<(WallPlacement, PlayerId)> {
        let range = self.wall_range();
        let mut out = Vec::new();
        for row in 0..range {
            for col in 0..range {
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    let owner = match orientation {
                        Orientation::Horizontal => *self.horizontal.get(row, col),
                        Orientation::Vertical => *self.vertical.get(row, col),
                    };
                    if let (Some(owner), Ok(wall)) = (owner, WallPlacement::new(row, col, orientation, range)) {
                        out.push((wall, owner));
                    }
                }
            }
        }
        out
    }

    pub(super) fn check_player(&self, player: PlayerId) -> Result<(), IllegalAction> {
        if self.has_player(player) {
            Ok(())
        } else {
            Err(IllegalAction::UnknownPlayer(player))
        }
    }

    // === Moves ===

    /// Move `player`'s pawn to `target` if it is currently a legal destination.
    ///
    /// Legality is recomputed here rather than trusted from an earlier
    /// `legal_moves` call.
    #[instrument(level = "debug", skip(self))]
    pub fn try_apply_move(&mut self, player: PlayerId, target: Position) -> Result<(), IllegalAction> {
        self.check_player(player)?;
        if !self.legal_moves(player).contains(&target) {
            debug!(%player, %target, "move rejected");
            return Err(IllegalAction::IllegalMove { target });
        }
        let from = self.pawns[player];
        self.pawns[player] = target;
        trace!(%player, %from, %target, "pawn moved");
        Ok(())
    }

    /// Boolean form of `try_apply_move`.
    pub fn apply_move(&mut self, player: PlayerId, target: Position) -> bool {
        self.try_apply_move(player, target).is_ok()
    }

    // === Goals ===

    /// Check whether `player` stands on its goal line.
    ///
    /// # Panics
    ///
    /// If `player` is not seated at this board.
    #[must_use]
    pub fn has_player_won(&self, player: PlayerId) -> bool {
        self.goal(player).is_reached(self.pawns[player])
    }

    /// First seat, in seat order, that stands on its goal line.
    #[must_use]
    pub fn check_winner(&self) -> Option<PlayerId> {
        self.players().find(|&p| self.has_player_won(p))
    }
}

/// Plain ASCII drawing for debugging: seat numbers for pawns, `===` for
/// horizontal walls, `#` for vertical walls.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();

        write!(f, "   ")?;
        for col in 0..size {
            write!(f, "{col:^4}")?;
        }
        writeln!(f)?;

        for row in 0..=size {
            write!(f, "   +")?;
            for col in 0..size {
                let walled = row > 0 && row < size && self.horizontal_segment_owner(row - 1, col).is_some();
                write!(f, "{}+", if walled { "===" } else { "---" })?;
            }
            writeln!(f)?;
            if row == size {
                break;
            }

            write!(f, "{row:>2} |")?;
            for col in 0..size {
                match self.pawn_at(Position::new(row, col)) {
                    Some(p) => write!(f, " {} ", p.0)?,
                    None => write!(f, "   ")?,
                }
                let walled = col + 1 < size && self.vertical_segment_owner(row, col).is_some();
                write!(f, "{}", if walled { '#' } else { '|' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
