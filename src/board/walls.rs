//! Wall validation and placement.
//!
//! A placement is legal when all of these hold:
//!
//! 1. The anchor lies on this board's wall grid and the player has a wall left.
//! 2. It does not **overlap** a wall of the same orientation: neither of its two
//!    segments is already blocked.
//! 3. It does not **cross** a wall of the other orientation at the same anchor.
//! 4. After placing it, every seat can still reach its goal.
//!
//! Checks 1-3 are geometric and run without touching the board. Check 4 commits
//! the wall, searches, and rolls back on failure, all inside one `&mut self`
//! call so no caller ever sees the tentative wall.

use tracing::{debug, instrument, trace};

use super::state::BoardState;
use crate::core::{Direction, IllegalAction, Orientation, PlayerId, Position, WallPlacement};

/// The four (cell, direction) edge flags a wall sets: two per segment, one from
/// each side.
fn wall_edges(placement: &WallPlacement) -> [(Position, Direction); 4] {
    let anchor = placement.anchor();
    match placement.orientation() {
        Orientation::Horizontal => [
            (anchor, Direction::South),
            (anchor.translate(0, 1), Direction::South),
            (anchor.translate(1, 0), Direction::North),
            (anchor.translate(1, 1), Direction::North),
        ],
        Orientation::Vertical => [
            (anchor, Direction::East),
            (anchor.translate(1, 0), Direction::East),
            (anchor.translate(0, 1), Direction::West),
            (anchor.translate(1, 1), Direction::West),
        ],
    }
}

impl BoardState {
    fn wall_in_range(&self, placement: &WallPlacement) -> bool {
        let range = 0..self.wall_range();
        range.contains(&placement.row()) && range.contains(&placement.col())
    }

    /// Check whether `placement` overlaps or crosses a wall already on the board.
    ///
    /// Placements outside this board's wall grid always conflict.
    #[must_use]
    pub fn conflicts(&self, placement: &WallPlacement) -> bool {
        if !self.wall_in_range(placement) {
            return true;
        }

        let overlaps = wall_edges(placement)
            .iter()
            .any(|&(pos, dir)| self.edges.is_blocked(pos, dir));

        let (row, col) = (placement.row(), placement.col());
        let crosses = match placement.orientation() {
            Orientation::Horizontal => self.vertical.get(row, col).is_some(),
            Orientation::Vertical => self.horizontal.get(row, col).is_some(),
        };

        overlaps || crosses
    }

    /// Geometric and budget checks, without the path search.
    fn check_wall(&self, player: PlayerId, placement: &WallPlacement) -> Result<(), IllegalAction> {
        self.check_player(player)?;
        if !self.wall_in_range(placement) {
            return Err(IllegalAction::WallOutOfRange(*placement));
        }
        if self.walls_remaining[player] == 0 {
            return Err(IllegalAction::NoWallsRemaining);
        }
        if self.conflicts(placement) {
            return Err(IllegalAction::WallConflict(*placement));
        }
        Ok(())
    }

    /// Check whether `placement` passes the range, budget, overlap and crossing
    /// checks for `player`.
    ///
    /// Path preservation is only decided by `apply_wall`.
    #[must_use]
    pub fn can_place_wall(&self, player: PlayerId, placement: &WallPlacement) -> bool {
        self.check_wall(player, placement).is_ok()
    }

    /// Write or clear a wall: its anchor owner plus its four edge flags.
    fn set_wall(&mut self, placement: &WallPlacement, owner: Option<PlayerId>) {
        let (row, col) = (placement.row(), placement.col());
        match placement.orientation() {
            Orientation::Horizontal => self.horizontal.set(row, col, owner),
            Orientation::Vertical => self.vertical.set(row, col, owner),
        }
        for (pos, dir) in wall_edges(placement) {
            self.edges.set(pos, dir, owner.is_some());
        }
    }

    /// Place a wall for `player`, keeping every seat connected to its goal.
    ///
    /// On any rejection the board is left unchanged and the reason returned.
    #[instrument(level = "debug", skip(self))]
    pub fn try_apply_wall(&mut self, player: PlayerId, placement: WallPlacement) -> Result<(), IllegalAction> {
        if let Err(reason) = self.check_wall(player, &placement) {
            debug!(%player, %placement, %reason, "wall rejected");
            return Err(reason);
        }

        self.set_wall(&placement, Some(player));
        if let Some(cut_off) = self.first_disconnected() {
            self.set_wall(&placement, None);
            debug!(%player, %placement, %cut_off, "wall rejected: would cut off a seat");
            return Err(IllegalAction::PathBlocked { player: cut_off });
        }

        self.walls_remaining[player] -= 1;
        trace!(%player, %placement, remaining = self.walls_remaining[player], "wall placed");
        Ok(())
    }

    /// Boolean form of `try_apply_wall`.
    pub fn apply_wall(&mut self, player: PlayerId, placement: WallPlacement) -> bool {
        self.try_apply_wall(player, placement).is_ok()
    }

    /// Every placement `apply_wall` would accept for `player` right now, in
    /// anchor order (row, column, horizontal first).
    ///
    /// Probes a scratch copy; `self` is not modified.
    #[must_use]
    pub fn legal_walls(&self, player: PlayerId) -> Vec<WallPlacement> {
        if self.check_player(player).is_err() || self.walls_remaining[player] == 0 {
            return Vec::new();
        }

        let range = self.wall_range();
        let mut scratch = self.clone();
        let mut out = Vec::new();

        for row in 0..range {
            for col in 0..range {
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    let Ok(wall) = WallPlacement::new(row, col, orientation, range) else {
                        continue;
                    };
                    if scratch.conflicts(&wall) {
                        continue;
                    }
                    scratch.set_wall(&wall, Some(player));
                    if scratch.all_players_connected() {
                        out.push(wall);
                    }
                    scratch.set_wall(&wall, None);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, Goal, SeatConfig};

    fn two_player(size: i32) -> BoardState {
        BoardState::new(BoardConfig::two_player(size).unwrap()).unwrap()
    }

    fn h(row: i32, col: i32) -> WallPlacement {
        WallPlacement::new(row, col, Orientation::Horizontal, 8).unwrap()
    }

    fn v(row: i32, col: i32) -> WallPlacement {
        WallPlacement::new(row, col, Orientation::Vertical, 8).unwrap()
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_horizontal_wall_sets_four_edges() {
        let mut board = two_player(9);
        assert!(board.apply_wall(P0, h(3, 2)));

        assert!(board.is_blocked(Position::new(3, 2), Direction::South));
        assert!(board.is_blocked(Position::new(3, 3), Direction::South));
        assert!(board.is_blocked(Position::new(4, 2), Direction::North));
        assert!(board.is_blocked(Position::new(4, 3), Direction::North));
        assert!(!board.is_blocked(Position::new(3, 4), Direction::South));
        assert!(!board.is_blocked(Position::new(3, 1), Direction::South));

        assert_eq!(board.horizontal_wall_at(3, 2), Some(P0));
        assert_eq!(board.horizontal_segment_owner(3, 3), Some(P0));
        assert_eq!(board.vertical_wall_at(3, 2), None);
        assert_eq!(board.walls_remaining(P0), 9);
    }

    #[test]
    fn test_vertical_wall_sets_four_edges() {
        let mut board = two_player(9);
        assert!(board.apply_wall(P1, v(5, 6)));

        assert!(board.is_blocked(Position::new(5, 6), Direction::East));
        assert!(board.is_blocked(Position::new(6, 6), Direction::East));
        assert!(board.is_blocked(Position::new(5, 7), Direction::West));
        assert!(board.is_blocked(Position::new(6, 7), Direction::West));
        assert!(!board.is_blocked(Position::new(7, 6), Direction::East));

        assert_eq!(board.vertical_wall_at(5, 6), Some(P1));
        assert_eq!(board.vertical_segment_owner(6, 6), Some(P1));
        assert_eq!(board.walls(), vec![(v(5, 6), P1)]);
    }

    #[test]
    fn test_same_orientation_overlap_rejected() {
        let mut board = two_player(9);
        assert!(board.apply_wall(P0, h(4, 4)));

        for overlapping in [h(4, 4), h(4, 3), h(4, 5)] {
            assert!(board.conflicts(&overlapping));
            assert_eq!(
                board.try_apply_wall(P1, overlapping),
                Err(IllegalAction::WallConflict(overlapping))
            );
        }
        // Two columns over shares no segment.
        assert!(board.can_place_wall(P1, &h(4, 6)));
        // Same columns, next row line: distinct segments.
        assert!(board.can_place_wall(P1, &h(5, 4)));
    }

    #[test]
    fn test_crossing_rejected() {
        let mut board = two_player(9);
        assert!(board.apply_wall(P0, h(2, 2)));

        assert!(board.conflicts(&v(2, 2)));
        assert!(!board.apply_wall(P1, v(2, 2)));

        // Touching but not crossing.
        assert!(board.can_place_wall(P1, &v(2, 1)));
        assert!(board.can_place_wall(P1, &v(1, 2)));
        assert!(board.apply_wall(P1, v(2, 3)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut board = two_player(3);
        // Valid on a 9x9 wall grid, but this board's wall range is 2.
        let wall = h(2, 0);
        assert!(board.conflicts(&wall));
        assert_eq!(
            board.try_apply_wall(P0, wall),
            Err(IllegalAction::WallOutOfRange(wall))
        );
    }

    #[test]
    fn test_no_walls_remaining() {
        let config = BoardConfig::new(9)
            .with_seat(SeatConfig::new("a", Position::new(0, 4), Goal::Row(8), 1))
            .with_seat(SeatConfig::new("b", Position::new(8, 4), Goal::Row(0), 0));
        let mut board = BoardState::new(config).unwrap();

        assert!(!board.can_place_wall(P1, &h(0, 0)));
        assert_eq!(board.try_apply_wall(P1, h(0, 0)), Err(IllegalAction::NoWallsRemaining));

        assert!(board.apply_wall(P0, h(0, 0)));
        assert_eq!(board.walls_remaining(P0), 0);
        assert_eq!(board.try_apply_wall(P0, h(6, 6)), Err(IllegalAction::NoWallsRemaining));
        assert!(board.legal_walls(P0).is_empty());
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut board = two_player(9);
        assert_eq!(
            board.try_apply_wall(PlayerId::new(2), h(0, 0)),
            Err(IllegalAction::UnknownPlayer(PlayerId::new(2)))
        );
        assert!(board.legal_walls(PlayerId::new(2)).is_empty());
    }

    #[test]
    fn test_path_blocking_wall_rolled_back() {
        let mut board = two_player(3);
        let limit = board.wall_range();
        let left = WallPlacement::new(0, 0, Orientation::Horizontal, limit).unwrap();
        assert!(board.apply_wall(P1, left));

        let before = board.clone();
        let seal = WallPlacement::new(0, 1, Orientation::Vertical, limit).unwrap();
        assert!(board.can_place_wall(P1, &seal));
        assert_eq!(board.try_apply_wall(P1, seal), Err(IllegalAction::PathBlocked { player: P0 }));
        assert_eq!(board, before);
        assert_eq!(board.vertical_wall_at(0, 1), None);
        assert!(!board.is_blocked(Position::new(0, 1), Direction::East));

        // Forcing it really does cut seat 0 off.
        let mut forced = board.clone();
        forced.set_wall(&seal, Some(P1));
        assert!(!forced.has_path(P0));
        assert!(forced.has_path(P1));
        assert!(!forced.all_players_connected());
    }

    #[test]
    fn test_legal_walls_open_board() {
        let board = two_player(3);
        assert_eq!(board.legal_walls(P0).len(), 8);

        let board = two_player(9);
        let walls = board.legal_walls(P0);
        assert_eq!(walls.len(), 128);
        assert_eq!(walls[0], h(0, 0));
        assert_eq!(walls[1], v(0, 0));
    }

    #[test]
    fn test_legal_walls_excludes_conflicts_and_cuts() {
        let mut board = two_player(3);
        let limit = board.wall_range();
        let left = WallPlacement::new(0, 0, Orientation::Horizontal, limit).unwrap();
        assert!(board.apply_wall(P1, left));

        let before = board.clone();
        let walls = board.legal_walls(P0);
        assert_eq!(board, before);

        for wall in &walls {
            let mut probe = board.clone();
            assert!(probe.apply_wall(P0, *wall), "{wall} listed but rejected");
        }
        // Out: H(0,0) and H(0,1) overlap, V(0,0) crosses, V(0,1) seals seat 0,
        // V(1,1) seals seat 1 into the bottom-left corner.
        let limit = board.wall_range();
        let expected: Vec<WallPlacement> = [
            (1, 0, Orientation::Horizontal),
            (1, 0, Orientation::Vertical),
            (1, 1, Orientation::Horizontal),
        ]
        .into_iter()
        .map(|(r, c, o)| WallPlacement::new(r, c, o, limit).unwrap())
        .collect();
        assert_eq!(walls, expected);
    }
}
