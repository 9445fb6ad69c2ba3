//! Pawn move generation.
//!
//! ## Rules
//!
//! From the pawn's cell, for each direction:
//!
//! 1. An off-board neighbour or a blocked edge yields nothing.
//! 2. An empty neighbour is a destination.
//! 3. A neighbour holding any other pawn allows a **jump** to the cell beyond it,
//!    if that cell is on the board, reachable and empty. Otherwise the pawn may
//!    **side-step** diagonally to either cell perpendicular to the occupied one,
//!    under the same conditions.
//!
//! Occupancy is checked against every seat, so the same rules serve 2- and
//! 4-player boards.

use smallvec::SmallVec;

use super::state::BoardState;
use crate::core::{Direction, PlayerId, Position};

/// Destinations for one pawn. A pawn rarely has more than a handful.
pub type MoveList = SmallVec<[Position; 8]>;

impl BoardState {
    /// Legal destinations for `player`, sorted by row then column, without
    /// duplicates.
    ///
    /// Pure: calling it repeatedly without mutating the board gives the same list.
    ///
    /// # Panics
    ///
    /// If `player` is not seated at this board.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> MoveList {
        let current = self.pawns[player];
        let mut moves = MoveList::new();

        for dir in Direction::ALL {
            if !self.can_cross(current, dir) {
                continue;
            }
            let adjacent = current.step(dir);

            if !self.is_occupied(adjacent) {
                moves.push(adjacent);
                continue;
            }

            let jump = adjacent.step(dir);
            if self.can_cross(adjacent, dir) && !self.is_occupied(jump) {
                moves.push(jump);
                continue;
            }

            for side in dir.perpendiculars() {
                let diagonal = adjacent.step(side);
                if self.can_cross(adjacent, side) && !self.is_occupied(diagonal) {
                    moves.push(diagonal);
                }
            }
        }

        // Two blocked jumps can side-step onto the same diagonal cell.
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Check whether `target` is currently a legal destination for `player`.
    #[must_use]
    pub fn is_legal_move(&self, player: PlayerId, target: Position) -> bool {
        self.has_player(player) && self.legal_moves(player).contains(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, Goal, Orientation, SeatConfig, WallPlacement};

    fn board_with(size: i32, starts: &[(i32, i32)]) -> BoardState {
        let mut config = BoardConfig::new(size);
        for (i, &(row, col)) in starts.iter().enumerate() {
            let goal = if i % 2 == 0 { Goal::Row(size - 1) } else { Goal::Row(0) };
            config = config.with_seat(SeatConfig::new(format!("p{i}"), Position::new(row, col), goal, 10));
        }
        BoardState::new(config).unwrap()
    }

    fn cells(list: &[(i32, i32)]) -> Vec<Position> {
        list.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    #[test]
    fn test_open_board_moves() {
        let board = BoardState::new(BoardConfig::two_player(9).unwrap()).unwrap();
        let moves = board.legal_moves(PlayerId::new(0));
        assert_eq!(moves.as_slice(), cells(&[(0, 3), (0, 5), (1, 4)]).as_slice());
    }

    #[test]
    fn test_center_has_four_moves() {
        let board = board_with(5, &[(2, 2), (4, 4)]);
        let moves = board.legal_moves(PlayerId::new(0));
        assert_eq!(moves.as_slice(), cells(&[(1, 2), (2, 1), (2, 3), (3, 2)]).as_slice());
    }

    #[test]
    fn test_wall_blocks_step() {
        let mut board = board_with(5, &[(2, 2), (4, 4)]);
        // Horizontal wall under row 2, columns 1-2.
        let wall = WallPlacement::new(2, 1, Orientation::Horizontal, 4).unwrap();
        assert!(board.apply_wall(PlayerId::new(1), wall));

        let moves = board.legal_moves(PlayerId::new(0));
        assert!(!moves.contains(&Position::new(3, 2)));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_straight_jump() {
        let board = board_with(3, &[(0, 1), (1, 1)]);
        let moves = board.legal_moves(PlayerId::new(0));
        assert_eq!(moves.as_slice(), cells(&[(0, 0), (0, 2), (2, 1)]).as_slice());
    }

    #[test]
    fn test_jump_off_board_side_steps() {
        let board = board_with(3, &[(1, 1), (0, 1)]);
        let moves = board.legal_moves(PlayerId::new(0));
        // Through (0, 1) is off-board, so the diagonals next to it open up.
        assert_eq!(moves.as_slice(), cells(&[(0, 0), (0, 2), (1, 0), (1, 2), (2, 1)]).as_slice());
    }

    #[test]
    fn test_jump_into_pawn_side_steps() {
        // Seat 0 at (0,1), seat 1 below it at (1,1), seat 2 blocking the jump at (2,1).
        let config = BoardConfig::new(3)
            .with_seat(SeatConfig::new("a", Position::new(0, 1), Goal::Row(2), 5))
            .with_seat(SeatConfig::new("b", Position::new(1, 1), Goal::Row(0), 5))
            .with_seat(SeatConfig::new("c", Position::new(2, 1), Goal::Row(0), 5))
            .with_seat(SeatConfig::new("d", Position::new(1, 0), Goal::Col(2), 5));
        let board = BoardState::new(config).unwrap();

        let moves = board.legal_moves(PlayerId::new(0));
        // (1,0) holds seat 3, so only the east side-step remains.
        assert_eq!(moves.as_slice(), cells(&[(0, 0), (0, 2), (1, 2)]).as_slice());
    }

    #[test]
    fn test_side_step_with_border_behind() {
        let config = BoardConfig::new(3)
            .with_seat(SeatConfig::new("a", Position::new(1, 2), Goal::Col(0), 5))
            .with_seat(SeatConfig::new("b", Position::new(0, 2), Goal::Row(2), 5))
            .with_seat(SeatConfig::new("c", Position::new(2, 0), Goal::Row(0), 5))
            .with_seat(SeatConfig::new("d", Position::new(0, 0), Goal::Col(2), 5));
        let board = BoardState::new(config).unwrap();

        // Seat 3 at (0,0): east neighbour (0,1) is empty, south neighbour (1,0) empty.
        let moves = board.legal_moves(PlayerId::new(3));
        assert_eq!(moves.as_slice(), cells(&[(0, 1), (1, 0)]).as_slice());

        // Seat 0 at (1,2): north (0,2) occupied and backed by the border, so it may
        // side-step west to (0,1). West neighbour (1,1) is empty.
        let moves = board.legal_moves(PlayerId::new(0));
        assert_eq!(moves.as_slice(), cells(&[(0, 1), (1, 1), (2, 2)]).as_slice());
    }

    #[test]
    fn test_two_blocked_jumps_share_diagonal() {
        // Seat 0 at (1,1) with pawns at (0,1) and (1,0). Both jumps leave the
        // board and both side-steps reach (0,0).
        let config = BoardConfig::new(3)
            .with_seat(SeatConfig::new("a", Position::new(1, 1), Goal::Row(2), 5))
            .with_seat(SeatConfig::new("b", Position::new(0, 1), Goal::Row(2), 5))
            .with_seat(SeatConfig::new("c", Position::new(2, 2), Goal::Row(0), 5))
            .with_seat(SeatConfig::new("d", Position::new(1, 0), Goal::Col(2), 5));
        let board = BoardState::new(config).unwrap();

        let moves = board.legal_moves(PlayerId::new(0));
        // North (0,1): jump to (-1,1) off-board; side-steps (0,0) and (0,2).
        // West (1,0): jump to (1,-1) off-board; side-steps (0,0) and (2,0).
        assert_eq!(
            moves.as_slice(),
            cells(&[(0, 0), (0, 2), (1, 2), (2, 0), (2, 1)]).as_slice()
        );
    }

    #[test]
    fn test_legal_moves_idempotent() {
        let board = board_with(3, &[(1, 1), (0, 1)]);
        let first = board.legal_moves(PlayerId::new(0));
        let second = board.legal_moves(PlayerId::new(0));
        assert_eq!(first, second);
        assert!(board.is_legal_move(PlayerId::new(0), Position::new(0, 0)));
        assert!(!board.is_legal_move(PlayerId::new(0), Position::new(0, 1)));
    }
}
