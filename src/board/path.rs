//! Path existence and distance to goal.
//!
//! Breadth-first search over the cell graph, where two orthogonal neighbours are
//! connected iff the edge between them is open from both sides. Pawns never
//! block a path; only walls and the border do.

use std::collections::VecDeque;

use super::grid::Grid;
use super::state::BoardState;
use crate::core::{Direction, PlayerId};

impl BoardState {
    /// Check whether `player` can still reach its goal line.
    ///
    /// # Panics
    ///
    /// If `player` is not seated at this board.
    #[must_use]
    pub fn has_path(&self, player: PlayerId) -> bool {
        self.shortest_path_len(player).is_some()
    }

    /// Number of single steps from `player`'s pawn to its goal line, ignoring
    /// other pawns. `None` when the goal is walled off.
    ///
    /// # Panics
    ///
    /// If `player` is not seated at this board.
    #[must_use]
    pub fn shortest_path_len(&self, player: PlayerId) -> Option<usize> {
        let start = self.pawns[player];
        let goal = self.goal(player);

        let mut visited = Grid::new(self.size(), false);
        let mut queue = VecDeque::new();
        visited.set(start.row, start.col, true);
        queue.push_back((start, 0usize));

        // Cells leave the queue in distance order, so the first goal cell is nearest.
        while let Some((pos, steps)) = queue.pop_front() {
            if goal.is_reached(pos) {
                return Some(steps);
            }
            for dir in Direction::ALL {
                if !self.can_cross(pos, dir) {
                    continue;
                }
                let next = pos.step(dir);
                if *visited.get(next.row, next.col) {
                    continue;
                }
                visited.set(next.row, next.col, true);
                queue.push_back((next, steps + 1));
            }
        }

        None
    }

    /// Check that every seat can reach its goal.
    #[must_use]
    pub fn all_players_connected(&self) -> bool {
        self.players().all(|p| self.has_path(p))
    }

    /// First seat, in seat order, that is cut off from its goal.
    pub(super) fn first_disconnected(&self) -> Option<PlayerId> {
        self.players().find(|&p| !self.has_path(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, Orientation, Position, WallPlacement};

    fn two_player(size: i32) -> BoardState {
        BoardState::new(BoardConfig::two_player(size).unwrap()).unwrap()
    }

    #[test]
    fn test_open_board_distance() {
        let board = two_player(9);
        assert_eq!(board.shortest_path_len(PlayerId::new(0)), Some(8));
        assert_eq!(board.shortest_path_len(PlayerId::new(1)), Some(8));
        assert!(board.all_players_connected());
    }

    #[test]
    fn test_pawns_do_not_block_paths() {
        let mut board = two_player(3);
        // Seat 0 steps to the centre, directly in front of seat 1.
        assert!(board.apply_move(PlayerId::new(0), Position::new(1, 1)));
        assert_eq!(board.shortest_path_len(PlayerId::new(1)), Some(2));
        assert_eq!(board.shortest_path_len(PlayerId::new(0)), Some(1));
    }

    #[test]
    fn test_wall_lengthens_path() {
        let mut board = two_player(9);
        // Wall straight across seat 0's file, just below it.
        let wall = WallPlacement::new(0, 3, Orientation::Horizontal, 8).unwrap();
        assert!(board.apply_wall(PlayerId::new(1), wall));

        // Detour: one step east, then straight down.
        assert_eq!(board.shortest_path_len(PlayerId::new(0)), Some(9));
        assert!(board.has_path(PlayerId::new(0)));
    }

    #[test]
    fn test_goal_reached_is_zero() {
        let mut board = two_player(2);
        // 2x2: seat 0 at (0,1), seat 1 at (1,1). Seat 0 side-steps onto row 1.
        assert!(board.apply_move(PlayerId::new(0), Position::new(1, 0)));
        assert_eq!(board.shortest_path_len(PlayerId::new(0)), Some(0));
    }
}
