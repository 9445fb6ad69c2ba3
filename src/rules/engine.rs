//! Rules engine trait.
//!
//! `RulesEngine` is the seam between turn keeping (`Game`) and the rules of one
//! board. It knows nothing about whose turn it is: every call names the seat
//! explicitly, and the engine only answers whether that seat's action is legal
//! in the current position.

use crate::board::BoardState;
use crate::core::{IllegalAction, PlayerId};

use super::action::Action;

/// Rules of a turn-based board game.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty for unknown seats
/// - `apply_action`: must leave the state unchanged when it returns `Err`
/// - `winner`: `None` while the game continues
pub trait RulesEngine {
    /// Number of seats.
    fn player_count(&self) -> usize;

    /// Every action `player` may take right now.
    fn legal_actions(&self, player: PlayerId) -> Vec<Action>;

    /// Apply `action` for `player`, or explain why it is illegal.
    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<(), IllegalAction>;

    /// The seat that has won, if any.
    fn winner(&self) -> Option<PlayerId>;

    /// Return to the starting position.
    fn reset(&mut self);

    // === Convenience Methods ===

    fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Check whether `action` is among `player`'s legal actions.
    fn is_legal(&self, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(player).contains(action)
    }
}

impl RulesEngine for BoardState {
    fn player_count(&self) -> usize {
        BoardState::player_count(self)
    }

    /// Pawn moves first, then walls in anchor order.
    fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if !self.has_player(player) {
            return Vec::new();
        }
        let mut actions: Vec<Action> = self.legal_moves(player).into_iter().map(Action::Move).collect();
        actions.extend(self.legal_walls(player).into_iter().map(Action::Wall));
        actions
    }

    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<(), IllegalAction> {
        match *action {
            Action::Move(target) => self.try_apply_move(player, target),
            Action::Wall(placement) => self.try_apply_wall(player, placement),
        }
    }

    fn winner(&self) -> Option<PlayerId> {
        self.check_winner()
    }

    fn reset(&mut self) {
        BoardState::reset(self);
    }

    fn is_legal(&self, player: PlayerId, action: &Action) -> bool {
        match action {
            Action::Move(target) => self.is_legal_move(player, *target),
            Action::Wall(placement) => {
                // Geometry first; the path search only runs on a scratch copy.
                self.can_place_wall(player, placement) && self.clone().apply_wall(player, *placement)
            }
        }
    }
}
