//! Turn keeping on top of a `RulesEngine`.
//!
//! `Game` owns an engine plus the bits of state the rules themselves don't care
//! about: whose turn it is, the turn number, the recorded winner and the history
//! of accepted actions.
//!
//! Seats act in order `0, 1, .., n-1, 0, ..`. An illegal action is reported and
//! the same seat stays to move, so the caller can re-prompt. Once a seat has
//! won, every further action is rejected with `IllegalAction::GameOver`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::BoardState;
use crate::core::{BoardConfig, ConfigError, IllegalAction, PlayerId};

use super::action::Action;
use super::engine::RulesEngine;

/// An accepted action, in the order it was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub player: PlayerId,
    /// The action taken.
    pub action: Action,
    /// Turn number when the action was taken.
    pub turn: u32,
}

/// A game in progress.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{BoardConfig, PlayerId, Position};
/// use quoridor_engine::rules::{Action, Game};
///
/// let mut game = Game::new(BoardConfig::two_player(9).unwrap()).unwrap();
/// assert_eq!(game.active_player(), PlayerId::new(0));
///
/// game.play(&Action::Move(Position::new(1, 4))).unwrap();
/// assert_eq!(game.active_player(), PlayerId::new(1));
/// assert_eq!(game.turn_number(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Game<E = BoardState> {
    engine: E,
    active: PlayerId,
    turn_number: u32,
    winner: Option<PlayerId>,
    history: Vec<ActionRecord>,
}

impl Game<BoardState> {
    /// Start a Quoridor game on a fresh board.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(BoardState::new(config)?))
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.engine
    }
}

impl<E: RulesEngine> Game<E> {
    /// Wrap an engine. Seat 0 moves first, on turn 1.
    ///
    /// An engine that already has a winner yields a finished game.
    pub fn from_engine(engine: E) -> Self {
        let winner = engine.winner();
        Self {
            engine,
            active: PlayerId::new(0),
            turn_number: 1,
            winner,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Unwrap the engine, dropping turn state.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// The seat to act next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Turn number, starting at 1 and advancing with every accepted action.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Accepted actions so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Legal actions for the seat to act. Empty once the game is over.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_over() {
            return Vec::new();
        }
        self.engine.legal_actions(self.active)
    }

    /// Play `action` for the active seat.
    ///
    /// On success the turn passes to the next seat and the winner, if this
    /// action produced one, is returned. On failure nothing changes.
    #[instrument(level = "debug", skip(self), fields(player = %self.active, turn = self.turn_number))]
    pub fn play(&mut self, action: &Action) -> Result<Option<PlayerId>, IllegalAction> {
        if self.winner.is_some() {
            debug!(%action, "action rejected: game over");
            return Err(IllegalAction::GameOver);
        }

        let player = self.active;
        self.engine.apply_action(player, action)?;
        self.history.push(ActionRecord {
            player,
            action: *action,
            turn: self.turn_number,
        });

        self.winner = self.engine.winner();
        if let Some(winner) = self.winner {
            info!(%winner, turn = self.turn_number, "game won");
            return Ok(Some(winner));
        }

        self.active = player.next(self.engine.player_count());
        self.turn_number += 1;
        Ok(None)
    }

    /// Restart from the engine's starting position.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.active = PlayerId::new(0);
        self.turn_number = 1;
        self.winner = self.engine.winner();
        self.history.clear();
    }
}
