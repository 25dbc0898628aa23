//! Game state.
//!
//! ## GameState
//!
//! Everything the turn engine needs to resolve the next roll:
//! - Both token positions
//! - Whose turn it is, or who has won
//! - Turn counter and the history of resolved moves
//!
//! States are values. `TurnEngine::resolve_turn` takes a state and returns
//! a new one, leaving the input untouched. The move history is an `im`
//! persistent vector, so that copy is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::outcome::MoveResult;
use super::player::{Player, PlayerMap};

/// Progress of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for `turn` to roll.
    InProgress { turn: Player },
    /// `winner` reached square 100. Terminal.
    Won { winner: Player },
}

/// Snapshot of a game between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    positions: PlayerMap<Cell>,
    status: Status,
    /// Completed turns (starts at 0).
    turn_number: u32,
    history: Vector<MoveResult>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Both tokens on square 1, human to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: PlayerMap::with_value(Cell::START),
            status: Status::InProgress { turn: Player::Human },
            turn_number: 0,
            history: Vector::new(),
        }
    }

    /// Copy of this state with one token moved to `cell`.
    ///
    /// Sets up mid-game positions without replaying dice. Does not touch
    /// whose turn it is or the history.
    #[must_use]
    pub fn with_position(mut self, player: Player, cell: Cell) -> Self {
        self.positions[player] = cell;
        self
    }

    /// Copy of this state with `player` to move next.
    ///
    /// Has no effect on a finished game.
    #[must_use]
    pub fn with_turn(mut self, player: Player) -> Self {
        if let Status::InProgress { .. } = self.status {
            self.status = Status::InProgress { turn: player };
        }
        self
    }

    #[must_use]
    pub fn position(&self, player: Player) -> Cell {
        self.positions[player]
    }

    #[must_use]
    pub fn positions(&self) -> &PlayerMap<Cell> {
        &self.positions
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Player due to roll, or `None` once the game is won.
    #[must_use]
    pub fn turn(&self) -> Option<Player> {
        match self.status {
            Status::InProgress { turn } => Some(turn),
            Status::Won { .. } => None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, Status::Won { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            Status::Won { winner } => Some(winner),
            Status::InProgress { .. } => None,
        }
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every move resolved so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveResult> {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveResult> {
        self.history.last()
    }

    /// Apply a resolved move. Only the turn engine calls this.
    pub(crate) fn apply(&mut self, result: &MoveResult) {
        self.positions[result.player] = result.final_cell;
        self.status = if result.won {
            Status::Won {
                winner: result.player,
            }
        } else {
            Status::InProgress {
                turn: result.player.other(),
            }
        };
        self.turn_number += 1;
        self.history.push_back(result.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoveEvent;

    fn cell(n: u8) -> Cell {
        Cell::new(n).unwrap()
    }

    fn plain_move(player: Player, start: u8, dice: u8) -> MoveResult {
        let end = cell(start + dice);
        MoveResult {
            player,
            start: cell(start),
            dice,
            straight: start + dice,
            bounced: end,
            final_cell: end,
            event: MoveEvent::None,
            won: end.is_finish(),
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.position(Player::Human), Cell::START);
        assert_eq!(state.position(Player::Computer), Cell::START);
        assert_eq!(state.turn(), Some(Player::Human));
        assert!(!state.is_terminal());
        assert_eq!(state.winner(), None);
        assert_eq!(state.turn_number(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_apply_flips_turn() {
        let mut state = GameState::new();
        state.apply(&plain_move(Player::Human, 1, 3));

        assert_eq!(state.position(Player::Human), cell(4));
        assert_eq!(state.turn(), Some(Player::Computer));
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.last_move().map(|m| m.dice), Some(3));
    }

    #[test]
    fn test_apply_win_is_terminal() {
        let mut state = GameState::new().with_position(Player::Computer, cell(97));
        state.apply(&plain_move(Player::Computer, 97, 3));

        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(Player::Computer));
        assert_eq!(state.turn(), None);
        assert_eq!(state.position(Player::Computer), Cell::FINISH);
    }

    #[test]
    fn test_with_turn_ignored_after_win() {
        let mut state = GameState::new().with_position(Player::Human, cell(98));
        state.apply(&plain_move(Player::Human, 98, 2));

        let state = state.with_turn(Player::Computer);
        assert_eq!(state.status(), Status::Won { winner: Player::Human });
    }

    #[test]
    fn test_clone_is_independent() {
        let original = GameState::new();
        let mut copy = original.clone();
        copy.apply(&plain_move(Player::Human, 1, 2));

        assert_eq!(original.turn_number(), 0);
        assert!(original.history().is_empty());
        assert_eq!(copy.history().len(), 1);
    }

    #[test]
    fn test_serialization() {
        let mut state = GameState::new();
        state.apply(&plain_move(Player::Human, 1, 4));

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
