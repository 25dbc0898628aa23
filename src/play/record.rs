//! Game records.
//!
//! A record captures a finished (or abandoned) game: the dice seed, every
//! resolved move in order, and the winner. Records can be replayed against
//! a board to check they are consistent, and encoded as JSON or compact
//! binary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::core::{GameError, GameRng, GameState, MoveEvent, MoveResult, Player, PlayerMap};
use crate::rules::TurnEngine;

/// Failure to encode or decode a record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary: {0}")]
    Binary(#[from] bincode::Error),
}

/// Per-player tallies over a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTally {
    pub rolls: u32,
    pub ladders: u32,
    pub snakes: u32,
    pub bounces: u32,
}

/// Complete history of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Dice seed, when the game used a seeded `GameRng`.
    pub seed: Option<u64>,

    /// All moves in the order they were played.
    pub moves: Vec<MoveResult>,

    /// `None` if the game was abandoned before anyone reached 100.
    pub winner: Option<Player>,
}

impl GameRecord {
    /// Capture the history held in a state.
    pub fn from_state(state: &GameState, seed: Option<u64>) -> Self {
        Self {
            seed,
            moves: state.history().iter().cloned().collect(),
            winner: state.winner(),
        }
    }

    /// Number of turns played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one player.
    pub fn player_moves(&self, player: Player) -> impl Iterator<Item = &MoveResult> {
        self.moves.iter().filter(move |m| m.player == player)
    }

    /// Rolls, ladders, snakes and bounces per player.
    pub fn tally(&self) -> PlayerMap<PlayerTally> {
        let mut tally: PlayerMap<PlayerTally> = PlayerMap::with_default();
        for m in &self.moves {
            let entry = &mut tally[m.player];
            entry.rolls += 1;
            match m.event {
                MoveEvent::LadderClimb { .. } => entry.ladders += 1,
                MoveEvent::SnakeBite { .. } => entry.snakes += 1,
                MoveEvent::None => {}
            }
            if m.did_bounce() {
                entry.bounces += 1;
            }
        }
        tally
    }

    /// Re-resolve every recorded die on `board` and check each move matches.
    ///
    /// Returns the final state on success, `InvalidState` naming the first
    /// move that differs, or whatever `resolve_turn` rejects.
    pub fn replay(&self, board: &Board) -> Result<GameState, GameError> {
        // The die is never rolled here; recorded faces are fed in directly.
        let engine = TurnEngine::new(board.clone(), GameRng::new(0));
        let mut state = engine.new_game();

        for (index, recorded) in self.moves.iter().enumerate() {
            let (next, result) = engine.resolve_turn(&state, recorded.dice)?;
            if &result != recorded {
                return Err(GameError::InvalidState(format!(
                    "move {index} does not replay: recorded {recorded:?}, resolved {result:?}"
                )));
            }
            state = next;
        }

        if state.winner() != self.winner {
            return Err(GameError::InvalidState(format!(
                "recorded winner {:?} but replay ends with {:?}",
                self.winner,
                state.winner()
            )));
        }

        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
