//! Engine error types.

use thiserror::Error;

use super::player::Player;

/// Errors raised by the board model and turn engine.
///
/// None of these are recoverable by retrying: the engine performs no I/O,
/// so every error is a caller bug or a bad board table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move was requested that the current game state does not allow.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A dice face or cell index outside its legal range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A board configuration breaks one of the board invariants.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Automatic play did not finish within the configured number of turns.
    #[error("game did not finish within {0} turns")]
    TurnLimit(u32),
}

impl GameError {
    pub(crate) fn game_over(winner: Player) -> Self {
        Self::InvalidState(format!("game already won by {winner}, no further moves accepted"))
    }

    pub(crate) fn not_your_turn(requested: Player, due: Player) -> Self {
        Self::InvalidState(format!("{requested} cannot move, it is {due}'s turn"))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::game_over(Player::Human);
        assert_eq!(
            err.to_string(),
            "invalid state: game already won by Human, no further moves accepted"
        );

        let err = GameError::not_your_turn(Player::Computer, Player::Human);
        assert_eq!(err.to_string(), "invalid state: Computer cannot move, it is Human's turn");

        assert_eq!(GameError::TurnLimit(10).to_string(), "game did not finish within 10 turns");
    }
}
